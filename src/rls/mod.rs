//! Random Local Search (RLS).
//!
//! Samples one random neighbor per iteration inside a small box around the
//! current point. Improving neighbors are always taken; worse ones are taken
//! with a fixed probability so the walk can leave shallow basins. The search
//! stops as soon as a sampled neighbor barely changes the objective.

mod config;
mod runner;

pub use config::RlsConfig;
pub use runner::RlsRunner;
