//! Hill Climbing (HC).
//!
//! Greedy descent over a fixed grid of axis-aligned neighbors. Every
//! iteration tries `+step` and `-step` along each dimension and moves to
//! the best of them; the search stops once that move no longer improves the
//! objective by at least epsilon.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1.1

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::HcRunner;
