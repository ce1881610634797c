//! Single-point local search over box-bounded continuous spaces.
//!
//! Provides three classic derivative-free minimizers:
//!
//! - **Hill Climbing (HC)**: greedy descent over the `2n` axis-aligned
//!   neighbors at a fixed step size.
//! - **Random Local Search (RLS)**: one random neighbor per iteration,
//!   with a fixed probability of taking non-improving moves.
//! - **Simulated Annealing (SA)**: random neighbors accepted by the
//!   Metropolis criterion under geometric cooling.
//!
//! All three share the [`Objective`](objective::Objective) contract, the
//! [`Bounds`](bounds::Bounds) box with its clamp helper, and an injected
//! [`RandomSource`](random::RandomSource), so a seeded or scripted source
//! makes every run reproducible.
//!
//! # Examples
//!
//! ```
//! use u_localsearch::bounds::Bounds;
//! use u_localsearch::objective::Sphere;
//! use u_localsearch::sa::{SaConfig, SaRunner};
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
//! let outcome = SaRunner::run(&Sphere, &bounds, &SaConfig::default().with_seed(42)).unwrap();
//! assert!(bounds.contains(&outcome.point));
//! ```

pub mod bounds;
pub mod error;
pub mod hc;
pub mod objective;
pub mod outcome;
pub mod random;
pub mod rls;
pub mod sa;
pub mod strategy;
pub mod trials;
