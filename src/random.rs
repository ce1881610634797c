//! Random source capability used by every search.
//!
//! The runners never reach for a global generator. They draw through
//! [`RandomSource`], which is implemented for every [`rand::Rng`] and for
//! the deterministic [`ScriptedSource`] stub.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform real-valued draws.
pub trait RandomSource {
    /// Returns a uniform draw from `[low, high]`.
    ///
    /// `low == high` yields `low`. Callers guarantee `low <= high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Returns a uniform draw from `[0, 1)`.
    fn uniform01(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }

    fn uniform01(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates the seeded generator used by the `run` entry points.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the generator for an optional seed, falling back to OS entropy.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// A replaying random source for deterministic tests.
///
/// `uniform(low, high)` consumes the next scripted fraction `f` and returns
/// `low + f * (high - low)`; `uniform01()` consumes the next scripted draw.
/// Each script repeats its last value once exhausted, and an empty script
/// behaves as `[0.5]` for fractions and `[0.0]` for draws.
///
/// # Examples
///
/// ```
/// use u_localsearch::random::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.5, 1.0]).with_draws(vec![0.25]);
/// assert_eq!(source.uniform(-5.0, 5.0), 0.0);
/// assert_eq!(source.uniform(-5.0, 5.0), 5.0);
/// assert_eq!(source.uniform(-1.0, 1.0), 1.0);
/// assert_eq!(source.uniform01(), 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    fractions: Vec<f64>,
    fraction_cursor: usize,
    draws: Vec<f64>,
    draw_cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `fractions` for `uniform`.
    pub fn new(fractions: Vec<f64>) -> Self {
        Self {
            fractions,
            ..Self::default()
        }
    }

    /// Sets the script replayed by `uniform01`.
    pub fn with_draws(mut self, draws: Vec<f64>) -> Self {
        self.draws = draws;
        self.draw_cursor = 0;
        self
    }

    /// Number of `uniform` calls served so far.
    pub fn uniform_calls(&self) -> usize {
        self.fraction_cursor
    }

    /// Number of `uniform01` calls served so far.
    pub fn uniform01_calls(&self) -> usize {
        self.draw_cursor
    }
}

fn replay(script: &[f64], cursor: &mut usize, empty: f64) -> f64 {
    let value = script
        .get(*cursor)
        .or_else(|| script.last())
        .copied()
        .unwrap_or(empty);
    *cursor += 1;
    value
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let f = replay(&self.fractions, &mut self.fraction_cursor, 0.5);
        low + f * (high - low)
    }

    fn uniform01(&mut self) -> f64 {
        replay(&self.draws, &mut self.draw_cursor, 0.0)
    }
}
