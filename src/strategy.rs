//! The three searches behind one interface.
//!
//! Each config type is its own strategy: it knows how to seed, which
//! neighbors to propose and which to accept. [`Algorithm`] bundles the
//! three for callers that pick the method at runtime.

use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::hc::{HcConfig, HcRunner};
use crate::objective::Objective;
use crate::outcome::SearchOutcome;
use crate::random::{create_rng, rng_for, RandomSource};
use crate::rls::{RlsConfig, RlsRunner};
use crate::sa::{SaConfig, SaRunner};

/// A configured single-point local search.
pub trait LocalSearch {
    /// Short human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Seed carried by the configuration, if any.
    fn seed(&self) -> Option<u64>;

    /// Runs one search drawing from `rng`.
    fn search<O, R>(
        &self,
        objective: &O,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized;

    /// Runs one search with a fresh generator seeded by `seed`.
    fn search_seeded<O: Objective + ?Sized>(
        &self,
        objective: &O,
        bounds: &Bounds,
        seed: u64,
    ) -> Result<SearchOutcome, SearchError> {
        let mut rng = create_rng(seed);
        self.search(objective, bounds, &mut rng)
    }

    /// Runs one search seeded from [`seed`](Self::seed), falling back to OS
    /// entropy when the configuration carries none.
    fn search_default<O: Objective + ?Sized>(
        &self,
        objective: &O,
        bounds: &Bounds,
    ) -> Result<SearchOutcome, SearchError> {
        let mut rng = rng_for(self.seed());
        self.search(objective, bounds, &mut rng)
    }
}

impl LocalSearch for HcConfig {
    fn name(&self) -> &'static str {
        "Hill Climbing"
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn search<O, R>(
        &self,
        objective: &O,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        HcRunner::run_with_rng(objective, bounds, self, rng)
    }
}

impl LocalSearch for RlsConfig {
    fn name(&self) -> &'static str {
        "Random Local Search"
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn search<O, R>(
        &self,
        objective: &O,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        RlsRunner::run_with_rng(objective, bounds, self, rng)
    }
}

impl LocalSearch for SaConfig {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn search<O, R>(
        &self,
        objective: &O,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        SaRunner::run_with_rng(objective, bounds, self, rng)
    }
}

/// Runtime choice among the three searches.
///
/// # Examples
///
/// ```
/// use u_localsearch::bounds::Bounds;
/// use u_localsearch::objective::Sphere;
/// use u_localsearch::strategy::{Algorithm, LocalSearch};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// for algorithm in Algorithm::all_defaults() {
///     let outcome = algorithm.search_seeded(&Sphere, &bounds, 42).unwrap();
///     assert!(bounds.contains(&outcome.point));
/// }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    HillClimbing(HcConfig),
    RandomLocalSearch(RlsConfig),
    SimulatedAnnealing(SaConfig),
}

impl Algorithm {
    /// All three searches with default parameters, in the order
    /// Hill Climbing, Random Local Search, Simulated Annealing.
    pub fn all_defaults() -> [Algorithm; 3] {
        [
            Algorithm::HillClimbing(HcConfig::default()),
            Algorithm::RandomLocalSearch(RlsConfig::default()),
            Algorithm::SimulatedAnnealing(SaConfig::default()),
        ]
    }
}

impl LocalSearch for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::HillClimbing(config) => config.name(),
            Algorithm::RandomLocalSearch(config) => config.name(),
            Algorithm::SimulatedAnnealing(config) => config.name(),
        }
    }

    fn seed(&self) -> Option<u64> {
        match self {
            Algorithm::HillClimbing(config) => config.seed,
            Algorithm::RandomLocalSearch(config) => config.seed,
            Algorithm::SimulatedAnnealing(config) => config.seed,
        }
    }

    fn search<O, R>(
        &self,
        objective: &O,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        match self {
            Algorithm::HillClimbing(config) => config.search(objective, bounds, rng),
            Algorithm::RandomLocalSearch(config) => config.search(objective, bounds, rng),
            Algorithm::SimulatedAnnealing(config) => config.search(objective, bounds, rng),
        }
    }
}

impl From<HcConfig> for Algorithm {
    fn from(config: HcConfig) -> Self {
        Algorithm::HillClimbing(config)
    }
}

impl From<RlsConfig> for Algorithm {
    fn from(config: RlsConfig) -> Self {
        Algorithm::RandomLocalSearch(config)
    }
}

impl From<SaConfig> for Algorithm {
    fn from(config: SaConfig) -> Self {
        Algorithm::SimulatedAnnealing(config)
    }
}
