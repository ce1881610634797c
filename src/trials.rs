//! Repeated independent runs for statistical comparison.
//!
//! Trial `i` owns a generator seeded with `base_seed + i`, so the summary is
//! the same whether the runs execute sequentially or, with the `parallel`
//! feature, across the rayon thread pool.

use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::outcome::SearchOutcome;
use crate::strategy::LocalSearch;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcomes of a batch of trials plus statistics over their final values.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    /// One outcome per trial, in seed order.
    pub outcomes: Vec<SearchOutcome>,
    /// Index of the trial with the lowest final value.
    pub best_index: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub mean_value: f64,
    /// Population standard deviation of the final values.
    pub std_dev: f64,
}

impl TrialSummary {
    /// The outcome with the lowest final value, or `None` if `best_index`
    /// does not point into `outcomes`.
    pub fn best(&self) -> Option<&SearchOutcome> {
        self.outcomes.get(self.best_index)
    }

    fn from_outcomes(outcomes: Vec<SearchOutcome>) -> Self {
        let n = outcomes.len() as f64;
        let mut best_index = 0;
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for (i, outcome) in outcomes.iter().enumerate() {
            if outcome.value < min_value {
                min_value = outcome.value;
                best_index = i;
            }
            max_value = max_value.max(outcome.value);
            sum += outcome.value;
        }
        let mean_value = sum / n;
        let variance = outcomes
            .iter()
            .map(|o| (o.value - mean_value).powi(2))
            .sum::<f64>()
            / n;

        Self {
            outcomes,
            best_index,
            min_value,
            max_value,
            mean_value,
            std_dev: variance.sqrt(),
        }
    }
}

/// Runs `count` independent searches seeded `base_seed, base_seed + 1, …`.
///
/// # Examples
///
/// ```
/// use u_localsearch::bounds::Bounds;
/// use u_localsearch::hc::HcConfig;
/// use u_localsearch::objective::Sphere;
/// use u_localsearch::trials::run_trials;
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let summary = run_trials(&HcConfig::default(), &Sphere, &bounds, 0, 8).unwrap();
/// assert_eq!(summary.outcomes.len(), 8);
/// assert!(summary.min_value <= summary.mean_value);
/// ```
#[instrument(level = "debug", skip_all, fields(algorithm = strategy.name(), count = count))]
pub fn run_trials<S, O>(
    strategy: &S,
    objective: &O,
    bounds: &Bounds,
    base_seed: u64,
    count: usize,
) -> Result<TrialSummary, SearchError>
where
    S: LocalSearch + Sync,
    O: Objective + Sync + ?Sized,
{
    if count == 0 {
        return Err(SearchError::InvalidConfig(
            "trial count must be at least 1".into(),
        ));
    }

    let outcomes = collect_outcomes(strategy, objective, bounds, base_seed, count)?;
    let summary = TrialSummary::from_outcomes(outcomes);

    debug!(
        best = summary.min_value,
        mean = summary.mean_value,
        std_dev = summary.std_dev,
        "trials finished"
    );
    Ok(summary)
}

#[cfg(feature = "parallel")]
fn collect_outcomes<S, O>(
    strategy: &S,
    objective: &O,
    bounds: &Bounds,
    base_seed: u64,
    count: usize,
) -> Result<Vec<SearchOutcome>, SearchError>
where
    S: LocalSearch + Sync,
    O: Objective + Sync + ?Sized,
{
    (0..count)
        .into_par_iter()
        .map(|i| strategy.search_seeded(objective, bounds, base_seed.wrapping_add(i as u64)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_outcomes<S, O>(
    strategy: &S,
    objective: &O,
    bounds: &Bounds,
    base_seed: u64,
    count: usize,
) -> Result<Vec<SearchOutcome>, SearchError>
where
    S: LocalSearch + Sync,
    O: Objective + Sync + ?Sized,
{
    (0..count)
        .map(|i| strategy.search_seeded(objective, bounds, base_seed.wrapping_add(i as u64)))
        .collect()
}
