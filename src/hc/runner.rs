//! Hill Climbing execution loop.

use super::config::HcConfig;
use crate::bounds::{Bounds, Point};
use crate::error::SearchError;
use crate::objective::Objective;
use crate::outcome::{SearchOutcome, Termination};
use crate::random::{rng_for, RandomSource};
use tracing::{debug, instrument, trace};

/// Executes Hill Climbing.
pub struct HcRunner;

impl HcRunner {
    /// Runs Hill Climbing with a generator seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &HcConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs Hill Climbing drawing the initial point from `rng`.
    ///
    /// The neighborhood itself is deterministic, so `rng` is consulted only
    /// for the `bounds.dim()` draws of the starting point.
    #[instrument(level = "debug", skip_all, fields(dim = bounds.dim(), step = config.step_size))]
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &HcConfig,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        config.validate()?;

        let mut current = bounds.sample(rng);
        let mut current_value = objective.evaluate(&current);
        let mut evaluations = 1usize;
        let mut iterations = 0usize;
        let mut value_history = vec![current_value];
        let mut termination = Termination::BudgetExhausted;

        for _ in 0..config.max_iterations {
            iterations += 1;

            // First strictly lowest neighbor wins.
            let mut next: Option<Point> = None;
            let mut next_value = f64::INFINITY;
            for neighbor in axis_neighbors(&current, config.step_size, bounds) {
                let value = objective.evaluate(&neighbor);
                evaluations += 1;
                if value < next_value {
                    next = Some(neighbor);
                    next_value = value;
                }
            }

            let improvement = current_value - next_value;
            let next = match next {
                Some(next) if improvement > 0.0 && improvement >= config.epsilon => next,
                _ => {
                    termination = Termination::Converged;
                    break;
                }
            };

            trace!(iteration = iterations, value = next_value, "moved to neighbor");
            current = next;
            current_value = next_value;
            value_history.push(current_value);
        }

        debug!(
            ?termination,
            iterations,
            value = current_value,
            "hill climbing finished"
        );

        Ok(SearchOutcome {
            point: current,
            value: current_value,
            iterations,
            evaluations,
            accepted_moves: value_history.len() - 1,
            termination,
            value_history,
        })
    }
}

/// The `2 * dim` neighbors at `+step` then `-step` along each axis in
/// dimension order, clamped into `bounds`.
fn axis_neighbors<'a>(
    current: &'a [f64],
    step: f64,
    bounds: &'a Bounds,
) -> impl Iterator<Item = Point> + 'a {
    (0..current.len()).flat_map(move |axis| {
        [step, -step].into_iter().map(move |offset| {
            let mut shifted = current.to_vec();
            shifted[axis] += offset;
            bounds.clamp(&shifted)
        })
    })
}
