//! Random Local Search execution loop.

use super::config::RlsConfig;
use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::outcome::{SearchOutcome, Termination};
use crate::random::{rng_for, RandomSource};
use tracing::{debug, instrument, trace};

/// Executes Random Local Search.
pub struct RlsRunner;

impl RlsRunner {
    /// Runs Random Local Search with a generator seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &RlsConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs Random Local Search drawing from `rng`.
    ///
    /// Draw order per iteration: one `uniform` per coordinate for the
    /// neighbor, then one `uniform01` only when the neighbor is not strictly
    /// better.
    #[instrument(
        level = "debug",
        skip_all,
        fields(dim = bounds.dim(), p = config.acceptance_probability)
    )]
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &RlsConfig,
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
        let mut accepted_moves = 0usize;
        let mut value_history = vec![current_value];
        let mut termination = Termination::BudgetExhausted;

        for _ in 0..config.max_iterations {
            iterations += 1;

            let candidate = bounds.perturb(&current, config.step_size, rng);
            let candidate_value = objective.evaluate(&candidate);
            evaluations += 1;

            // Checked before acceptance, so a rejected candidate can end the run.
            if (candidate_value - current_value).abs() < config.epsilon {
                termination = Termination::Stagnated;
                break;
            }

            let accept = candidate_value < current_value
                || rng.uniform01() < config.acceptance_probability;

            if accept {
                trace!(
                    iteration = iterations,
                    value = candidate_value,
                    uphill = candidate_value >= current_value,
                    "accepted neighbor"
                );
                current = candidate;
                current_value = candidate_value;
                accepted_moves += 1;
                value_history.push(current_value);
            }
        }

        debug!(
            ?termination,
            iterations,
            accepted_moves,
            value = current_value,
            "random local search finished"
        );

        Ok(SearchOutcome {
            point: current,
            value: current_value,
            iterations,
            evaluations,
            accepted_moves,
            termination,
            value_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Sphere;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn square_box() -> Bounds {
        Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
    }

    fn coordinate_sum(x: &[f64]) -> f64 {
        x.iter().sum()
    }

    /// Starts at (-2.5, -2.5), then every neighbor steps `+step` on both axes.
    fn uphill_script() -> ScriptedSource {
        ScriptedSource::new(vec![0.25, 0.25, 1.0])
    }

    #[test]
    fn test_rls_sphere_near_zero() {
        let config = RlsConfig::default().with_seed(42);
        let result = RlsRunner::run(&Sphere, &square_box(), &config).unwrap();

        assert!(
            result.value < 1.0,
            "expected near-zero value, got {}",
            result.value
        );
        assert!(square_box().contains(&result.point));
    }

    #[test]
    fn test_rls_always_accepts_worse_with_probability_one() {
        let config = RlsConfig::default()
            .with_acceptance_probability(1.0)
            .with_max_iterations(10);
        let mut source = uphill_script().with_draws(vec![0.99]);

        let result =
            RlsRunner::run_with_rng(&coordinate_sum, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.accepted_moves, 10);
        assert_eq!(result.value_history.len(), 11);
        for window in result.value_history.windows(2) {
            assert!(window[1] > window[0], "every accepted move is uphill");
        }
        assert!((result.point[0] + 1.5).abs() < 1e-9);
        assert!((result.point[1] + 1.5).abs() < 1e-9);
        assert_eq!(source.uniform01_calls(), 10);
        assert_eq!(result.termination, Termination::BudgetExhausted);
    }

    #[test]
    fn test_rls_never_accepts_worse_with_probability_zero() {
        let config = RlsConfig::default()
            .with_acceptance_probability(0.0)
            .with_max_iterations(10);
        let mut source = uphill_script();

        let result =
            RlsRunner::run_with_rng(&coordinate_sum, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.point, vec![-2.5, -2.5]);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.iterations, 10);
        assert_eq!(result.evaluations, 11);
    }

    #[test]
    fn test_rls_improving_move_skips_acceptance_draw() {
        // Fraction 0.0 steps -step on both axes: strictly better.
        let config = RlsConfig::default().with_max_iterations(3);
        let mut source = ScriptedSource::new(vec![0.75, 0.75, 0.0]);

        let result =
            RlsRunner::run_with_rng(&coordinate_sum, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.accepted_moves, 3);
        assert_eq!(source.uniform01_calls(), 0);
    }

    #[test]
    fn test_rls_stagnation_checked_before_acceptance() {
        let config = RlsConfig::default()
            .with_step_size(1e-9)
            .with_acceptance_probability(1.0);
        let mut source = uphill_script().with_draws(vec![0.0]);

        let result =
            RlsRunner::run_with_rng(&coordinate_sum, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.termination, Termination::Stagnated);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.point, vec![-2.5, -2.5]);
        assert_eq!(source.uniform01_calls(), 0);
    }

    #[test]
    fn test_rls_degenerate_bounds() {
        let bounds = Bounds::new(vec![(2.0, 2.0), (3.0, 3.0)]).unwrap();
        let config = RlsConfig::default().with_seed(3);
        let result = RlsRunner::run(&Sphere, &bounds, &config).unwrap();

        assert_eq!(result.point, vec![2.0, 3.0]);
        assert_eq!(result.termination, Termination::Stagnated);
    }

    #[test]
    fn test_rls_deterministic_with_seed() {
        let config = RlsConfig::default().with_seed(77);
        let a = RlsRunner::run(&Sphere, &square_box(), &config).unwrap();
        let b = RlsRunner::run(&Sphere, &square_box(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rls_rejects_invalid_config() {
        let config = RlsConfig::default().with_acceptance_probability(-0.1);
        assert!(RlsRunner::run(&Sphere, &square_box(), &config).is_err());
    }

    proptest! {
        #[test]
        fn prop_rls_points_stay_in_bounds(seed in any::<u64>(), step in 0.0f64..3.0) {
            let bounds = Bounds::new(vec![(-0.5, 0.5), (1.0, 4.0), (-2.0, -1.0)]).unwrap();
            let config = RlsConfig::default()
                .with_step_size(step)
                .with_max_iterations(300)
                .with_seed(seed);
            // Every evaluated point, rejected neighbors included.
            let escaped = Cell::new(false);
            let evaluations = Cell::new(0usize);
            let watched = |x: &[f64]| {
                evaluations.set(evaluations.get() + 1);
                if !bounds.contains(x) {
                    escaped.set(true);
                }
                x.iter().map(|v| v * v).sum::<f64>()
            };
            let result = RlsRunner::run(&watched, &bounds, &config).unwrap();
            prop_assert!(!escaped.get());
            prop_assert_eq!(evaluations.get(), result.evaluations);
            prop_assert!(bounds.contains(&result.point));
            prop_assert!(result.iterations <= 300);
        }
    }
}
