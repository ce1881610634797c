//! SA execution loop.

use super::config::SaConfig;
use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::outcome::{SearchOutcome, Termination};
use crate::random::{rng_for, RandomSource};
use tracing::{debug, instrument, trace};

/// Half-width of the neighbor box. Independent of the temperature.
const NEIGHBOR_RADIUS: f64 = 1.0;

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a generator seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs SA drawing from `rng`.
    ///
    /// Draw order per iteration: one `uniform` per coordinate for the
    /// neighbor, then one `uniform01` only for non-improving neighbors.
    #[instrument(
        level = "debug",
        skip_all,
        fields(dim = bounds.dim(), t0 = config.initial_temperature)
    )]
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
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
        let mut value_history = vec![current_value];

        let mut temperature = config.initial_temperature;
        let mut remaining = config.max_iterations;
        let mut iterations = 0usize;

        while temperature > config.epsilon && remaining > 0 {
            let candidate = bounds.perturb(&current, NEIGHBOR_RADIUS, rng);
            let candidate_value = objective.evaluate(&candidate);
            evaluations += 1;
            let delta = candidate_value - current_value;

            // Metropolis acceptance criterion
            let accept = delta < 0.0 || rng.uniform01() < (-delta / temperature).exp();

            if accept {
                trace!(
                    iteration = iterations,
                    delta,
                    temperature,
                    "accepted neighbor"
                );
                current = candidate;
                current_value = candidate_value;
                value_history.push(current_value);
            }

            temperature *= config.cooling_rate;
            remaining -= 1;
            iterations += 1;
        }

        let termination = if temperature > config.epsilon {
            Termination::BudgetExhausted
        } else {
            Termination::Frozen { temperature }
        };

        debug!(
            ?termination,
            iterations,
            value = current_value,
            "simulated annealing finished"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Sphere;
    use crate::random::{create_rng, ScriptedSource};
    use proptest::prelude::*;
    use std::cell::Cell;

    fn square_box() -> Bounds {
        Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
    }

    #[test]
    fn test_sa_sphere_near_zero() {
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&Sphere, &square_box(), &config).unwrap();

        assert!(
            result.value < 1.0,
            "expected near-zero value, got {}",
            result.value
        );
        assert!(matches!(result.termination, Termination::Frozen { .. }));
    }

    #[test]
    fn test_sa_zero_temperature_returns_start() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        let mut source = ScriptedSource::new(vec![0.3, 0.8]);

        let result = SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut source).unwrap();

        assert!((result.point[0] + 2.0).abs() < 1e-12);
        assert!((result.point[1] - 3.0).abs() < 1e-12);
        assert!((result.value - 13.0).abs() < 1e-9);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.evaluations, 1);
        assert_eq!(source.uniform_calls(), 2);
        assert_eq!(
            result.termination,
            Termination::Frozen { temperature: 0.0 }
        );
    }

    #[test]
    fn test_sa_negative_temperature_returns_start() {
        let config = SaConfig::default().with_initial_temperature(-5.0);
        let mut source = ScriptedSource::new(vec![0.5, 0.5]);

        let result = SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.point, vec![0.0, 0.0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_sa_stops_when_frozen() {
        let config = SaConfig::default().with_seed(8);
        let result = SaRunner::run(&Sphere, &square_box(), &config).unwrap();

        let mut temperature = config.initial_temperature;
        let mut expected = 0;
        while temperature > config.epsilon && expected < config.max_iterations {
            temperature *= config.cooling_rate;
            expected += 1;
        }

        assert_eq!(result.iterations, expected);
        assert!(expected < config.max_iterations);
        assert_eq!(result.termination, Termination::Frozen { temperature });
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let config = SaConfig::default()
            .with_initial_temperature(1e10)
            .with_cooling_rate(0.999)
            .with_max_iterations(100)
            .with_seed(42);

        let result = SaRunner::run(&Sphere, &square_box(), &config).unwrap();

        assert_eq!(result.iterations, 100);
        assert_eq!(result.evaluations, 101);
        assert_eq!(result.termination, Termination::BudgetExhausted);
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill_when_hot() {
        // Origin start, neighbor at (1, 1): delta = 2.
        let config = SaConfig::default().with_max_iterations(1);
        let mut source = ScriptedSource::new(vec![0.5, 0.5, 1.0]).with_draws(vec![0.5]);

        let result = SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.accepted_moves, 1);
        assert!((result.value - 2.0).abs() < 1e-12);
        assert_eq!(source.uniform01_calls(), 1);
    }

    #[test]
    fn test_sa_metropolis_rejects_uphill_when_cold() {
        let config = SaConfig::default()
            .with_initial_temperature(1e-3)
            .with_epsilon(1e-9)
            .with_max_iterations(1);
        let mut source = ScriptedSource::new(vec![0.5, 0.5, 1.0]).with_draws(vec![0.5]);

        let result = SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.point, vec![0.0, 0.0]);
    }

    #[test]
    fn test_sa_improvement_skips_acceptance_draw() {
        // Start at (2.5, 2.5), neighbor at (1.5, 1.5).
        let config = SaConfig::default().with_max_iterations(1);
        let mut source = ScriptedSource::new(vec![0.75, 0.75, 0.0]);

        let result = SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut source).unwrap();

        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.point, vec![1.5, 1.5]);
        assert_eq!(source.uniform01_calls(), 0);
    }

    #[test]
    fn test_sa_degenerate_bounds() {
        let bounds = Bounds::new(vec![(2.0, 2.0), (3.0, 3.0)]).unwrap();
        let config = SaConfig::default().with_seed(21);
        let result = SaRunner::run(&Sphere, &bounds, &config).unwrap();

        assert_eq!(result.point, vec![2.0, 3.0]);
        assert_eq!(result.value, 13.0);
    }

    #[test]
    fn test_sa_deterministic_with_seed() {
        let config = SaConfig::default().with_seed(2024);
        let a = SaRunner::run(&Sphere, &square_box(), &config).unwrap();
        let b = SaRunner::run(&Sphere, &square_box(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        let mut rng = create_rng(1);
        assert!(SaRunner::run_with_rng(&Sphere, &square_box(), &config, &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn prop_sa_points_stay_in_bounds(seed in any::<u64>(), t0 in 0.0f64..1e4) {
            let bounds = Bounds::new(vec![(-0.25, 0.25), (3.0, 3.5)]).unwrap();
            let config = SaConfig::default()
                .with_initial_temperature(t0)
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
            let result = SaRunner::run(&watched, &bounds, &config).unwrap();
            prop_assert!(!escaped.get());
            prop_assert_eq!(evaluations.get(), result.evaluations);
            prop_assert!(bounds.contains(&result.point));
            prop_assert!(result.iterations <= 300);
        }
    }
}
