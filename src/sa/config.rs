//! SA configuration.

use crate::error::SearchError;

/// Configuration for Simulated Annealing with geometric cooling.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.98)
///     .with_max_iterations(5000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of iterations (one neighbor per iteration).
    pub max_iterations: usize,

    /// Starting temperature. Values at or below `epsilon` skip the loop
    /// entirely and return the initial point.
    pub initial_temperature: f64,

    /// Geometric cooling factor: `T_{k+1} = cooling_rate * T_k`.
    ///
    /// Must lie in (0, 1). Typical values: 0.95–0.99.
    pub cooling_rate: f64,

    /// The search stops once the temperature falls to or below this.
    pub epsilon: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A non-positive initial temperature is valid: the run returns its
    /// random starting point untouched.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.initial_temperature.is_nan() {
            return Err(SearchError::InvalidConfig(
                "initial_temperature must not be NaN".into(),
            ));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 || self.cooling_rate.is_nan() {
            return Err(SearchError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
