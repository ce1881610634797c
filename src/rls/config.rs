//! Random Local Search configuration.

use crate::error::SearchError;

/// Configuration for Random Local Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::rls::RlsConfig;
///
/// let config = RlsConfig::default()
///     .with_acceptance_probability(0.05)
///     .with_step_size(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlsConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// A sampled neighbor whose value differs from the current one by
    /// less than this ends the search.
    pub epsilon: f64,

    /// Half-width of the per-coordinate perturbation interval.
    pub step_size: f64,

    /// Probability of accepting a neighbor that is not strictly better.
    pub acceptance_probability: f64,

    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for RlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            acceptance_probability: 0.2,
            seed: None,
        }
    }
}

impl RlsConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        if !(self.step_size.is_finite() && self.step_size >= 0.0) {
            return Err(SearchError::InvalidConfig(format!(
                "step_size must be finite and non-negative, got {}",
                self.step_size
            )));
        }
        if !(0.0..=1.0).contains(&self.acceptance_probability) {
            return Err(SearchError::InvalidConfig(format!(
                "acceptance_probability must be in [0, 1], got {}",
                self.acceptance_probability
            )));
        }
        Ok(())
    }
}
