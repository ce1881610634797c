//! Hill Climbing configuration.

use crate::error::SearchError;

/// Configuration for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_iterations(500)
///     .with_step_size(0.05)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Improvements smaller than this end the search.
    pub epsilon: f64,

    /// Distance of each axis-aligned neighbor from the current point.
    pub step_size: f64,

    /// Random seed for the initial point (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl HcConfig {
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
        Ok(())
    }
}
