//! Error type shared by bounds construction, config validation and the runners.

use thiserror::Error;

/// Errors reported before a search starts.
///
/// Once inputs are validated every search is total, so these only surface
/// from [`Bounds::new`](crate::bounds::Bounds::new), the `validate()` methods
/// of the configs, and the checked clamp helper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Bounds must have at least one dimension")]
    EmptyBounds,

    #[error("Inverted bounds in dimension {dimension}: lower {lower} > upper {upper}")]
    InvertedBounds {
        dimension: usize,
        lower: f64,
        upper: f64,
    },

    #[error("Non-finite bound in dimension {dimension}")]
    NonFiniteBounds { dimension: usize },

    #[error("Dimension mismatch: bounds have {expected} dimensions, point has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
