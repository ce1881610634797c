//! Axis-aligned box bounds and the shared clamp helper.

use crate::error::SearchError;
use crate::random::RandomSource;

/// A point in the search space.
pub type Point = Vec<f64>;

/// Axis-aligned box: one `(lower, upper)` pair per dimension.
///
/// Construction guarantees at least one dimension, finite limits and
/// `lower <= upper` in every dimension. Zero-width intervals are allowed.
///
/// # Examples
///
/// ```
/// use u_localsearch::bounds::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
/// assert_eq!(bounds.clamp(&[7.0, -0.5]), vec![5.0, -0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    limits: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps per-dimension limits.
    pub fn new(limits: Vec<(f64, f64)>) -> Result<Self, SearchError> {
        if limits.is_empty() {
            return Err(SearchError::EmptyBounds);
        }
        for (dimension, &(lower, upper)) in limits.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(SearchError::NonFiniteBounds { dimension });
            }
            if lower > upper {
                return Err(SearchError::InvertedBounds {
                    dimension,
                    lower,
                    upper,
                });
            }
        }
        Ok(Self { limits })
    }

    /// The same `(lower, upper)` interval repeated over `dim` dimensions.
    pub fn uniform(dim: usize, lower: f64, upper: f64) -> Result<Self, SearchError> {
        Self::new(vec![(lower, upper); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.limits.len()
    }

    /// Per-dimension `(lower, upper)` pairs.
    pub fn limits(&self) -> &[(f64, f64)] {
        &self.limits
    }

    /// Projects `point` onto the box.
    ///
    /// A NaN coordinate lands on the lower bound. `point` must have
    /// [`dim`](Self::dim) coordinates; use [`clamp_to_bounds`] for a checked
    /// variant.
    pub fn clamp(&self, point: &[f64]) -> Point {
        debug_assert_eq!(point.len(), self.dim(), "point/bounds dimension mismatch");
        point
            .iter()
            .zip(&self.limits)
            .map(|(&x, &(lower, upper))| x.max(lower).min(upper))
            .collect()
    }

    /// Whether every coordinate of `point` lies inside the box, inclusive.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(&self.limits)
                .all(|(&x, &(lower, upper))| lower <= x && x <= upper)
    }

    /// Draws a point uniformly from the box, one draw per dimension in order.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Point {
        let point: Point = self
            .limits
            .iter()
            .map(|&(lower, upper)| rng.uniform(lower, upper))
            .collect();
        // Scripted sources may hand back fractions outside [0, 1].
        self.clamp(&point)
    }

    /// Adds an independent `uniform(-radius, radius)` offset to every
    /// coordinate and clamps the result back into the box.
    pub(crate) fn perturb<R: RandomSource + ?Sized>(
        &self,
        point: &[f64],
        radius: f64,
        rng: &mut R,
    ) -> Point {
        let moved: Point = point
            .iter()
            .map(|&x| x + rng.uniform(-radius, radius))
            .collect();
        self.clamp(&moved)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = SearchError;

    fn try_from(limits: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(limits)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.limits
    }
}

/// Checked form of [`Bounds::clamp`].
pub fn clamp_to_bounds(point: &[f64], bounds: &Bounds) -> Result<Point, SearchError> {
    if point.len() != bounds.dim() {
        return Err(SearchError::DimensionMismatch {
            expected: bounds.dim(),
            found: point.len(),
        });
    }
    Ok(bounds.clamp(point))
}
