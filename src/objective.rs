//! Objective function contract.

/// A scalar function to minimize.
///
/// Implementations must be deterministic and free of side effects; the
/// searches evaluate the same point more than once and assume the same
/// answer. Any `Fn(&[f64]) -> f64` closure is an objective.
///
/// # Examples
///
/// ```
/// use u_localsearch::objective::Objective;
///
/// let shifted = |x: &[f64]| (x[0] - 1.0).powi(2);
/// assert_eq!(shifted.evaluate(&[3.0]), 4.0);
/// ```
pub trait Objective {
    /// Evaluates the objective at `point`. Lower is better.
    fn evaluate(&self, point: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, point: &[f64]) -> f64 {
        self(point)
    }
}

/// Sphere function `f(x) = sum(x_i^2)`, minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Objective for Sphere {
    fn evaluate(&self, point: &[f64]) -> f64 {
        point.iter().map(|x| x * x).sum()
    }
}
