//! Validated 3D coordinate points and derived geometry.
//!
//! [`Point3`] is the unit of data for every estimator in this crate:
//! an immutable triple of finite `f64` components. The finiteness
//! invariant is enforced at construction, so downstream code never has
//! to re-check for NaN or infinity.
//!
//! Planar (2D) samples are represented with `z = 0.0`; the estimators
//! then degenerate to the circular (rather than spherical) case.

use crate::error::{CepError, Result};
use crate::stats::kahan_sum;

/// An immutable 3D point with finite components.
///
/// # Invariant
/// All three components are finite (`is_finite()`). Construction via
/// [`Point3::new`] is the only way to obtain a value, so the invariant
/// holds for every `Point3` in the program.
///
/// # Examples
/// ```
/// use cepstat::Point3;
/// let p = Point3::new(1.0, -2.5, 0.0).unwrap();
/// assert_eq!(p.x(), 1.0);
/// assert!(Point3::new(f64::NAN, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Creates a point, rejecting any non-finite component.
    ///
    /// # Returns
    /// - `Err(CepError::ValueInvalid)` if any component is NaN or
    ///   infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (name, v) in [("x", x), ("y", y), ("z", z)] {
            if !v.is_finite() {
                return Err(CepError::ValueInvalid(format!(
                    "component '{name}' is not finite: {v}"
                )));
            }
        }
        Ok(Self { x, y, z })
    }

    /// The x component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The z component.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean distance to another point.
    ///
    /// Always finite and non-negative: components are finite by
    /// invariant, and squared differences cannot overflow to infinity
    /// for coordinates of practical magnitude.
    ///
    /// # Examples
    /// ```
    /// use cepstat::Point3;
    /// let a = Point3::new(0.0, 0.0, 0.0).unwrap();
    /// let b = Point3::new(3.0, 4.0, 0.0).unwrap();
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Computes the component-wise arithmetic mean of a sample set.
///
/// Uses Kahan compensated summation per axis for O(ε) error
/// independent of `n`.
///
/// # Complexity
/// Time: O(n), Space: O(n) (per-axis scratch vectors)
///
/// # Returns
/// - `None` if `points` is empty.
///
/// # Examples
/// ```
/// use cepstat::{centroid, Point3};
/// let pts = [
///     Point3::new(0.0, 0.0, 0.0).unwrap(),
///     Point3::new(2.0, 4.0, 6.0).unwrap(),
/// ];
/// let c = centroid(&pts).unwrap();
/// assert_eq!((c.x(), c.y(), c.z()), (1.0, 2.0, 3.0));
/// ```
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    // Means of finite values are finite, so construction cannot fail.
    Some(Point3 {
        x: kahan_sum(&xs) / n,
        y: kahan_sum(&ys) / n,
        z: kahan_sum(&zs) / n,
    })
}
