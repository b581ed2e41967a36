//! Circular/Spherical Error Probable estimators.
//!
//! The CEP of a sample is the radius of the sphere, centered on the
//! mean impact point, containing 50% of the observed points. Two
//! interchangeable strategies are provided over the same validated
//! sample set:
//!
//! - [`empirical_cep`] — non-parametric: the median of the radial
//!   distances from the centroid. Realizes the 50%-containment
//!   definition directly and exactly for the given sample, at the cost
//!   of sampling noise on small n.
//! - [`parametric_cep`] — model-based: the spherical standard
//!   deviation scaled by the chi(3) median quantile, assuming
//!   isotropic, approximately trivariate-normal dispersion. Smoother
//!   and more stable at small n, at the cost of fitting the model
//!   rather than the raw sample.
//!
//! Both are pure functions of the sample: the centroid is recomputed
//! per call and no state is shared between calls, so independent calls
//! may run concurrently without locking.

use crate::error::{ensure_sample_size, Result};
use crate::point::{centroid, Point3};
use crate::stats::{median, WelfordAccumulator};

/// 50th-percentile quantile of the chi distribution with 3 degrees of
/// freedom: converts the spherical standard deviation σ_s into a
/// 50%-containment radius under trivariate-normal dispersion.
///
/// Pinned numerical contract, paired with the **population** (n)
/// variance divisor used by [`parametric_cep`]. Changing the divisor
/// would invalidate this constant.
pub const CHI3_MEDIAN: f64 = 1.5382;

/// Computes the radial distance of every point to the sample centroid.
///
/// # Returns
/// - `None` if `points` is empty.
pub fn radial_distances(points: &[Point3]) -> Option<Vec<f64>> {
    let c = centroid(points)?;
    Some(points.iter().map(|p| p.distance_to(&c)).collect())
}

/// Empirical (distribution-free) CEP: median radial distance from the
/// centroid.
///
/// # Algorithm
/// 1. Compute the centroid (per-axis mean).
/// 2. Compute the Euclidean distance of every point to the centroid.
/// 3. Return the median of those distances; even counts average the
///    two central order statistics.
///
/// # Complexity
/// Time: O(n log n) (median sort), Space: O(n)
///
/// # Returns
/// - `Err(CepError::InsufficientData)` for an empty sample.
/// - `Ok(0.0)` for a single point: its distance to itself is zero.
///   This degenerate case is defined but statistically meaningless;
///   callers wanting a well-defined statistic should require n ≥ 2
///   upstream.
///
/// # Examples
/// ```
/// use cepstat::{empirical_cep, Point3};
/// let pts = [
///     Point3::new(0.0, 0.0, 0.0).unwrap(),
///     Point3::new(2.0, 0.0, 0.0).unwrap(),
///     Point3::new(4.0, 0.0, 0.0).unwrap(),
/// ];
/// // Centroid (2,0,0); distances [2, 0, 2]; median 2.
/// assert_eq!(empirical_cep(&pts).unwrap(), 2.0);
/// ```
pub fn empirical_cep(points: &[Point3]) -> Result<f64> {
    ensure_sample_size(points.len(), 1)?;
    let distances = radial_distances(points).expect("non-empty checked above");
    Ok(median(&distances).expect("distances of finite points are finite"))
}

/// Parametric CEP: spherical standard deviation scaled by the chi(3)
/// median quantile.
///
/// # Algorithm
/// 1. Compute per-axis centroid and per-axis **population** variance
///    (divisor n, one Welford accumulator per axis, single pass).
/// 2. σ_s = √(var_x + var_y + var_z).
/// 3. CEP = [`CHI3_MEDIAN`] × σ_s.
///
/// The population divisor is a pinned contract: it matches the direct
/// second-moment estimate the constant was derived for, not the
/// unbiased (n − 1) sample estimator.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Err(CepError::InsufficientData)` if `points.len() < 2`: a
///   dispersion model cannot be fit to fewer than two points. This is
///   deliberately stricter than [`empirical_cep`], which degrades
///   gracefully at n = 1.
///
/// # Examples
/// ```
/// use cepstat::{parametric_cep, CepError, Point3};
/// let one = [Point3::new(1.0, 2.0, 3.0).unwrap()];
/// assert!(matches!(
///     parametric_cep(&one),
///     Err(CepError::InsufficientData { required: 2, actual: 1 })
/// ));
/// ```
pub fn parametric_cep(points: &[Point3]) -> Result<f64> {
    ensure_sample_size(points.len(), 2)?;
    let mut acc_x = WelfordAccumulator::new();
    let mut acc_y = WelfordAccumulator::new();
    let mut acc_z = WelfordAccumulator::new();
    for p in points {
        acc_x.update(p.x());
        acc_y.update(p.y());
        acc_z.update(p.z());
    }
    let var_sum = acc_x.population_variance().expect("n >= 2")
        + acc_y.population_variance().expect("n >= 2")
        + acc_z.population_variance().expect("n >= 2");
    Ok(CHI3_MEDIAN * var_sum.sqrt())
}

/// Strategy selector for the two estimators.
///
/// The strategies share the sample-set contract and are freely
/// interchangeable; they differ in minimum sample size and in how they
/// trade exactness against stability (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CepMethod {
    /// Median radial distance ([`empirical_cep`]); requires n ≥ 1.
    Empirical,
    /// Scaled spherical standard deviation ([`parametric_cep`]);
    /// requires n ≥ 2.
    Parametric,
}

impl CepMethod {
    /// Runs the selected estimator over the sample set.
    ///
    /// # Examples
    /// ```
    /// use cepstat::{CepMethod, Point3};
    /// let pts = [
    ///     Point3::new(0.0, 0.0, 0.0).unwrap(),
    ///     Point3::new(1.0, 0.0, 0.0).unwrap(),
    /// ];
    /// let emp = CepMethod::Empirical.estimate(&pts).unwrap();
    /// let par = CepMethod::Parametric.estimate(&pts).unwrap();
    /// assert!(emp > 0.0 && par > 0.0);
    /// ```
    pub fn estimate(self, points: &[Point3]) -> Result<f64> {
        match self {
            CepMethod::Empirical => empirical_cep(points),
            CepMethod::Parametric => parametric_cep(points),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CepError;
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z).unwrap()
    }

    /// The 5-shot reference dataset with centroid (10.9, −5.48, 1.0).
    fn reference_sample() -> Vec<Point3> {
        vec![
            pt(10.5, -5.2, 1.0),
            pt(12.1, -4.8, 0.9),
            pt(9.9, -6.1, 1.2),
            pt(11.8, -5.5, 0.8),
            pt(10.2, -5.8, 1.1),
        ]
    }

    // --- empirical ---

    #[test]
    fn test_empirical_reference_dataset() {
        // Recomputed by hand: the median of the five radial distances
        // is that of (11.8, -5.5, 0.8) from the centroid:
        //   sqrt(0.9² + 0.02² + 0.2²) = sqrt(0.8504)
        let expected = 0.8504_f64.sqrt();
        let cep = empirical_cep(&reference_sample()).unwrap();
        assert_relative_eq!(cep, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_empirical_identical_points_zero() {
        let pts = vec![pt(3.0, -1.0, 2.0); 7];
        assert_eq!(empirical_cep(&pts).unwrap(), 0.0);
    }

    #[test]
    fn test_empirical_single_point_zero() {
        assert_eq!(empirical_cep(&[pt(5.0, 5.0, 5.0)]).unwrap(), 0.0);
    }

    #[test]
    fn test_empirical_empty_insufficient() {
        assert_eq!(
            empirical_cep(&[]),
            Err(CepError::InsufficientData {
                required: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_empirical_even_count_tie_break() {
        // Four points on a line: centroid (1.5,0,0), distances
        // [1.5, 0.5, 0.5, 1.5]; median = (0.5 + 1.5) / 2 = 1.0.
        let pts = [
            pt(0.0, 0.0, 0.0),
            pt(1.0, 0.0, 0.0),
            pt(2.0, 0.0, 0.0),
            pt(3.0, 0.0, 0.0),
        ];
        assert_eq!(empirical_cep(&pts).unwrap(), 1.0);
    }

    #[test]
    fn test_empirical_translation_invariance() {
        let base = reference_sample();
        let shifted: Vec<Point3> = base
            .iter()
            .map(|p| pt(p.x() + 1000.0, p.y() - 250.0, p.z() + 3.5))
            .collect();
        let a = empirical_cep(&base).unwrap();
        let b = empirical_cep(&shifted).unwrap();
        assert_relative_eq!(a, b, max_relative = 1e-9);
    }

    // --- parametric ---

    #[test]
    fn test_parametric_reference_dataset() {
        // Hand-computed population variances about (10.9, -5.48, 1.0):
        //   var_x = 0.78, var_y = 0.2056, var_z = 0.02
        // CEP = 1.5382 * sqrt(1.0056)
        let expected = 1.5382 * 1.0056_f64.sqrt();
        let cep = parametric_cep(&reference_sample()).unwrap();
        assert_relative_eq!(cep, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_parametric_rejects_n0_and_n1() {
        assert_eq!(
            parametric_cep(&[]),
            Err(CepError::InsufficientData {
                required: 2,
                actual: 0
            })
        );
        assert_eq!(
            parametric_cep(&[pt(1.0, 1.0, 1.0)]),
            Err(CepError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_parametric_identical_points_zero() {
        let pts = vec![pt(-4.0, 9.0, 0.5); 5];
        assert_eq!(parametric_cep(&pts).unwrap(), 0.0);
    }

    #[test]
    fn test_parametric_known_two_points() {
        // Points ±1 on x about centroid 0: population var_x = 1,
        // others 0, so CEP = 1.5382 exactly.
        let pts = [pt(-1.0, 0.0, 0.0), pt(1.0, 0.0, 0.0)];
        assert_relative_eq!(
            parametric_cep(&pts).unwrap(),
            CHI3_MEDIAN,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_chi3_constant_pinned() {
        // Numerical contract taken as given; do not "correct" it.
        assert_eq!(CHI3_MEDIAN, 1.5382);
    }

    // --- shared ---

    #[test]
    fn test_order_independence() {
        let mut pts = reference_sample();
        let emp = empirical_cep(&pts).unwrap();
        let par = parametric_cep(&pts).unwrap();
        pts.reverse();
        assert_relative_eq!(empirical_cep(&pts).unwrap(), emp, max_relative = 1e-12);
        assert_relative_eq!(parametric_cep(&pts).unwrap(), par, max_relative = 1e-12);
        pts.rotate_left(2);
        assert_relative_eq!(empirical_cep(&pts).unwrap(), emp, max_relative = 1e-12);
        assert_relative_eq!(parametric_cep(&pts).unwrap(), par, max_relative = 1e-12);
    }

    #[test]
    fn test_method_dispatch() {
        let pts = reference_sample();
        assert_eq!(
            CepMethod::Empirical.estimate(&pts).unwrap(),
            empirical_cep(&pts).unwrap()
        );
        assert_eq!(
            CepMethod::Parametric.estimate(&pts).unwrap(),
            parametric_cep(&pts).unwrap()
        );
    }

    #[test]
    fn test_radial_distances_reference() {
        let d = radial_distances(&reference_sample()).unwrap();
        assert_eq!(d.len(), 5);
        // First point: sqrt(0.4² + 0.28² + 0.0²) = sqrt(0.2384)
        assert_relative_eq!(d[0], 0.2384_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_radial_distances_empty() {
        assert_eq!(radial_distances(&[]), None);
    }
}
