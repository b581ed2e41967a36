//! Scalar statistics kernel with numerical stability guarantees.
//!
//! The estimators in [`crate::cep`] reduce point samples to scalar
//! sequences (radial distances, per-axis coordinates); this module
//! holds the primitives those reductions rely on. Edge cases are
//! handled explicitly and the algorithms avoid catastrophic
//! cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan/Neumaier compensated summation for O(ε) error
//!   independent of n.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Median**: sort-based, averaging the two central order
//!   statistics for even-length data (standard convention).

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// An improved Kahan variant that also handles addends larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use cepstat::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts, then returns the middle element, or the average
/// of the two central order statistics for even-length data. The
/// tie-break convention matters to the empirical CEP estimator, where
/// radial distances can repeat.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use cepstat::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Computes the population variance (denominator `n`) via Welford's
/// online algorithm.
///
/// The population divisor is a deliberate choice here: the parametric
/// CEP estimator pairs it with a chi-distribution constant derived for
/// the direct second-moment estimate (see [`crate::cep`]).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use cepstat::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.population_variance()
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Maintains a running mean and sum of squared deviations (M₂)
/// incrementally, avoiding the catastrophic cancellation inherent in
/// the naive formula `Var = E[X²] − (E[X])²`. The parametric CEP
/// estimator runs one accumulator per axis in a single pass over the
/// sample.
///
/// Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.
///
/// # Examples
/// ```
/// use cepstat::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    ///
    /// The first sample only initializes the mean, leaving M₂ at zero.
    /// This avoids intermediate overflow when `delta² > f64::MAX`.
    pub fn update(&mut self, value: f64) {
        if self.count == 0 {
            self.count = 1;
            self.mean_acc = value;
            return;
        }
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        let delta2 = value - self.mean_acc;
        self.m2 += delta * delta2;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been
    /// added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if
    /// no samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
