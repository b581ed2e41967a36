//! Error taxonomy and shared validation checks.
//!
//! Every failure the crate can produce is one of four distinct,
//! matchable kinds, so callers can branch on cause rather than parse
//! messages:
//!
//! | Variant | Produced by | Meaning |
//! |---|---|---|
//! | [`CepError::ResourceNotFound`] | loader | data source absent or unreadable |
//! | [`CepError::SchemaInvalid`] | loader | required `x`/`y`/`z` columns missing |
//! | [`CepError::ValueInvalid`] | loader, [`Point3::new`] | a field is not a finite real |
//! | [`CepError::InsufficientData`] | estimators | fewer points than the method requires |
//!
//! All four are detected during loading/validation, before any numeric
//! computation proceeds: no estimator ever observes partially-invalid
//! data.
//!
//! [`Point3::new`]: crate::point::Point3::new

use thiserror::Error;

/// Failure kinds for loading and estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CepError {
    /// The input data source does not exist or cannot be read.
    #[error("data source not found or unreadable: {0}")]
    ResourceNotFound(String),

    /// The tabular header lacks one or more of the required `x`, `y`,
    /// `z` columns (case-sensitive match).
    #[error("missing required column(s) {missing:?}; header must contain \"x\", \"y\", \"z\"")]
    SchemaInvalid {
        /// The required column names absent from the header.
        missing: Vec<String>,
    },

    /// A coordinate value could not be parsed as a finite real number.
    #[error("invalid value: {0}")]
    ValueInvalid(String),

    /// Fewer points were supplied than the chosen estimator requires.
    #[error("insufficient data: need at least {required} point(s), got {actual}")]
    InsufficientData {
        /// Minimum sample size for the chosen method.
        required: usize,
        /// Number of points actually supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CepError>;

/// Checks the minimum sample size constraint shared by the estimators.
///
/// # Returns
/// - `Err(CepError::InsufficientData)` if `actual < required`.
pub(crate) fn ensure_sample_size(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        Err(CepError::InsufficientData { required, actual })
    } else {
        Ok(())
    }
}
