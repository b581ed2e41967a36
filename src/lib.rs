//! # cepstat
//!
//! Circular/Spherical Error Probable (CEP) estimation for 3D point
//! samples.
//!
//! Given a set of coordinate measurements (weapons impact points,
//! sensor scatter, positioning error), the CEP is the radius of the
//! sphere centered on the mean impact point that contains 50% of the
//! points. This crate provides the estimator as a pure function of an
//! in-memory sample set, with two interchangeable strategies and a
//! strict CSV loading contract.
//!
//! ## Modules
//!
//! - [`cep`] — the two estimators: empirical median-radius and
//!   parametric spherical-standard-deviation
//! - [`point`] — validated finite 3D points and the centroid
//! - [`loader`] — fail-fast CSV loading/writing of sample sets
//! - [`stats`] — scalar statistics kernel (compensated mean, median,
//!   Welford variance)
//! - [`error`] — the four-kind failure taxonomy
//!
//! ## Design Philosophy
//!
//! - **Numerical stability first**: Welford's algorithm for variance,
//!   Kahan summation for accumulation
//! - **All-or-nothing validation**: malformed input fails the whole
//!   load as a typed error; no silent coercion, no dropped rows
//! - **Pure estimation**: no state between calls, no implicit paths,
//!   no I/O inside the estimation step
//! - **Property-based testing**: mathematical invariants verified via
//!   proptest
//!
//! ## Example
//!
//! ```
//! use cepstat::{empirical_cep, parametric_cep, loader};
//!
//! let csv = "x,y,z\n10.5,-5.2,1.0\n12.1,-4.8,0.9\n9.9,-6.1,1.2\n";
//! let points = loader::read_points(csv.as_bytes())?;
//! let cep = empirical_cep(&points)?;
//! assert!(cep > 0.0);
//! let smoothed = parametric_cep(&points)?;
//! assert!(smoothed > 0.0);
//! # Ok::<(), cepstat::CepError>(())
//! ```

pub mod cep;
pub mod error;
pub mod loader;
pub mod point;
pub mod stats;

pub use cep::{empirical_cep, parametric_cep, CepMethod, CHI3_MEDIAN};
pub use error::{CepError, Result};
pub use point::{centroid, Point3};
