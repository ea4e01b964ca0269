//! density::errors — parameter-domain errors for densities and draws.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the gamma and
//! inverse-gamma log-densities and variate generators. Parameter-domain
//! violations (non-positive shape, rate, or scale) are structured errors;
//! out-of-support evaluation points are not errors and yield `−∞` on the
//! log scale instead.
//!
//! Conventions
//! -----------
//! - Variants carry the offending value so diagnostics do not need call-site
//!   context.
//! - Behind `python-bindings`, all variants map to `PyValueError` with the
//!   Rust `Display` message preserved verbatim.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type DensityResult<T> = Result<T, DensityError>;

/// DensityError — invalid gamma-family parameters.
///
/// Variants
/// --------
/// - `InvalidShape(a)`
///   The shape parameter is ≤ 0, NaN, or ±∞.
/// - `InvalidRate(b)`
///   The rate parameter of a gamma density/draw is ≤ 0, NaN, or ±∞.
/// - `InvalidScale(b)`
///   The scale parameter of an inverse-gamma density/draw is ≤ 0, NaN,
///   or ±∞.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityError {
    InvalidShape(f64),
    InvalidRate(f64),
    InvalidScale(f64),
}

impl std::error::Error for DensityError {}

impl std::fmt::Display for DensityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityError::InvalidShape(a) => {
                write!(f, "Invalid shape value: {a}. Must be strictly positive and finite.")
            }
            DensityError::InvalidRate(b) => {
                write!(f, "Invalid rate value: {b}. Must be strictly positive and finite.")
            }
            DensityError::InvalidScale(b) => {
                write!(f, "Invalid scale value: {b}. Must be strictly positive and finite.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DensityError> for PyErr {
    fn from(err: DensityError) -> PyErr {
        PyValueError::new_err(format!("DensityError: {err}"))
    }
}
