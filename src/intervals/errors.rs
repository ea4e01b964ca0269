//! intervals::errors — error types for credible-interval construction.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for HPD-style interval builders:
//! length mismatches against the declared parameter count and invalid
//! posterior summaries (negative spreads, non-finite means, non-positive
//! quantile multipliers).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type HpdiResult<T> = Result<T, HpdiError>;

/// HpdiError — invalid inputs to interval construction.
///
/// Variants
/// --------
/// - `LengthMismatch { name, expected, got }`
///   The named vector does not have the declared length `J`.
/// - `InvalidMean { index, value }`
///   A posterior mean entry is NaN or ±∞.
/// - `InvalidSigma { index, value }`
///   A posterior standard-deviation entry is negative, NaN, or ±∞.
/// - `InvalidQuantile(qz)`
///   The quantile multiplier is ≤ 0, NaN, or ±∞.
#[derive(Debug, Clone, PartialEq)]
pub enum HpdiError {
    LengthMismatch { name: &'static str, expected: usize, got: usize },
    InvalidMean { index: usize, value: f64 },
    InvalidSigma { index: usize, value: f64 },
    InvalidQuantile(f64),
}

impl std::error::Error for HpdiError {}

impl std::fmt::Display for HpdiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HpdiError::LengthMismatch { name, expected, got } => {
                write!(f, "Invalid {name} length: {got}. Must equal J = {expected}.")
            }
            HpdiError::InvalidMean { index, value } => {
                write!(f, "Invalid mu value {value} at index {index}. Must be finite.")
            }
            HpdiError::InvalidSigma { index, value } => {
                write!(
                    f,
                    "Invalid sigma value {value} at index {index}. Must be finite and \
                     non-negative."
                )
            }
            HpdiError::InvalidQuantile(qz) => {
                write!(f, "Invalid qz value: {qz}. Must be strictly positive and finite.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<HpdiError> for PyErr {
    fn from(err: HpdiError) -> PyErr {
        PyValueError::new_err(format!("HpdiError: {err}"))
    }
}
