//! special::errors — domain-error types for special functions.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the gamma, digamma, and beta
//! special functions, plus the conversion to Python exceptions used by the
//! PyO3 bindings. The special functions are total on `x > 0`; everything
//! else is a domain error surfaced here rather than a NaN.
//!
//! Conventions
//! -----------
//! - Each error names the offending argument so that call sites with two
//!   parameters (`a`, `b`) produce unambiguous diagnostics.
//! - At the Python boundary all variants map to `PyValueError` with the
//!   Rust `Display` message preserved verbatim.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SpecialResult<T> = Result<T, SpecialError>;

/// SpecialError — domain violations for special-function arguments.
///
/// Variants
/// --------
/// - `NonPositiveArgument { name, value }`
///   The named argument is ≤ 0, NaN, or ±∞; the gamma-family functions in
///   this crate are only evaluated on the strictly positive reals.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialError {
    NonPositiveArgument { name: &'static str, value: f64 },
}

impl std::error::Error for SpecialError {}

impl std::fmt::Display for SpecialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialError::NonPositiveArgument { name, value } => {
                write!(f, "Invalid {name} value: {value}. Must be strictly positive and finite.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SpecialError> for PyErr {
    fn from(err: SpecialError) -> PyErr {
        PyValueError::new_err(format!("SpecialError: {err}"))
    }
}
