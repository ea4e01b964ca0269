//! variance::errors — error types for variance-component builders.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the variance-prior
//! selector, the layout object, and the `fMat`/`logvarMat` builders. The
//! taxonomy follows the three failure classes of this subtree: unsupported
//! prior-family names, dimension/layout inconsistencies against J, D, and
//! JD, and invalid numeric entries in hyperparameters or statistics.
//!
//! Conventions
//! -----------
//! - Variants carry the declared-vs-observed quantities (or the offending
//!   entry position) so that mis-shaped calls are diagnosable without a
//!   debugger.
//! - Behind `python-bindings`, all variants map to `PyValueError` with the
//!   Rust `Display` message preserved verbatim.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type VarResult<T> = Result<T, VarError>;

/// VarError — failures in variance-component construction.
///
/// Variants
/// --------
/// - `UnsupportedPriorFamily(name)`
///   A prior-family string does not name a supported family; the closed
///   set is "invgamma" and "halfcauchy" (with hyphenated aliases).
/// - `ZeroDimension { name }`
///   A declared dimension (`J` or `D`) is zero.
/// - `InconsistentLayout { j, d, jd }`
///   The declared product count `JD` does not equal `J·D`.
/// - `ShapeMismatch { name, expected, got }`
///   A matrix argument does not have the shape the layout dictates.
/// - `LengthMismatch { name, expected, got }`
///   A hyperparameter vector does not have length `D`.
/// - `InvalidHyper { name, index, value }`
///   A hyperparameter entry is non-positive or non-finite.
/// - `InvalidEntry { name, row, col, value }`
///   A matrix entry is negative or non-finite where a non-negative finite
///   statistic is required.
#[derive(Debug, Clone, PartialEq)]
pub enum VarError {
    //------ Configuration errors ------
    UnsupportedPriorFamily(String),
    ZeroDimension { name: &'static str },
    InconsistentLayout { j: usize, d: usize, jd: usize },
    //------ Shape errors ------
    ShapeMismatch { name: &'static str, expected: (usize, usize), got: (usize, usize) },
    LengthMismatch { name: &'static str, expected: usize, got: usize },
    //------ Value errors ------
    InvalidHyper { name: &'static str, index: usize, value: f64 },
    InvalidEntry { name: &'static str, row: usize, col: usize, value: f64 },
}

impl std::error::Error for VarError {}

impl std::fmt::Display for VarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarError::UnsupportedPriorFamily(name) => {
                write!(
                    f,
                    "Unsupported prior family: \"{name}\". Supported families are \"invgamma\" \
                     and \"halfcauchy\"."
                )
            }
            VarError::ZeroDimension { name } => {
                write!(f, "Invalid {name} value: 0. Dimension counts must be at least 1.")
            }
            VarError::InconsistentLayout { j, d, jd } => {
                write!(f, "Inconsistent layout: JD = {jd} does not equal J·D = {j}·{d}.")
            }
            VarError::ShapeMismatch { name, expected, got } => {
                write!(
                    f,
                    "Invalid {name} shape: {got:?}. Must be {expected:?} for the declared layout."
                )
            }
            VarError::LengthMismatch { name, expected, got } => {
                write!(f, "Invalid {name} length: {got}. Must equal D = {expected}.")
            }
            VarError::InvalidHyper { name, index, value } => {
                write!(
                    f,
                    "Invalid {name} value {value} at index {index}. Must be strictly positive \
                     and finite."
                )
            }
            VarError::InvalidEntry { name, row, col, value } => {
                write!(
                    f,
                    "Invalid {name} entry {value} at ({row}, {col}). Must be finite and \
                     non-negative."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<VarError> for PyErr {
    fn from(err: VarError) -> PyErr {
        PyValueError::new_err(format!("VarError: {err}"))
    }
}
