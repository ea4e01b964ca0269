//! linalg::errors — shared error types for dense linear algebra.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the SVD wrapper and the
//! cross-product statistic, together with a conversion layer to Python
//! exceptions for PyO3-based bindings. Decomposition failures and malformed
//! inputs are kept localized here so that both Rust and Python callers see
//! one consistent error surface.
//!
//! Key behaviors
//! -------------
//! - Define [`LinAlgResult`] and [`LinAlgError`] as the canonical result and
//!   error types for `linalg` routines.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<LinAlgError> for PyErr` to map Rust-side failures into
//!   `PyValueError` values visible to Python callers.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "nu must not exceed min(nrows, ncols)") rather than low-level details.
//! - Variants carry just enough payload (offending index or value) for
//!   logging and debugging without capturing large matrices.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LinAlgResult<T> = Result<T, LinAlgError>;

/// LinAlgError — error conditions for dense linear-algebra routines.
///
/// Variants
/// --------
/// - `EmptyMatrix`
///   The input matrix has zero rows or zero columns, so no decomposition
///   or cross-product is defined.
/// - `NonFiniteEntry { row, col, value }`
///   An input entry is NaN or ±∞; decompositions on such matrices are
///   meaningless and are rejected up front.
/// - `InvalidFactorCount { name, requested, available }`
///   A requested number of singular vectors (`nu` or `nv`) exceeds the
///   rank dimension `min(nrows, ncols)` of the input.
/// - `NonConvergence`
///   The iterative SVD failed to converge within its iteration budget.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - Behind `python-bindings`, all variants map to `PyValueError` with the
///   `Display` message preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    //------ Input validation errors ------
    EmptyMatrix,
    NonFiniteEntry { row: usize, col: usize, value: f64 },
    InvalidFactorCount { name: &'static str, requested: usize, available: usize },
    //------ Runtime errors ------
    NonConvergence,
}

impl std::error::Error for LinAlgError {}

impl std::fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinAlgError::EmptyMatrix => {
                write!(f, "Input matrix must have at least one row and one column.")
            }
            LinAlgError::NonFiniteEntry { row, col, value } => {
                write!(f, "Non-finite entry {value} at ({row}, {col}). All entries must be finite.")
            }
            LinAlgError::InvalidFactorCount { name, requested, available } => {
                write!(
                    f,
                    "Invalid {name} value: {requested}. Must not exceed min(nrows, ncols) = \
                     {available}."
                )
            }
            LinAlgError::NonConvergence => {
                write!(f, "Singular value decomposition failed to converge.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LinAlgError> for PyErr {
    fn from(err: LinAlgError) -> PyErr {
        PyValueError::new_err(format!("LinAlgError: {err}"))
    }
}
