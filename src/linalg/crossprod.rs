//! linalg::crossprod — cross-product sufficient statistic.
//!
//! Purpose
//! -------
//! Compute the cross-product matrix `XᵀX` and its trace together, so callers
//! that need both (e.g., variance updates built on squared design columns)
//! do not recompute the product. The trace is accumulated during the same
//! sweep that validates the input, using the identity
//! `tr(XᵀX) = Σᵢⱼ X[i][j]²`.
//!
//! Conventions
//! -----------
//! - `xtx` is symmetric by construction; no symmetrization pass is applied
//!   afterwards.
//! - Errors are reported via [`LinAlgResult<T>`].
use crate::linalg::errors::{LinAlgError, LinAlgResult};
use ndarray::{Array2, ArrayView2};

/// CrossProduct — the cross-product matrix `XᵀX` and its trace.
///
/// Fields
/// ------
/// - `xtx`: `Array2<f64>`
///   The `ncols × ncols` matrix `XᵀX`. Symmetric and positive
///   semi-definite.
/// - `trace`: `f64`
///   `tr(XᵀX)`, equal to the squared Frobenius norm of `X`.
#[derive(Debug, Clone)]
pub struct CrossProduct {
    pub xtx: Array2<f64>,
    pub trace: f64,
}

/// Compute `XᵀX` and `tr(XᵀX)` for a design matrix `X`.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Input matrix. All entries must be finite; any shape (including zero
///   rows) is accepted, since the product is defined for all of them.
///
/// Returns
/// -------
/// `LinAlgResult<CrossProduct>`
///   - `Ok(CrossProduct)` with the symmetric `ncols × ncols` product and
///     its trace.
///   - `Err(LinAlgError::NonFiniteEntry)` when an entry is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::linalg::cross_product;
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let cp = cross_product(x.view()).unwrap();
///
/// assert_eq!(cp.xtx[[0, 0]], 10.0);
/// assert_eq!(cp.xtx[[0, 1]], cp.xtx[[1, 0]]);
/// assert_eq!(cp.trace, 30.0);
/// ```
pub fn cross_product(x: ArrayView2<'_, f64>) -> LinAlgResult<CrossProduct> {
    let mut trace = 0.0_f64;
    for ((row, col), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(LinAlgError::NonFiniteEntry { row, col, value });
        }
        trace += value * value;
    }
    let xtx = x.t().dot(&x);
    Ok(CrossProduct { xtx, trace })
}
