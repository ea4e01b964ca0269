//! linalg::bridge — copy helpers between `ndarray` and `nalgebra`.
//!
//! Purpose
//! -------
//! The public surface of this crate speaks `ndarray`, while dense
//! decompositions are delegated to `nalgebra`. This module holds the small
//! copy bridge between the two representations so that conversion logic is
//! written once and stays out of the numerical routines.
//!
//! Key behaviors
//! -------------
//! - Copy an `ndarray` matrix into a freshly allocated `DMatrix` using
//!   column-major writes, matching `DMatrix`'s internal storage.
//! - Copy a `DMatrix` (or a leading block of one) back into an `ndarray`
//!   `Array2`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs have already been validated by the caller (finite entries,
//!   non-empty shapes); these helpers do not re-validate.
//! - Block extraction never reads outside the source matrix; callers are
//!   responsible for requesting in-bounds block sizes.
use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

/// Copy an `ndarray` view into a freshly allocated `nalgebra::DMatrix`.
///
/// The copy proceeds column by column, matching the column-major storage of
/// `DMatrix` for better cache locality than a row-major traversal.
pub(crate) fn to_dmatrix(m: &ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (nrows, ncols) = m.dim();
    let mut out = DMatrix::<f64>::zeros(nrows, ncols);
    for j in 0..ncols {
        for i in 0..nrows {
            out[(i, j)] = m[[i, j]];
        }
    }
    out
}

/// Copy the leading `nrows × ncols` block of a `DMatrix` into an `Array2`.
///
/// Panics if the requested block exceeds the source dimensions; callers
/// validate block sizes beforehand.
pub(crate) fn block_to_array2(m: &DMatrix<f64>, nrows: usize, ncols: usize) -> Array2<f64> {
    Array2::from_shape_fn((nrows, ncols), |(i, j)| m[(i, j)])
}
