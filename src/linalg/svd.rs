//! linalg::svd — truncated singular value decomposition.
//!
//! Purpose
//! -------
//! Provide a thin, validated wrapper around `nalgebra`'s iterative SVD that
//! accepts `ndarray` inputs and returns the decomposition as an owned
//! [`SvdParts`] value. Callers request the leading `nu` left and `nv` right
//! singular vectors; the full singular-value vector is always returned.
//!
//! Key behaviors
//! -------------
//! - Reject empty matrices, non-finite entries, and truncation counts that
//!   exceed the rank dimension `min(nrows, ncols)` before any work is done.
//! - Bridge the input into a `DMatrix`, run the iterative SVD, and copy the
//!   requested leading blocks back into `ndarray` containers.
//! - Report non-convergence of the underlying iteration as
//!   [`LinAlgError::NonConvergence`] instead of panicking.
//!
//! Conventions
//! -----------
//! - Singular values are ordered non-increasing, so "leading" vectors are
//!   those attached to the largest singular values.
//! - `M ≈ U · diag(D) · Vᵀ` holds exactly (to floating point) when
//!   `nu = nv = min(nrows, ncols)`.
//! - Errors are reported via [`LinAlgResult<T>`]; this module never panics
//!   on user-facing invalid input.
use crate::linalg::{
    bridge::{block_to_array2, to_dmatrix},
    errors::{LinAlgError, LinAlgResult},
};
use ndarray::{Array1, Array2, ArrayView2};

/// Iteration budget for the underlying two-sided SVD iteration.
const SVD_MAX_ITER: usize = 1024;

/// SvdParts — owned results of a truncated singular value decomposition.
///
/// Purpose
/// -------
/// Bundle the three outputs of `M = U · diag(D) · Vᵀ` into one value so the
/// caller owns the result without pre-allocating output arguments.
///
/// Fields
/// ------
/// - `u`: `Array2<f64>`
///   Leading left singular vectors, `nrows × nu`, orthonormal columns.
/// - `d`: `Array1<f64>`
///   All `min(nrows, ncols)` singular values, non-increasing and ≥ 0.
/// - `v`: `Array2<f64>`
///   Leading right singular vectors, `ncols × nv`, orthonormal columns.
///
/// Invariants
/// ----------
/// - `d` is never truncated, regardless of `nu`/`nv`; reconstruction with
///   fewer factors uses the leading entries of `d`.
#[derive(Debug, Clone)]
pub struct SvdParts {
    pub u: Array2<f64>,
    pub d: Array1<f64>,
    pub v: Array2<f64>,
}

/// Compute a truncated SVD of `m`, keeping `nu` left and `nv` right vectors.
///
/// Parameters
/// ----------
/// - `m`: `ArrayView2<f64>`
///   Input matrix. Must be non-empty with all entries finite.
/// - `nu`: `usize`
///   Number of left singular vectors to return. Must satisfy
///   `nu ≤ min(nrows, ncols)`.
/// - `nv`: `usize`
///   Number of right singular vectors to return. Must satisfy
///   `nv ≤ min(nrows, ncols)`.
///
/// Returns
/// -------
/// `LinAlgResult<SvdParts>`
///   - `Ok(SvdParts)` with `u` of shape `nrows × nu`, the full
///     singular-value vector `d`, and `v` of shape `ncols × nv`.
///   - `Err(LinAlgError)` when validation fails or the iteration does not
///     converge.
///
/// Errors
/// ------
/// - `LinAlgError::EmptyMatrix`
///   When `m` has zero rows or zero columns.
/// - `LinAlgError::NonFiniteEntry`
///   When any entry of `m` is NaN or ±∞, with the offending position.
/// - `LinAlgError::InvalidFactorCount`
///   When `nu` or `nv` exceeds `min(nrows, ncols)`.
/// - `LinAlgError::NonConvergence`
///   When the iterative decomposition exhausts its iteration budget.
///
/// Panics
/// ------
/// - Never panics under the documented invariants.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::linalg::truncated_svd;
/// use ndarray::array;
///
/// let m = array![[3.0, 0.0], [0.0, 2.0], [0.0, 0.0]];
/// let parts = truncated_svd(m.view(), 2, 2).unwrap();
///
/// assert_eq!(parts.u.dim(), (3, 2));
/// assert_eq!(parts.d.len(), 2);
/// assert_eq!(parts.v.dim(), (2, 2));
/// assert!((parts.d[0] - 3.0).abs() < 1e-12);
/// assert!((parts.d[1] - 2.0).abs() < 1e-12);
/// ```
pub fn truncated_svd(m: ArrayView2<'_, f64>, nu: usize, nv: usize) -> LinAlgResult<SvdParts> {
    let (nrows, ncols) = m.dim();
    if nrows == 0 || ncols == 0 {
        return Err(LinAlgError::EmptyMatrix);
    }
    for ((row, col), &value) in m.indexed_iter() {
        if !value.is_finite() {
            return Err(LinAlgError::NonFiniteEntry { row, col, value });
        }
    }
    let rank_dim = nrows.min(ncols);
    if nu > rank_dim {
        return Err(LinAlgError::InvalidFactorCount { name: "nu", requested: nu, available: rank_dim });
    }
    if nv > rank_dim {
        return Err(LinAlgError::InvalidFactorCount { name: "nv", requested: nv, available: rank_dim });
    }

    let dm = to_dmatrix(&m);
    let svd = dm
        .try_svd(true, true, f64::EPSILON, SVD_MAX_ITER)
        .ok_or(LinAlgError::NonConvergence)?;

    // Both factor matrices were requested above, so the options are present.
    let u_full = svd.u.expect("left singular vectors were requested");
    let v_t_full = svd.v_t.expect("right singular vectors were requested");

    let u = block_to_array2(&u_full, nrows, nu);
    // v_t is min × ncols; V's leading nv columns are v_t's leading nv rows.
    let v = Array2::from_shape_fn((ncols, nv), |(i, k)| v_t_full[(k, i)]);
    let d = Array1::from_iter(svd.singular_values.iter().copied());

    Ok(SvdParts { u, d, v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Full-rank reconstruction M ≈ U diag(D) Vᵀ within tolerance.
    // - Ordering and truncation semantics of the returned factors.
    // - All validation error branches.
    //
    // They intentionally DO NOT cover:
    // - Forced non-convergence of the underlying iteration, which cannot be
    //   triggered reliably with well-scaled finite inputs.
    // -------------------------------------------------------------------------

    fn reconstruct(parts: &SvdParts) -> Array2<f64> {
        let (nrows, nu) = parts.u.dim();
        let (ncols, _) = parts.v.dim();
        let mut out = Array2::<f64>::zeros((nrows, ncols));
        for k in 0..nu {
            let sigma = parts.d[k];
            for i in 0..nrows {
                for j in 0..ncols {
                    out[[i, j]] += sigma * parts.u[[i, k]] * parts.v[[j, k]];
                }
            }
        }
        out
    }

    #[test]
    // Purpose
    // -------
    // Verify the full-decomposition round trip: U diag(D) Vᵀ reproduces the
    // input matrix within floating-point tolerance.
    //
    // Given
    // -----
    // - A 4×3 matrix with no special structure.
    // - nu = nv = min(4, 3) = 3.
    //
    // Expect
    // ------
    // - Entrywise reconstruction error below 1e-9.
    fn truncated_svd_full_rank_reconstructs_input() {
        // Arrange
        let m = array![
            [1.0, 2.0, 0.5],
            [-0.5, 1.5, 3.0],
            [2.0, -1.0, 1.0],
            [0.0, 0.5, -2.0]
        ];

        // Act
        let parts = truncated_svd(m.view(), 3, 3).unwrap();
        let rebuilt = reconstruct(&parts);

        // Assert
        for i in 0..4 {
            for j in 0..3 {
                assert_abs_diff_eq!(rebuilt[[i, j]], m[[i, j]], epsilon = 1e-9);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check that singular values come back sorted non-increasing and that
    // truncation controls only the factor widths, not the value vector.
    //
    // Given
    // -----
    // - A diagonal 3×3 matrix with singular values {5, 2, 1}.
    // - nu = 1, nv = 2.
    //
    // Expect
    // ------
    // - d = [5, 2, 1]; u is 3×1; v is 3×2.
    fn truncated_svd_orders_values_and_truncates_factors() {
        // Arrange
        let m = array![[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 2.0]];

        // Act
        let parts = truncated_svd(m.view(), 1, 2).unwrap();

        // Assert
        assert_eq!(parts.u.dim(), (3, 1));
        assert_eq!(parts.v.dim(), (3, 2));
        assert_eq!(parts.d.len(), 3);
        assert_abs_diff_eq!(parts.d[0], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(parts.d[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(parts.d[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-finite entries are rejected with the offending
    // position rather than producing a garbage decomposition.
    //
    // Given
    // -----
    // - A 2×2 matrix with a NaN at (1, 0).
    //
    // Expect
    // ------
    // - `Err(LinAlgError::NonFiniteEntry { row: 1, col: 0, .. })`.
    fn truncated_svd_rejects_non_finite_entries() {
        // Arrange
        let m = array![[1.0, 2.0], [f64::NAN, 4.0]];

        // Act
        let res = truncated_svd(m.view(), 2, 2);

        // Assert
        match res {
            Err(LinAlgError::NonFiniteEntry { row: 1, col: 0, .. }) => (),
            other => panic!("expected NonFiniteEntry at (1, 0), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that requesting more factors than the rank dimension fails.
    //
    // Given
    // -----
    // - A 3×2 matrix (rank dimension 2) with nu = 3.
    //
    // Expect
    // ------
    // - `Err(LinAlgError::InvalidFactorCount { name: "nu", .. })`.
    fn truncated_svd_rejects_factor_count_beyond_rank_dimension() {
        // Arrange
        let m = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

        // Act
        let res = truncated_svd(m.view(), 3, 1);

        // Assert
        match res {
            Err(LinAlgError::InvalidFactorCount { name: "nu", requested: 3, available: 2 }) => (),
            other => panic!("expected InvalidFactorCount for nu, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an empty matrix is rejected up front.
    //
    // Given
    // -----
    // - A 0×3 matrix.
    //
    // Expect
    // ------
    // - `Err(LinAlgError::EmptyMatrix)`.
    fn truncated_svd_rejects_empty_matrix() {
        // Arrange
        let m = Array2::<f64>::zeros((0, 3));

        // Act
        let res = truncated_svd(m.view(), 0, 0);

        // Assert
        assert_eq!(res.unwrap_err(), LinAlgError::EmptyMatrix);
    }
}
