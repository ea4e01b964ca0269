//! variance::mixing — conditional-rate (mixing weight) matrix.
//!
//! Purpose
//! -------
//! Build the matrix `f` of conditional rates for the variance update: the
//! prior contribution per dimension plus half the (optionally group-pooled)
//! squared loadings. This is the intermediate a Gibbs-style variance sweep
//! produces once and then feeds to the log-variance builder, so the two
//! share their branch selection through [`VarianceStructure`].
//!
//! Key behaviors
//! -------------
//! - Per-group structure: `f` is `J×D` with
//!   `f[j][d] = r_d + ½·w2[j][d]`.
//! - Global structure: `f` is `1×D` with
//!   `f[0][d] = r_d + ½·Σⱼ w2[j][d]`.
//! - `r_d` is the prior rate: `betatau[d]` under the inverse-gamma family,
//!   the auxiliary inverse-scale `1/alphatau[d]` under half-Cauchy.
//!
//! Conventions
//! -----------
//! - Deterministic: identical inputs produce identical output; no hidden
//!   randomness anywhere in this subtree.
//! - Errors are reported via [`VarResult<T>`].
use crate::variance::errors::VarResult;
use crate::variance::structure::VarianceStructure;
use crate::variance::validation::{validate_nonneg_matrix, validate_positive_vector};
use ndarray::{Array2, ArrayView1, ArrayView2};

impl VarianceStructure {
    /// Build the conditional-rate matrix `f` from squared loadings and
    /// prior hyperparameters.
    ///
    /// Parameters
    /// ----------
    /// - `w2`: `ArrayView2<f64>`
    ///   Squared loadings, shape `J×D`; entries must be finite and ≥ 0.
    /// - `betatau`: `ArrayView1<f64>`
    ///   Prior rates per dimension, length `D`, strictly positive. Only
    ///   read under the inverse-gamma family, but validated under both so
    ///   a configuration switch cannot silently change what is accepted.
    /// - `alphatau`: `ArrayView1<f64>`
    ///   Prior shapes (inverse-gamma) or auxiliary inverse-scales
    ///   (half-Cauchy) per dimension, length `D`, strictly positive.
    ///
    /// Returns
    /// -------
    /// `VarResult<Array2<f64>>`
    ///   The rate matrix with [`weight_rows`](Self::weight_rows) rows and
    ///   `D` columns; every entry is strictly positive.
    ///
    /// Errors
    /// ------
    /// - `VarError::ShapeMismatch` / `VarError::LengthMismatch`
    ///   When an argument disagrees with the declared layout.
    /// - `VarError::InvalidEntry` / `VarError::InvalidHyper`
    ///   When an entry violates its value domain.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use hiervar::variance::{VariancePrior, VarianceStructure};
    /// use ndarray::array;
    ///
    /// let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 1, 2).unwrap();
    /// let w2 = array![[4.0], [6.0]];
    /// let betatau = array![1.0];
    /// let alphatau = array![2.0];
    ///
    /// let f = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();
    /// assert_eq!(f[[0, 0]], 3.0); // 1.0 + 4.0 / 2
    /// assert_eq!(f[[1, 0]], 4.0); // 1.0 + 6.0 / 2
    /// ```
    pub fn mixing_weights(
        &self, w2: ArrayView2<'_, f64>, betatau: ArrayView1<'_, f64>,
        alphatau: ArrayView1<'_, f64>,
    ) -> VarResult<Array2<f64>> {
        validate_nonneg_matrix("W2", &w2, (self.groups, self.dims))?;
        validate_positive_vector("betatau", &betatau, self.dims)?;
        validate_positive_vector("alphatau", &alphatau, self.dims)?;

        let rows = self.weight_rows();
        let mut f = Array2::<f64>::zeros((rows, self.dims));
        for dim in 0..self.dims {
            let rate = self.prior_rate(dim, &betatau, &alphatau);
            if self.global {
                let pooled: f64 = w2.column(dim).sum();
                f[[0, dim]] = rate + 0.5 * pooled;
            } else {
                for group in 0..self.groups {
                    f[[group, dim]] = rate + 0.5 * w2[[group, dim]];
                }
            }
        }
        Ok(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variance::errors::VarError;
    use crate::variance::prior::VariancePrior;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Per-group and global pooling arithmetic under both prior families.
    // - Determinism across repeated calls.
    // - Validation of the array arguments.
    //
    // They intentionally DO NOT cover:
    // - Consumption of `f` by the log-variance builder (see logvar tests
    //   and the integration pipeline).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify per-group inverse-gamma rates: prior rate plus half the
    // squared loading, entry by entry.
    //
    // Given
    // -----
    // - J = 2, D = 2 squared loadings and distinct betatau per dimension.
    //
    // Expect
    // ------
    // - f[j][d] = betatau[d] + w2[j][d] / 2 at every position.
    fn mixing_weights_per_group_inverse_gamma_matches_formula() {
        // Arrange
        let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 2, 4).unwrap();
        let w2 = array![[1.0, 4.0], [3.0, 0.0]];
        let betatau = array![0.5, 2.0];
        let alphatau = array![1.0, 1.0];

        // Act
        let f = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();

        // Assert
        assert_eq!(f.dim(), (2, 2));
        assert_abs_diff_eq!(f[[0, 0]], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(f[[0, 1]], 4.0, epsilon = 1e-15);
        assert_abs_diff_eq!(f[[1, 0]], 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(f[[1, 1]], 2.0, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify global pooling under the half-Cauchy family: one row, prior
    // rate 1/alphatau[d] plus half the column sum of squared loadings.
    //
    // Given
    // -----
    // - J = 3, D = 2, alphatau = [2, 4].
    //
    // Expect
    // ------
    // - f is 1×2 with f[0][d] = 1/alphatau[d] + Σⱼ w2[j][d] / 2.
    fn mixing_weights_global_half_cauchy_pools_over_groups() {
        // Arrange
        let s = VarianceStructure::new(true, VariancePrior::HalfCauchy, 3, 2, 6).unwrap();
        let w2 = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let betatau = array![1.0, 1.0];
        let alphatau = array![2.0, 4.0];

        // Act
        let f = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();

        // Assert
        assert_eq!(f.dim(), (1, 2));
        assert_abs_diff_eq!(f[[0, 0]], 0.5 + 4.5, epsilon = 1e-15);
        assert_abs_diff_eq!(f[[0, 1]], 0.25 + 6.0, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify determinism: repeated calls on identical inputs return
    // identical matrices.
    //
    // Given
    // -----
    // - A fixed configuration and inputs, called twice.
    //
    // Expect
    // ------
    // - Bitwise-equal outputs.
    fn mixing_weights_is_deterministic_across_calls() {
        // Arrange
        let s = VarianceStructure::new(false, VariancePrior::HalfCauchy, 2, 1, 2).unwrap();
        let w2 = array![[0.7], [1.3]];
        let betatau = array![1.0];
        let alphatau = array![3.0];

        // Act
        let first = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();
        let second = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Verify validation of the array arguments against the layout.
    //
    // Given
    // -----
    // - A wrongly shaped w2 and a short betatau.
    //
    // Expect
    // ------
    // - `ShapeMismatch` and `LengthMismatch` respectively.
    fn mixing_weights_validates_arguments_against_layout() {
        // Arrange
        let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 2, 4).unwrap();
        let w2_bad = array![[1.0, 2.0]];
        let w2 = array![[1.0, 2.0], [3.0, 4.0]];
        let betatau_short = array![1.0];
        let betatau = array![1.0, 1.0];
        let alphatau = array![1.0, 1.0];

        // Act / Assert
        match s.mixing_weights(w2_bad.view(), betatau.view(), alphatau.view()) {
            Err(VarError::ShapeMismatch { name: "W2", .. }) => (),
            other => panic!("expected W2 shape mismatch, got {other:?}"),
        }
        match s.mixing_weights(w2.view(), betatau_short.view(), alphatau.view()) {
            Err(VarError::LengthMismatch { name: "betatau", expected: 2, got: 1 }) => (),
            other => panic!("expected betatau length mismatch, got {other:?}"),
        }
    }
}
