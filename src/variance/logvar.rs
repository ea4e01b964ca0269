//! variance::logvar — expected log-variance matrix.
//!
//! Purpose
//! -------
//! Convert the conditional-rate matrix produced by
//! [`VarianceStructure::mixing_weights`] into the `J×D` matrix of expected
//! log-variances `E[ln τ²] = ln(rate) − ψ(shape)` under the matching
//! inverse-gamma conditional. Branch selection (prior family, pooling)
//! comes from the same [`VarianceStructure`] that built the rates, so the
//! two stages cannot disagree.
//!
//! Key behaviors
//! -------------
//! - Inverse-gamma family: shape `alphatau[d] + p/2`, rate taken directly
//!   from `f`; the current precisions do not enter the conjugate branch.
//! - Half-Cauchy family: shape `(1 + p)/2`, rate `f` plus the current
//!   precision (per group) or the group-mean precision (global), folding
//!   the auxiliary refresh of the parameter expansion into the rate.
//! - Global structure: the single pooled row of `f` is broadcast back to
//!   all `J` rows of the output.
//!
//! Conventions
//! -----------
//! - Deterministic; digamma evaluations go through `statrs`.
//! - Errors are reported via [`VarResult<T>`].
use crate::variance::errors::VarResult;
use crate::variance::prior::VariancePrior;
use crate::variance::structure::VarianceStructure;
use crate::variance::validation::{
    validate_nonneg_matrix, validate_positive_matrix, validate_positive_vector,
};
use ndarray::{Array2, ArrayView1, ArrayView2};
use statrs::function::gamma::digamma;

impl VarianceStructure {
    /// Build the `J×D` expected log-variance matrix from the rate matrix
    /// `f`, the current precision matrix, and the prior hyperparameters.
    ///
    /// Parameters
    /// ----------
    /// - `f`: `ArrayView2<f64>`
    ///   Conditional rates from [`mixing_weights`](Self::mixing_weights);
    ///   shape [`weight_rows`](Self::weight_rows) × `D`, strictly positive
    ///   entries.
    /// - `tau`: `ArrayView2<f64>`
    ///   Current precision matrix, shape `J×D`, finite and ≥ 0. Read only
    ///   under the half-Cauchy family, but validated under both so a
    ///   configuration switch cannot silently change what is accepted.
    /// - `alphatau`: `ArrayView1<f64>`
    ///   Prior shapes (inverse-gamma) per dimension, length `D`, strictly
    ///   positive.
    ///
    /// Returns
    /// -------
    /// `VarResult<Array2<f64>>`
    ///   The `J×D` matrix with entries `ln(rate) − ψ(shape)`.
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
    /// use ndarray::{array, Array2};
    ///
    /// let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 1, 1, 1).unwrap();
    /// let f = array![[2.0]];
    /// let tau = Array2::<f64>::zeros((1, 1));
    /// let alphatau = array![1.5];
    ///
    /// let lv = s.log_variances(f.view(), tau.view(), alphatau.view()).unwrap();
    /// // ln 2 − ψ(1.5 + 0.5)
    /// assert!((lv[[0, 0]] - (2.0_f64.ln() - 0.422_784_335_098_467_1)).abs() < 1e-10);
    /// ```
    pub fn log_variances(
        &self, f: ArrayView2<'_, f64>, tau: ArrayView2<'_, f64>, alphatau: ArrayView1<'_, f64>,
    ) -> VarResult<Array2<f64>> {
        validate_positive_matrix("f", &f, (self.weight_rows(), self.dims))?;
        validate_nonneg_matrix("Tau", &tau, (self.groups, self.dims))?;
        validate_positive_vector("alphatau", &alphatau, self.dims)?;

        let half_cauchy = matches!(self.prior, VariancePrior::HalfCauchy);
        let mut out = Array2::<f64>::zeros((self.groups, self.dims));
        for dim in 0..self.dims {
            let shape = self.conditional_shape(dim, &alphatau);
            let psi = digamma(shape);
            if self.global {
                let mean_precision = tau.column(dim).sum() / self.groups as f64;
                let rate = if half_cauchy { f[[0, dim]] + mean_precision } else { f[[0, dim]] };
                let value = rate.ln() - psi;
                for group in 0..self.groups {
                    out[[group, dim]] = value;
                }
            } else {
                for group in 0..self.groups {
                    let rate = if half_cauchy {
                        f[[group, dim]] + tau[[group, dim]]
                    } else {
                        f[[group, dim]]
                    };
                    out[[group, dim]] = rate.ln() - psi;
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variance::errors::VarError;
    use crate::variance::prior::VariancePrior;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The ln(rate) − ψ(shape) arithmetic under both families.
    // - Precision handling: ignored by the conjugate branch, folded into
    //   the rate by the half-Cauchy branch.
    // - Global-row broadcasting.
    // - Validation of the array arguments.
    //
    // They intentionally DO NOT cover:
    // - End-to-end consistency with `mixing_weights` on shared inputs,
    //   which lives in the integration pipeline test.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the conjugate branch entrywise: ln f − ψ(alphatau + ½), with
    // the precision matrix having no effect.
    //
    // Given
    // -----
    // - J = 2, D = 1, f = [[2], [8]], alphatau = [1.5], two different tau
    //   matrices.
    //
    // Expect
    // ------
    // - Entries equal ln f[j][0] − ψ(2.0); identical for both tau inputs.
    fn log_variances_inverse_gamma_ignores_precisions() {
        // Arrange
        let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 1, 2).unwrap();
        let f = array![[2.0], [8.0]];
        let alphatau = array![1.5];
        let tau_zero = Array2::<f64>::zeros((2, 1));
        let tau_other = array![[5.0], [9.0]];

        // Act
        let lv = s.log_variances(f.view(), tau_zero.view(), alphatau.view()).unwrap();
        let lv_other = s.log_variances(f.view(), tau_other.view(), alphatau.view()).unwrap();

        // Assert
        let psi = digamma(2.0);
        assert_abs_diff_eq!(lv[[0, 0]], 2.0_f64.ln() - psi, epsilon = 1e-12);
        assert_abs_diff_eq!(lv[[1, 0]], 8.0_f64.ln() - psi, epsilon = 1e-12);
        assert_eq!(lv, lv_other);
    }

    #[test]
    // Purpose
    // -------
    // Verify the half-Cauchy branch: the per-group precision is added to
    // the rate before the log, with shape (1 + 1)/2 = 1.
    //
    // Given
    // -----
    // - J = 2, D = 1, f = [[1], [3]], tau = [[1], [0]].
    //
    // Expect
    // ------
    // - Entries ln(f + tau) − ψ(1).
    fn log_variances_half_cauchy_folds_precisions_into_rate() {
        // Arrange
        let s = VarianceStructure::new(false, VariancePrior::HalfCauchy, 2, 1, 2).unwrap();
        let f = array![[1.0], [3.0]];
        let tau = array![[1.0], [0.0]];
        let alphatau = array![2.0];

        // Act
        let lv = s.log_variances(f.view(), tau.view(), alphatau.view()).unwrap();

        // Assert
        let psi = digamma(1.0);
        assert_abs_diff_eq!(lv[[0, 0]], 2.0_f64.ln() - psi, epsilon = 1e-12);
        assert_abs_diff_eq!(lv[[1, 0]], 3.0_f64.ln() - psi, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify global broadcasting: one pooled rate row expands to J
    // identical output rows, with the group-mean precision folded in
    // under half-Cauchy.
    //
    // Given
    // -----
    // - J = 3, D = 2, a 1×2 rate matrix, tau with column means (1, 2).
    //
    // Expect
    // ------
    // - A 3×2 output whose rows are identical and use the pooled shape
    //   (1 + 3)/2 = 2 and rate f + mean(tau).
    fn log_variances_global_broadcasts_pooled_row() {
        // Arrange
        let s = VarianceStructure::new(true, VariancePrior::HalfCauchy, 3, 2, 6).unwrap();
        let f = array![[4.0, 6.0]];
        let tau = array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]];
        let alphatau = array![1.0, 1.0];

        // Act
        let lv = s.log_variances(f.view(), tau.view(), alphatau.view()).unwrap();

        // Assert
        let psi = digamma(2.0);
        assert_eq!(lv.dim(), (3, 2));
        for group in 0..3 {
            assert_abs_diff_eq!(lv[[group, 0]], 5.0_f64.ln() - psi, epsilon = 1e-12);
            assert_abs_diff_eq!(lv[[group, 1]], 8.0_f64.ln() - psi, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify validation: `f` must have the layout's pooled row count, and
    // `Tau` must be J×D.
    //
    // Given
    // -----
    // - A global structure given a J-row `f`, and a per-group structure
    //   given a mis-shaped tau.
    //
    // Expect
    // ------
    // - `ShapeMismatch` naming the offending argument.
    fn log_variances_validates_arguments_against_layout() {
        // Arrange
        let global = VarianceStructure::new(true, VariancePrior::InverseGamma, 2, 1, 2).unwrap();
        let local = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 1, 2).unwrap();
        let f_two_rows = array![[1.0], [2.0]];
        let f_one_row = array![[1.0]];
        let tau = Array2::<f64>::zeros((2, 1));
        let tau_bad = Array2::<f64>::zeros((1, 1));
        let alphatau = array![1.0];

        // Act / Assert
        match global.log_variances(f_two_rows.view(), tau.view(), alphatau.view()) {
            Err(VarError::ShapeMismatch { name: "f", expected: (1, 1), got: (2, 1) }) => (),
            other => panic!("expected f shape mismatch, got {other:?}"),
        }
        match local.log_variances(f_two_rows.view(), tau_bad.view(), alphatau.view()) {
            Err(VarError::ShapeMismatch { name: "Tau", expected: (2, 1), got: (1, 1) }) => (),
            other => panic!("expected Tau shape mismatch, got {other:?}"),
        }
        // Sanity: the matching shapes succeed.
        assert!(global.log_variances(f_one_row.view(), tau.view(), alphatau.view()).is_ok());
    }
}
