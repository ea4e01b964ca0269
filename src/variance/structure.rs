//! variance::structure — validated layout for variance-component builders.
//!
//! Purpose
//! -------
//! Bundle the structural configuration of a variance model — the
//! global-vs-per-group flag, the prior family, and the dimension counts
//! `J`, `D`, `JD` — into one validated object that drives both the mixing
//! weight matrix and the log-variance matrix. Keeping branch selection on
//! a single object guarantees the two builders can never disagree on which
//! prior formula or pooling mode applies.
//!
//! Key behaviors
//! -------------
//! - Validate at construction that `J ≥ 1`, `D ≥ 1`, and `JD = J·D`.
//! - Expose the derived quantities both builders share: the pooling count,
//!   the number of weight rows, the per-dimension prior rate, and the
//!   conditional shape.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed `VarianceStructure` is internally consistent for its
//!   lifetime; the builders only need to validate their array arguments
//!   against it.
use crate::variance::errors::{VarError, VarResult};
use crate::variance::prior::VariancePrior;
use ndarray::ArrayView1;

/// VarianceStructure — shared configuration of the variance builders.
///
/// Purpose
/// -------
/// Carry the `globalvar`/`priorvar` branch selection and the `J`/`D`/`JD`
/// dimension counts, validated once, so that
/// [`mixing_weights`](Self::mixing_weights) and
/// [`log_variances`](Self::log_variances) apply identical branch logic.
///
/// Fields
/// ------
/// - `global`: `bool`
///   `true` when one variance per dimension is shared across all `J`
///   groups; `false` for per-group variances.
/// - `prior`: [`VariancePrior`]
///   Which prior-family formula set applies.
/// - `groups`: `usize`
///   Number of groups `J` (≥ 1).
/// - `dims`: `usize`
///   Number of dimensions `D` (≥ 1).
/// - `total`: `usize`
///   Declared product count `JD`; always equals `groups · dims`.
///
/// Invariants
/// ----------
/// - `groups ≥ 1`, `dims ≥ 1`, `total == groups * dims` — enforced by
///   [`VarianceStructure::new`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarianceStructure {
    pub global: bool,
    pub prior: VariancePrior,
    pub groups: usize,
    pub dims: usize,
    pub total: usize,
}

impl VarianceStructure {
    /// Build a validated structure from the raw model configuration.
    ///
    /// Parameters
    /// ----------
    /// - `global`: `bool`
    ///   Global (shared) vs per-group variance structure.
    /// - `prior`: [`VariancePrior`]
    ///   Prior family; parse strings via `VariancePrior::from_str` first.
    /// - `j`: `usize`
    ///   Number of groups; must be ≥ 1.
    /// - `d`: `usize`
    ///   Number of dimensions; must be ≥ 1.
    /// - `jd`: `usize`
    ///   Declared product count; must equal `j * d`.
    ///
    /// Returns
    /// -------
    /// `VarResult<VarianceStructure>`
    ///   A consistent layout, or `ZeroDimension` / `InconsistentLayout`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use hiervar::variance::{VariancePrior, VarianceStructure};
    ///
    /// let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 3, 2, 6).unwrap();
    /// assert_eq!(s.weight_rows(), 3);
    ///
    /// assert!(VarianceStructure::new(false, VariancePrior::InverseGamma, 3, 2, 7).is_err());
    /// ```
    pub fn new(
        global: bool, prior: VariancePrior, j: usize, d: usize, jd: usize,
    ) -> VarResult<Self> {
        if j == 0 {
            return Err(VarError::ZeroDimension { name: "J" });
        }
        if d == 0 {
            return Err(VarError::ZeroDimension { name: "D" });
        }
        if jd != j * d {
            return Err(VarError::InconsistentLayout { j, d, jd });
        }
        Ok(VarianceStructure { global, prior, groups: j, dims: d, total: jd })
    }

    /// Number of squared-loading terms pooled into one conditional update:
    /// `J` under the global structure, 1 per group otherwise.
    pub fn pool_count(&self) -> usize {
        if self.global { self.groups } else { 1 }
    }

    /// Number of rows in the mixing-weight matrix: one pooled row under
    /// the global structure, `J` otherwise.
    pub fn weight_rows(&self) -> usize {
        if self.global { 1 } else { self.groups }
    }

    /// Prior contribution to the conditional rate for dimension `dim`.
    ///
    /// Inverse-gamma uses the prior rate `betatau[dim]`; half-Cauchy uses
    /// the auxiliary inverse-scale `1 / alphatau[dim]` from the parameter
    /// expansion. Callers validate the vectors before indexing.
    pub(crate) fn prior_rate(
        &self, dim: usize, betatau: &ArrayView1<'_, f64>, alphatau: &ArrayView1<'_, f64>,
    ) -> f64 {
        match self.prior {
            VariancePrior::InverseGamma => betatau[dim],
            VariancePrior::HalfCauchy => 1.0 / alphatau[dim],
        }
    }

    /// Conditional shape for dimension `dim`, shared by both builders.
    ///
    /// Inverse-gamma: `alphatau[dim] + p/2`; half-Cauchy: `(1 + p)/2`,
    /// where `p` is [`pool_count`](Self::pool_count).
    pub(crate) fn conditional_shape(&self, dim: usize, alphatau: &ArrayView1<'_, f64>) -> f64 {
        let pooled = self.pool_count() as f64;
        match self.prior {
            VariancePrior::InverseGamma => alphatau[dim] + 0.5 * pooled,
            VariancePrior::HalfCauchy => 0.5 * (1.0 + pooled),
        }
    }
}
