//! intervals::hpdi — highest-posterior-density interval matrix.
//!
//! Purpose
//! -------
//! Build the `J×2` matrix of per-parameter credible bounds used to report
//! posterior uncertainty under a (near-)Gaussian posterior: row `j` is
//! `[mu[j] − qz·sigma[j], mu[j] + qz·sigma[j]]`, where `qz` is a quantile
//! multiplier such as 1.96 for a 95% interval. For a symmetric unimodal
//! posterior, this equal-tailed construction coincides with the HPD
//! interval.
//!
//! Conventions
//! -----------
//! - Column 0 holds lower bounds, column 1 upper bounds.
//! - `sigma[j] = 0` is allowed and yields a degenerate interval at the
//!   mean; negative or non-finite spreads are errors.
use crate::intervals::errors::{HpdiError, HpdiResult};
use ndarray::{Array2, ArrayView1};

/// Build the `J×2` HPD interval matrix from posterior means and spreads.
///
/// Parameters
/// ----------
/// - `mu`: `ArrayView1<f64>`
///   Posterior means; length must equal `j` and entries must be finite.
/// - `sigma`: `ArrayView1<f64>`
///   Posterior standard deviations; length must equal `j`, entries must
///   be finite and ≥ 0.
/// - `qz`: `f64`
///   Quantile multiplier (e.g., 1.96); must be strictly positive and
///   finite.
/// - `j`: `usize`
///   Declared number of parameters; both vectors are validated against it.
///
/// Returns
/// -------
/// `HpdiResult<Array2<f64>>`
///   A `j × 2` matrix with `[lower, upper]` per row, or the first
///   validation error encountered.
///
/// Errors
/// ------
/// - `HpdiError::LengthMismatch`
///   When `mu.len() != j` or `sigma.len() != j`.
/// - `HpdiError::InvalidMean` / `HpdiError::InvalidSigma`
///   When an entry is non-finite (or negative, for `sigma`).
/// - `HpdiError::InvalidQuantile`
///   When `qz ≤ 0` or `qz` is non-finite.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::intervals::hpd_intervals;
/// use ndarray::array;
///
/// let mu = array![0.0];
/// let sigma = array![1.0];
/// let bounds = hpd_intervals(mu.view(), sigma.view(), 1.96, 1).unwrap();
///
/// assert!((bounds[[0, 0]] + 1.96).abs() < 1e-12);
/// assert!((bounds[[0, 1]] - 1.96).abs() < 1e-12);
/// ```
pub fn hpd_intervals(
    mu: ArrayView1<'_, f64>, sigma: ArrayView1<'_, f64>, qz: f64, j: usize,
) -> HpdiResult<Array2<f64>> {
    if mu.len() != j {
        return Err(HpdiError::LengthMismatch { name: "mu", expected: j, got: mu.len() });
    }
    if sigma.len() != j {
        return Err(HpdiError::LengthMismatch { name: "sigma", expected: j, got: sigma.len() });
    }
    if !qz.is_finite() || qz <= 0.0 {
        return Err(HpdiError::InvalidQuantile(qz));
    }
    for (index, &value) in mu.iter().enumerate() {
        if !value.is_finite() {
            return Err(HpdiError::InvalidMean { index, value });
        }
    }
    for (index, &value) in sigma.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(HpdiError::InvalidSigma { index, value });
        }
    }

    let mut bounds = Array2::<f64>::zeros((j, 2));
    for row in 0..j {
        let half_width = qz * sigma[row];
        bounds[[row, 0]] = mu[row] - half_width;
        bounds[[row, 1]] = mu[row] + half_width;
    }
    Ok(bounds)
}
