//! variance::validation — shared input guards for variance builders.
//!
//! Purpose
//! -------
//! Centralize the shape and value checks both variance-component builders
//! perform on their matrix and hyperparameter arguments, so that `fMat`
//! and `logvarMat` cannot drift apart in what they accept.
//!
//! Key behaviors
//! -------------
//! - Enforce declared shapes (`J×D` statistics, length-`D` hyperparameter
//!   vectors) before any arithmetic.
//! - Enforce value domains: statistics must be finite and non-negative,
//!   hyperparameters strictly positive and finite.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no allocation
//!   beyond error construction and no numerical work.
//! - Errors are reported via the subtree-local [`VarError`] enum.
use crate::variance::errors::{VarError, VarResult};
use ndarray::{ArrayView1, ArrayView2};

/// Check that a statistic matrix has the declared shape and contains only
/// finite, non-negative entries.
pub fn validate_nonneg_matrix(
    name: &'static str, m: &ArrayView2<'_, f64>, expected: (usize, usize),
) -> VarResult<()> {
    if m.dim() != expected {
        return Err(VarError::ShapeMismatch { name, expected, got: m.dim() });
    }
    for ((row, col), &value) in m.indexed_iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(VarError::InvalidEntry { name, row, col, value });
        }
    }
    Ok(())
}

/// Check that a hyperparameter vector has length `expected` and strictly
/// positive, finite entries.
pub fn validate_positive_vector(
    name: &'static str, v: &ArrayView1<'_, f64>, expected: usize,
) -> VarResult<()> {
    if v.len() != expected {
        return Err(VarError::LengthMismatch { name, expected, got: v.len() });
    }
    for (index, &value) in v.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(VarError::InvalidHyper { name, index, value });
        }
    }
    Ok(())
}

/// Check that a rate matrix has the declared shape and strictly positive,
/// finite entries. Used for the `f` matrix consumed by `logvarMat`, whose
/// logarithm must be defined entrywise.
pub fn validate_positive_matrix(
    name: &'static str, m: &ArrayView2<'_, f64>, expected: (usize, usize),
) -> VarResult<()> {
    if m.dim() != expected {
        return Err(VarError::ShapeMismatch { name, expected, got: m.dim() });
    }
    for ((row, col), &value) in m.indexed_iter() {
        if !value.is_finite() || value <= 0.0 {
            return Err(VarError::InvalidEntry { name, row, col, value });
        }
    }
    Ok(())
}
