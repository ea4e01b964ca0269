//! density::gamma — gamma and inverse-gamma log-densities and draws.
//!
//! Purpose
//! -------
//! Implement the density/variate quartet used by Gibbs-style variance
//! updates: log-densities of the gamma and inverse-gamma distributions
//! evaluated with caller-precomputed logs (the caller already holds `ln x`
//! inside a sweep, so it is not recomputed here), and the matching variate
//! generators driven by a caller-supplied random number generator.
//!
//! Key behaviors
//! -------------
//! - [`gamma_log_density`] evaluates ln f(x; a, b) for Gamma(shape `a`,
//!   rate `b`) given `x` and `ln x`.
//! - [`inv_gamma_log_density`] evaluates ln f(x; a, b) for
//!   Inv-Gamma(shape `a`, scale `b`) given `1/x` and `ln x`.
//! - [`gamma_draw`] and [`inv_gamma_draw`] produce strictly positive
//!   variates; the inverse-gamma draw is the reciprocal of a gamma draw
//!   with rate equal to the inverse-gamma scale.
//!
//! Invariants & assumptions
//! ------------------------
//! - Precomputed arguments are trusted to be mutually consistent
//!   (`log_x = ln x`, `inv_x = 1/x`); the functions do not cross-check
//!   them, by contract with the calling sweep.
//! - Parameter-domain violations are [`DensityError`] values; evaluation
//!   points outside the support yield `−∞`, not errors.
//!
//! Conventions
//! -----------
//! - All densities are returned on the log scale; callers exponentiate if
//!   a natural-scale value is needed.
//! - Reproducibility of draws is the caller's concern: pass a seeded RNG
//!   to make a sweep deterministic.
use crate::density::errors::{DensityError, DensityResult};
use rand::Rng;
use rand::distributions::Distribution;
use statrs::distribution::Gamma;
use statrs::function::gamma::ln_gamma;

fn check_shape(a: f64) -> DensityResult<()> {
    if !a.is_finite() || a <= 0.0 {
        return Err(DensityError::InvalidShape(a));
    }
    Ok(())
}

fn check_rate(b: f64) -> DensityResult<()> {
    if !b.is_finite() || b <= 0.0 {
        return Err(DensityError::InvalidRate(b));
    }
    Ok(())
}

fn check_scale(b: f64) -> DensityResult<()> {
    if !b.is_finite() || b <= 0.0 {
        return Err(DensityError::InvalidScale(b));
    }
    Ok(())
}

/// Log-density of Gamma(shape `a`, rate `b`) at `x`, given `ln x`.
///
/// Parameters
/// ----------
/// - `x`: `f64`
///   Evaluation point.
/// - `log_x`: `f64`
///   Precomputed `ln x`; must equal `x.ln()` when `x > 0` (not
///   re-derived here).
/// - `a`: `f64`
///   Shape parameter; must be strictly positive and finite.
/// - `b`: `f64`
///   Rate parameter; must be strictly positive and finite.
///
/// Returns
/// -------
/// `DensityResult<f64>`
///   `a·ln b − ln Γ(a) + (a − 1)·log_x − b·x` for `x > 0`; `−∞` for
///   `x ≤ 0` (zero density); an error for invalid parameters.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::density::gamma_log_density;
///
/// // Exponential(1) at x = 2: ln f = -2.
/// let x = 2.0_f64;
/// let ld = gamma_log_density(x, x.ln(), 1.0, 1.0).unwrap();
/// assert!((ld + 2.0).abs() < 1e-12);
/// ```
pub fn gamma_log_density(x: f64, log_x: f64, a: f64, b: f64) -> DensityResult<f64> {
    check_shape(a)?;
    check_rate(b)?;
    if x <= 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(a * b.ln() - ln_gamma(a) + (a - 1.0) * log_x - b * x)
}

/// Log-density of Inv-Gamma(shape `a`, scale `b`) at `x`, given `1/x` and
/// `ln x`.
///
/// Parameters
/// ----------
/// - `inv_x`: `f64`
///   Precomputed reciprocal `1/x` of the evaluation point.
/// - `log_x`: `f64`
///   Precomputed `ln x`; must be consistent with `inv_x`.
/// - `a`: `f64`
///   Shape parameter; must be strictly positive and finite.
/// - `b`: `f64`
///   Scale parameter; must be strictly positive and finite.
///
/// Returns
/// -------
/// `DensityResult<f64>`
///   `a·ln b − ln Γ(a) − (a + 1)·log_x − b·inv_x` for `x > 0` (i.e.,
///   `inv_x > 0`); `−∞` outside the support; an error for invalid
///   parameters.
///
/// Notes
/// -----
/// - Satisfies the change-of-variables identity
///   `ln f_IG(x) = ln f_G(1/x) − 2·ln x` against [`gamma_log_density`]
///   with rate `b`; exercised in tests.
pub fn inv_gamma_log_density(inv_x: f64, log_x: f64, a: f64, b: f64) -> DensityResult<f64> {
    check_shape(a)?;
    check_scale(b)?;
    if inv_x <= 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(a * b.ln() - ln_gamma(a) - (a + 1.0) * log_x - b * inv_x)
}

/// Draw one Gamma(shape `a`, rate `b`) variate from `rng`.
///
/// Parameters
/// ----------
/// - `a`: `f64`
///   Shape parameter; must be strictly positive and finite.
/// - `b`: `f64`
///   Rate parameter; must be strictly positive and finite.
/// - `rng`: `&mut R`
///   Caller-supplied random number generator; seeding it makes the draw
///   reproducible.
///
/// Returns
/// -------
/// `DensityResult<f64>`
///   A strictly positive, finite variate, or a parameter-domain error.
///
/// Panics
/// ------
/// - Never panics: parameters are validated before the distribution is
///   constructed.
pub fn gamma_draw<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> DensityResult<f64> {
    check_shape(a)?;
    check_rate(b)?;
    let dist = Gamma::new(a, b).expect("parameters validated above");
    Ok(dist.sample(rng))
}

/// Draw one Inv-Gamma(shape `a`, scale `b`) variate from `rng`.
///
/// The draw is the reciprocal of a Gamma(shape `a`, rate `b`) variate: if
/// `X ~ Gamma(a, rate = b)` then `1/X ~ Inv-Gamma(a, scale = b)`.
///
/// Parameters
/// ----------
/// - `a`: `f64`
///   Shape parameter; must be strictly positive and finite.
/// - `b`: `f64`
///   Scale parameter; must be strictly positive and finite.
/// - `rng`: `&mut R`
///   Caller-supplied random number generator.
///
/// Returns
/// -------
/// `DensityResult<f64>`
///   A strictly positive variate, or a parameter-domain error.
pub fn inv_gamma_draw<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> DensityResult<f64> {
    check_shape(a)?;
    check_scale(b)?;
    let dist = Gamma::new(a, b).expect("parameters validated above");
    Ok(1.0 / dist.sample(rng))
}
