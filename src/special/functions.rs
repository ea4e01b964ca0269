//! special::functions — gamma, digamma, and beta special functions.
//!
//! Purpose
//! -------
//! Provide validated wrappers around `statrs`'s special-function kernels
//! with the domain policy used throughout this crate: arguments must be
//! strictly positive and finite, and violations surface as
//! [`SpecialError`] values instead of NaNs. The gamma and beta functions
//! are selectable between natural and log scale, since downstream variance
//! updates work almost exclusively with log quantities.
//!
//! Key behaviors
//! -------------
//! - [`gamma_func`] evaluates Γ(x) or ln Γ(x) depending on `log_scale`.
//! - [`digamma_func`] evaluates ψ(x) = d/dx ln Γ(x).
//! - [`beta_func`] evaluates B(a, b) or ln B(a, b); the log form is
//!   computed directly from log-gamma terms and never exponentiates
//!   intermediate values.
//!
//! Conventions
//! -----------
//! - Accuracy is inherited from `statrs` (relative error well below 1e-12
//!   across the well-conditioned range).
//! - Errors are reported via [`SpecialResult<T>`]; no function here panics.
use crate::special::errors::{SpecialError, SpecialResult};
use statrs::function::{beta, gamma};

/// Reject non-finite or non-positive special-function arguments.
fn check_positive(name: &'static str, value: f64) -> SpecialResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpecialError::NonPositiveArgument { name, value });
    }
    Ok(())
}

/// Evaluate the gamma function Γ(x), optionally on the log scale.
///
/// Parameters
/// ----------
/// - `x`: `f64`
///   Evaluation point; must be strictly positive and finite.
/// - `log_scale`: `bool`
///   When `true`, return ln Γ(x); otherwise return Γ(x).
///
/// Returns
/// -------
/// `SpecialResult<f64>`
///   The requested value, or `SpecialError::NonPositiveArgument` when the
///   domain constraint is violated.
///
/// Notes
/// -----
/// - For large `x` the natural-scale value overflows to `+∞` around
///   `x ≈ 171.6`; callers working with large shapes should prefer the log
///   scale, which stays finite.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::special::gamma_func;
///
/// assert!((gamma_func(5.0, false).unwrap() - 24.0).abs() < 1e-10);
/// assert!((gamma_func(5.0, true).unwrap() - 24.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn gamma_func(x: f64, log_scale: bool) -> SpecialResult<f64> {
    check_positive("x", x)?;
    if log_scale { Ok(gamma::ln_gamma(x)) } else { Ok(gamma::gamma(x)) }
}

/// Evaluate the digamma function ψ(x), the derivative of ln Γ(x).
///
/// Parameters
/// ----------
/// - `x`: `f64`
///   Evaluation point; must be strictly positive and finite.
///
/// Returns
/// -------
/// `SpecialResult<f64>`
///   ψ(x), or `SpecialError::NonPositiveArgument` for out-of-domain input.
///
/// Examples
/// --------
/// ```rust
/// use hiervar::special::digamma_func;
///
/// // ψ(1) = -γ (Euler–Mascheroni constant).
/// let psi1 = digamma_func(1.0).unwrap();
/// assert!((psi1 + 0.577_215_664_901_532_9).abs() < 1e-10);
/// ```
pub fn digamma_func(x: f64) -> SpecialResult<f64> {
    check_positive("x", x)?;
    Ok(gamma::digamma(x))
}

/// Evaluate the beta function B(a, b), optionally on the log scale.
///
/// Parameters
/// ----------
/// - `a`: `f64`
///   First shape argument; must be strictly positive and finite.
/// - `b`: `f64`
///   Second shape argument; must be strictly positive and finite.
/// - `log_scale`: `bool`
///   When `true`, return ln B(a, b); otherwise return B(a, b).
///
/// Returns
/// -------
/// `SpecialResult<f64>`
///   The requested value, or `SpecialError::NonPositiveArgument` naming
///   whichever argument violated the domain.
///
/// Notes
/// -----
/// - The log form satisfies ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a + b)
///   exactly (to floating point); the identity is exercised in tests.
pub fn beta_func(a: f64, b: f64, log_scale: bool) -> SpecialResult<f64> {
    check_positive("a", a)?;
    check_positive("b", b)?;
    if log_scale { Ok(beta::ln_beta(a, b)) } else { Ok(beta::beta(a, b)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Classical identities (recurrence, beta-from-gamma) on the log scale.
    // - Known values on the natural scale.
    // - Domain-error branches for every entry point.
    //
    // They intentionally DO NOT cover:
    // - Extreme-argument asymptotics, which are the responsibility of the
    //   underlying statrs kernels.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the gamma recurrence Γ(x + 1) = x · Γ(x) on the log scale.
    //
    // Given
    // -----
    // - A spread of x values covering small and moderate arguments.
    //
    // Expect
    // ------
    // - ln Γ(x + 1) − ln Γ(x) − ln x vanishes within 1e-12.
    fn gamma_func_satisfies_log_recurrence() {
        // Arrange
        let xs = [0.5, 1.0, 2.5, 7.0, 40.0];

        for &x in &xs {
            // Act
            let lhs = gamma_func(x + 1.0, true).unwrap();
            let rhs = gamma_func(x, true).unwrap() + x.ln();

            // Assert
            assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a known natural-scale value and agreement between the two
    // scales.
    //
    // Given
    // -----
    // - x = 5, where Γ(5) = 4! = 24.
    //
    // Expect
    // ------
    // - Natural scale returns 24; exp(log scale) matches within tolerance.
    fn gamma_func_scales_agree_at_known_value() {
        // Arrange
        let x = 5.0;

        // Act
        let natural = gamma_func(x, false).unwrap();
        let logged = gamma_func(x, true).unwrap();

        // Assert
        assert_abs_diff_eq!(natural, 24.0, epsilon = 1e-10);
        assert_abs_diff_eq!(logged.exp(), natural, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify ψ(1) = −γ and the digamma recurrence ψ(x + 1) = ψ(x) + 1/x.
    //
    // Given
    // -----
    // - x = 1 and x = 3.25.
    //
    // Expect
    // ------
    // - Both identities hold within 1e-10.
    fn digamma_func_matches_known_value_and_recurrence() {
        // Arrange
        const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
        let x = 3.25;

        // Act
        let psi1 = digamma_func(1.0).unwrap();
        let lhs = digamma_func(x + 1.0).unwrap();
        let rhs = digamma_func(x).unwrap() + 1.0 / x;

        // Assert
        assert_abs_diff_eq!(psi1, -EULER_GAMMA, epsilon = 1e-10);
        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a + b).
    //
    // Given
    // -----
    // - A handful of (a, b) pairs with unequal shapes.
    //
    // Expect
    // ------
    // - The identity holds within 1e-12.
    fn beta_func_matches_gamma_identity_on_log_scale() {
        // Arrange
        let pairs = [(0.5, 0.5), (2.0, 3.0), (10.0, 0.25)];

        for &(a, b) in &pairs {
            // Act
            let lhs = beta_func(a, b, true).unwrap();
            let rhs = gamma_func(a, true).unwrap() + gamma_func(b, true).unwrap()
                - gamma_func(a + b, true).unwrap();

            // Assert
            assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that each entry point rejects out-of-domain arguments with the
    // offending name.
    //
    // Given
    // -----
    // - Zero, negative, and NaN arguments.
    //
    // Expect
    // ------
    // - `NonPositiveArgument` naming the violated parameter in each case.
    fn special_functions_reject_out_of_domain_arguments() {
        // Act / Assert
        match gamma_func(0.0, true) {
            Err(SpecialError::NonPositiveArgument { name: "x", .. }) => (),
            other => panic!("expected domain error for x = 0, got {other:?}"),
        }
        match digamma_func(-1.0) {
            Err(SpecialError::NonPositiveArgument { name: "x", .. }) => (),
            other => panic!("expected domain error for x = -1, got {other:?}"),
        }
        match beta_func(2.0, f64::NAN, false) {
            Err(SpecialError::NonPositiveArgument { name: "b", .. }) => (),
            other => panic!("expected domain error for b = NaN, got {other:?}"),
        }
    }
}
