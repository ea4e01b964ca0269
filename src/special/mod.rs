//! special — gamma-family special functions with strict domain checking.
//!
//! Purpose
//! -------
//! Collect the special-function primitives used by the density and variance
//! layers: Γ / ln Γ, the digamma function ψ, and B / ln B. All three are
//! validated wrappers around `statrs` kernels with one shared domain
//! policy: arguments must be strictly positive and finite, and violations
//! are structured [`SpecialError`] values rather than NaNs.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use hiervar::special::{beta_func, digamma_func, gamma_func};
//!   ```
//!
//! - The variance layer uses ψ via `E[ln τ²] = ln b − ψ(a)`; the density
//!   layer assembles gamma log-densities from ln Γ terms.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`functions`] cover the recurrence and beta identities,
//!   known values, scale agreement, and every domain-error branch.

pub mod errors;
pub mod functions;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SpecialError, SpecialResult};
pub use self::functions::{beta_func, digamma_func, gamma_func};
