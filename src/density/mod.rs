//! density — gamma-family log-densities and variate generators.
//!
//! Purpose
//! -------
//! Provide the density/draw quartet a hierarchical variance sampler calls
//! inside its sweeps: gamma and inverse-gamma log-densities that accept
//! caller-precomputed logs, plus the matching strictly positive variate
//! generators driven by an explicit `rand::Rng`.
//!
//! Conventions
//! -----------
//! - Densities are always returned on the log scale.
//! - Out-of-support evaluation points are `−∞`; only parameter-domain
//!   violations are errors ([`DensityError`]).
//! - Draws are reproducible exactly when the caller seeds the supplied RNG.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use hiervar::density::{gamma_draw, gamma_log_density, inv_gamma_draw, inv_gamma_log_density};
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`gamma`] check the statrs reference pdf, the
//!   change-of-variables identity between the two densities, support and
//!   domain handling, seed determinism, and sample-mean sanity.

pub mod errors;
pub mod gamma;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{DensityError, DensityResult};
pub use self::gamma::{gamma_draw, gamma_log_density, inv_gamma_draw, inv_gamma_log_density};
