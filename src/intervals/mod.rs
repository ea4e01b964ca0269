//! intervals — posterior credible-interval construction.
//!
//! Purpose
//! -------
//! House the HPD-style interval builder used to summarize posterior
//! uncertainty: per-parameter `[lower, upper]` bounds from posterior means,
//! standard deviations, and a quantile multiplier, under a near-Gaussian
//! posterior assumption.
//!
//! Downstream usage
//! ----------------
//! - Typical import:
//!
//!   ```rust
//!   use hiervar::intervals::hpd_intervals;
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`hpdi`] cover the canonical 1.96 case, row
//!   independence, degenerate intervals, and all validation branches.

pub mod errors;
pub mod hpdi;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{HpdiError, HpdiResult};
pub use self::hpdi::hpd_intervals;
