//! variance — variance-component builders for hierarchical models.
//!
//! Purpose
//! -------
//! Implement the structural layer of a hierarchical variance model: the
//! closed set of supported prior families, the validated
//! global/per-group layout, and the two matrix builders a Gibbs-style
//! sweep calls in sequence — the conditional-rate (mixing weight) matrix
//! and the expected log-variance matrix derived from it.
//!
//! Key behaviors
//! -------------
//! - [`VariancePrior`] parses the configuration spellings of the supported
//!   families and makes every other name an explicit
//!   `UnsupportedPriorFamily` error at the string boundary.
//! - [`VarianceStructure`] validates `J`, `D`, `JD` once and then drives
//!   both builders, so `fMat`-style rates and `logvarMat`-style
//!   log-variances always branch identically on the prior family and the
//!   global flag.
//! - [`VarianceStructure::mixing_weights`] produces the conditional rates;
//!   [`VarianceStructure::log_variances`] converts them (plus current
//!   precisions, under half-Cauchy) into `E[ln τ²]` entries.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both builders are deterministic: repeated calls on identical inputs
//!   produce identical matrices; all randomness in a surrounding sampler
//!   lives in the `density` layer.
//! - Squared-loading and precision matrices are `J×D`; hyperparameter
//!   vectors are length `D`; the pooled rate matrix has one row under the
//!   global structure and `J` rows otherwise.
//!
//! Conventions
//! -----------
//! - Errors are reported via [`VarResult`] with the taxonomy in
//!   [`errors`]: unsupported family, layout inconsistency, shape/length
//!   mismatch, and invalid entries.
//! - Shared input guards live in [`validation`] so the two builders accept
//!   exactly the same inputs.
//!
//! Downstream usage
//! ----------------
//! - Typical sweep:
//!
//!   ```rust
//!   use hiervar::variance::{VariancePrior, VarianceStructure};
//!   use ndarray::{array, Array2};
//!
//!   let s = VarianceStructure::new(false, VariancePrior::InverseGamma, 2, 1, 2).unwrap();
//!   let w2 = array![[4.0], [6.0]];
//!   let betatau = array![1.0];
//!   let alphatau = array![2.0];
//!
//!   let f = s.mixing_weights(w2.view(), betatau.view(), alphatau.view()).unwrap();
//!   let tau = Array2::<f64>::zeros((2, 1));
//!   let logvar = s.log_variances(f.view(), tau.view(), alphatau.view()).unwrap();
//!   assert_eq!(logvar.dim(), (2, 1));
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests cover the parsing surface ([`prior`]), layout validation
//!   and branch quantities ([`structure`]), builder arithmetic under every
//!   family/structure combination ([`mixing`], [`logvar`]), and the shared
//!   guards ([`validation`]); the cross-module pipeline is exercised in
//!   `tests/integration_variance_pipeline.rs`.

pub mod errors;
pub mod logvar;
pub mod mixing;
pub mod prior;
pub mod structure;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{VarError, VarResult};
pub use self::prior::VariancePrior;
pub use self::structure::VarianceStructure;
