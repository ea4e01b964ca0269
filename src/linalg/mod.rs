//! linalg — dense linear-algebra primitives on `ndarray` containers.
//!
//! Purpose
//! -------
//! Collect the linear-algebra building blocks used by hierarchical variance
//! models: a validated truncated SVD wrapper and the cross-product
//! sufficient statistic `XᵀX` with its trace. Public inputs and outputs are
//! `ndarray` containers; dense decompositions are delegated to `nalgebra`
//! through an explicit copy bridge.
//!
//! Key behaviors
//! -------------
//! - [`truncated_svd`] computes `M = U · diag(D) · Vᵀ`, returning the
//!   leading `nu`/`nv` singular vectors and the full value vector as an
//!   owned [`SvdParts`].
//! - [`cross_product`] computes `XᵀX` and `tr(XᵀX)` together as a
//!   [`CrossProduct`].
//! - All entry points validate shapes and finiteness before any numerical
//!   work and report failures via [`LinAlgResult`]; nothing in this subtree
//!   panics on user-facing invalid input.
//!
//! Conventions
//! -----------
//! - Results are returned as owned structs rather than written through
//!   output parameters; the caller owns every container a call produces.
//! - The `ndarray → nalgebra` bridge copies column-major, matching
//!   `DMatrix` storage.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use hiervar::linalg::{cross_product, truncated_svd};
//!   ```
//!
//! - Variance-model layers consume [`CrossProduct`] when assembling squared
//!   design statistics, and [`SvdParts`] for low-rank projections of design
//!   matrices.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`svd`] cover full-rank reconstruction, value ordering,
//!   truncation, and every validation branch; [`crossprod`] tests check the
//!   trace identity and symmetry.

pub mod bridge;
pub mod crossprod;
pub mod errors;
pub mod svd;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::crossprod::{CrossProduct, cross_product};
pub use self::errors::{LinAlgError, LinAlgResult};
pub use self::svd::{SvdParts, truncated_svd};
