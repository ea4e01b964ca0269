//! variance::prior — closed set of supported variance-prior families.
//!
//! Purpose
//! -------
//! Replace the free-form prior-family string of classical model code with
//! a closed enum, so that the unsupported-configuration error class exists
//! only at the string boundary (parsing) and is impossible once a
//! [`VariancePrior`] value is in hand.
//!
//! Key behaviors
//! -------------
//! - Enumerate the supported families: conjugate inverse-gamma and
//!   parameter-expanded half-Cauchy.
//! - Parse the string spellings used by model configuration
//!   ("invgamma"/"inverse-gamma", "halfcauchy"/"half-cauchy"),
//!   case-insensitively, into the enum; anything else is
//!   [`VarError::UnsupportedPriorFamily`].
use crate::variance::errors::VarError;
use std::str::FromStr;

/// VariancePrior — prior family governing a variance parameter.
///
/// Variants
/// --------
/// - `InverseGamma`
///   Conjugate Inv-Gamma(α_d, β_d) prior on each variance; conditional
///   updates stay in closed form with shape `α_d + p/2` and rate
///   `β_d + ½·Σ w²`.
/// - `HalfCauchy`
///   Half-Cauchy prior on each standard deviation, handled through the
///   inverse-gamma parameter expansion: the auxiliary inverse-scales take
///   the place of the prior rate, and the conditional shape is `(1 + p)/2`.
///
/// Notes
/// -----
/// - `p` above is the pooling count: 1 for per-group variances, `J` when a
///   single variance is shared across groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariancePrior {
    InverseGamma,
    HalfCauchy,
}

impl VariancePrior {
    /// Canonical configuration spelling of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariancePrior::InverseGamma => "invgamma",
            VariancePrior::HalfCauchy => "halfcauchy",
        }
    }
}

impl FromStr for VariancePrior {
    type Err = VarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "invgamma" | "inverse-gamma" | "inversegamma" => Ok(VariancePrior::InverseGamma),
            "halfcauchy" | "half-cauchy" => Ok(VariancePrior::HalfCauchy),
            _ => Err(VarError::UnsupportedPriorFamily(s.to_string())),
        }
    }
}

impl std::fmt::Display for VariancePrior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
