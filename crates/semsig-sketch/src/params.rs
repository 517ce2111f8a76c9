// crates/semsig-sketch/src/params.rs
//
// Wire-level pipeline parameters and their validation.

use serde::{Deserialize, Serialize};

use semsig_core::SemsigError;

use crate::tokenize::TokenStrategy;

/// Parameters controlling one signature-generation run.
///
/// The serde defaults are the contractual defaults the transport layer must
/// honor when fields are omitted from a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureParams {
    /// Number of hash permutations per sketch.
    #[serde(default = "default_num_perm")]
    pub num_perm: usize,

    /// Number of independently seeded sketches in the ensemble.
    #[serde(default = "default_ensemble_size")]
    pub ensemble_size: u32,

    /// Tokenization strategy: binning when true, rounding otherwise.
    #[serde(default)]
    pub use_binning: bool,

    /// Bin size (binning) or decimal places (rounding), depending on
    /// `use_binning`. The field is shared on the wire for compatibility
    /// with existing clients.
    #[serde(default = "default_round_digits_or_bin_size")]
    pub round_digits_or_bin_size: f64,

    /// Base seed; ensemble member `i` derives its own seed from this.
    #[serde(default = "default_base_seed")]
    pub base_seed: u64,
}

fn default_num_perm() -> usize {
    512
}

fn default_ensemble_size() -> u32 {
    10
}

fn default_round_digits_or_bin_size() -> f64 {
    0.01
}

fn default_base_seed() -> u64 {
    42
}

impl Default for SignatureParams {
    fn default() -> Self {
        Self {
            num_perm: default_num_perm(),
            ensemble_size: default_ensemble_size(),
            use_binning: false,
            round_digits_or_bin_size: default_round_digits_or_bin_size(),
            base_seed: default_base_seed(),
        }
    }
}

impl SignatureParams {
    /// Validate the parameter set and resolve the tokenization strategy.
    ///
    /// Rejects out-of-range configuration explicitly instead of silently
    /// coercing it: `num_perm` must be positive, `bin_size` must be a
    /// strictly positive finite value when binning, and the rounding
    /// parameter must be a non-negative finite value when rounding.
    pub fn strategy(&self) -> Result<TokenStrategy, SemsigError> {
        if self.num_perm == 0 {
            return Err(SemsigError::InvalidParameter(
                "num_perm must be a positive integer".to_string(),
            ));
        }
        TokenStrategy::resolve(self.use_binning, self.round_digits_or_bin_size)
    }
}
