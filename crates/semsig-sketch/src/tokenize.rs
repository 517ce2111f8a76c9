// crates/semsig-sketch/src/tokenize.rs
//
// Discretization of a continuous embedding vector into string tokens.
//
// Two interchangeable strategies: rounding (format each component with a
// fixed number of decimal places) and binning (floor each component into a
// fixed-width bin). Nearby components collapse to the same token, which is
// what makes the downstream MinHash token sets overlap for similar vectors.

use semsig_core::SemsigError;

/// Resolved tokenization strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenStrategy {
    /// Round each component to `decimal_places` fractional digits.
    Rounding { decimal_places: u32 },
    /// Floor each component into bins of width `bin_size`.
    Binning { bin_size: f64 },
}

impl TokenStrategy {
    /// Resolve the wire-level `(use_binning, round_digits_or_bin_size)` pair
    /// into a validated strategy.
    ///
    /// The shared wire parameter carries a float; when rounding, its integer
    /// part is taken as the decimal-place count after the sign check, so the
    /// contractual default of `0.01` resolves to zero decimal places. A
    /// negative or non-finite value is rejected either way.
    pub fn resolve(use_binning: bool, param: f64) -> Result<Self, SemsigError> {
        if !param.is_finite() {
            return Err(SemsigError::InvalidParameter(format!(
                "round_digits_or_bin_size must be finite, got {}",
                param
            )));
        }
        if use_binning {
            if param <= 0.0 {
                return Err(SemsigError::InvalidParameter(format!(
                    "bin_size must be strictly positive, got {}",
                    param
                )));
            }
            Ok(TokenStrategy::Binning { bin_size: param })
        } else {
            if param < 0.0 {
                return Err(SemsigError::InvalidParameter(format!(
                    "decimal places must be non-negative, got {}",
                    param
                )));
            }
            Ok(TokenStrategy::Rounding {
                decimal_places: param.trunc() as u32,
            })
        }
    }
}

/// Convert a vector into an ordered token sequence under the given strategy.
///
/// Output length equals input length; component order is preserved.
/// Deterministic for fixed inputs.
pub fn tokenize(vector: &[f32], strategy: &TokenStrategy) -> Vec<String> {
    match strategy {
        TokenStrategy::Rounding { decimal_places } => vector
            .iter()
            .map(|v| format!("{:.*}", *decimal_places as usize, v))
            .collect(),
        TokenStrategy::Binning { bin_size } => vector
            .iter()
            .map(|v| {
                // floor (toward negative infinity), computed in f64
                let bin = (*v as f64 / bin_size).floor() as i64;
                format!("bin_{}", bin)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_two_places() {
        let strategy = TokenStrategy::resolve(false, 2.0).unwrap();
        let tokens = tokenize(&[0.123, -0.456], &strategy);
        assert_eq!(tokens, vec!["0.12", "-0.46"]);
    }

    #[test]
    fn test_rounding_collapses_nearby_values() {
        let strategy = TokenStrategy::resolve(false, 2.0).unwrap();
        let tokens = tokenize(&[0.1204, 0.1195], &strategy);
        assert_eq!(tokens[0], tokens[1]);
    }

    #[test]
    fn test_binning_floor_semantics() {
        let strategy = TokenStrategy::resolve(true, 0.01).unwrap();
        let tokens = tokenize(&[0.0, 0.015, -0.02], &strategy);
        assert_eq!(tokens, vec!["bin_0", "bin_1", "bin_-2"]);
    }

    #[test]
    fn test_token_count_matches_vector_length() {
        let strategy = TokenStrategy::resolve(true, 0.1).unwrap();
        let v = vec![0.5; 384];
        assert_eq!(tokenize(&v, &strategy).len(), 384);
    }

    #[test]
    fn test_default_wire_param_resolves_to_zero_places() {
        let strategy = TokenStrategy::resolve(false, 0.01).unwrap();
        assert_eq!(strategy, TokenStrategy::Rounding { decimal_places: 0 });
    }

    #[test]
    fn test_zero_bin_size_rejected() {
        assert!(TokenStrategy::resolve(true, 0.0).is_err());
        assert!(TokenStrategy::resolve(true, -0.01).is_err());
    }

    #[test]
    fn test_non_finite_param_rejected() {
        assert!(TokenStrategy::resolve(false, f64::NAN).is_err());
        assert!(TokenStrategy::resolve(true, f64::INFINITY).is_err());
    }
}
