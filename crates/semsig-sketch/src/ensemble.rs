// crates/semsig-sketch/src/ensemble.rs
//
// Ensemble combination: run the sketch builder under several deterministically
// derived seeds over the same token set and join the rendered sketches into
// one composite signature string. Member order is part of the signature, so
// the composite is an ordered sequence, never a set.

use semsig_core::SemsigError;

use crate::minhash::MinHasher;

/// Fixed stride between ensemble member seeds.
const SEED_STRIDE: u64 = 101;

/// Separator between sketch values within one member.
const VALUE_SEPARATOR: &str = "-";

/// Separator between ensemble members.
pub const MEMBER_SEPARATOR: &str = "_";

/// Seed of ensemble member `index` (0-based).
pub fn member_seed(base_seed: u64, index: u32) -> u64 {
    base_seed.wrapping_add((index as u64).wrapping_mul(SEED_STRIDE))
}

/// Render a sketch as a `-`-joined sequence of decimal values.
fn render_sketch(values: &[u64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(VALUE_SEPARATOR)
}

/// Build and render a single sketch of the token set.
pub fn sketch_signature<S: AsRef<str>>(
    tokens: &[S],
    num_perm: usize,
    seed: u64,
) -> Result<String, SemsigError> {
    let hasher = MinHasher::new(num_perm, seed)?;
    Ok(render_sketch(&hasher.sketch(tokens)))
}

/// Build the composite ensemble signature of the token set.
///
/// Member `i` is sketched with `member_seed(base_seed, i)`; members are
/// joined with `_` in ensemble order. `ensemble_size == 0` yields an empty
/// string (defined edge case).
pub fn ensemble_signature<S: AsRef<str>>(
    tokens: &[S],
    num_perm: usize,
    ensemble_size: u32,
    base_seed: u64,
) -> Result<String, SemsigError> {
    let mut parts = Vec::with_capacity(ensemble_size as usize);
    for i in 0..ensemble_size {
        parts.push(sketch_signature(tokens, num_perm, member_seed(base_seed, i))?);
    }
    Ok(parts.join(MEMBER_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_seed_stride() {
        assert_eq!(member_seed(42, 0), 42);
        assert_eq!(member_seed(42, 1), 143);
        assert_eq!(member_seed(42, 9), 42 + 9 * 101);
    }

    #[test]
    fn test_segment_count_matches_ensemble_size() {
        let tokens = ["a", "b", "c"];
        let sig = ensemble_signature(&tokens, 8, 10, 42).unwrap();
        assert_eq!(sig.split(MEMBER_SEPARATOR).count(), 10);
    }

    #[test]
    fn test_empty_ensemble_yields_empty_string() {
        let tokens = ["a", "b"];
        let sig = ensemble_signature(&tokens, 8, 0, 42).unwrap();
        assert_eq!(sig, "");
    }

    #[test]
    fn test_each_segment_has_num_perm_values() {
        let tokens = ["a", "b", "c"];
        let sig = ensemble_signature(&tokens, 16, 3, 42).unwrap();
        for segment in sig.split(MEMBER_SEPARATOR) {
            assert_eq!(segment.split('-').count(), 16);
        }
    }

    #[test]
    fn test_deterministic() {
        let tokens = ["x", "y"];
        let a = ensemble_signature(&tokens, 8, 5, 42).unwrap();
        let b = ensemble_signature(&tokens, 8, 5, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_seed_changes_every_segment() {
        let tokens: Vec<String> = (0..50).map(|i| format!("tok_{}", i)).collect();
        let a = ensemble_signature(&tokens, 16, 10, 42).unwrap();
        let b = ensemble_signature(&tokens, 16, 10, 43).unwrap();

        for (sa, sb) in a
            .split(MEMBER_SEPARATOR)
            .zip(b.split(MEMBER_SEPARATOR))
        {
            assert_ne!(sa, sb);
        }
    }

    #[test]
    fn test_single_sketch_matches_first_member() {
        let tokens = ["a", "b", "c"];
        let single = sketch_signature(&tokens, 8, 42).unwrap();
        let ensemble = ensemble_signature(&tokens, 8, 3, 42).unwrap();
        assert_eq!(ensemble.split(MEMBER_SEPARATOR).next().unwrap(), single);
    }

    #[test]
    fn test_invalid_num_perm_propagates() {
        let tokens = ["a"];
        assert!(ensemble_signature(&tokens, 0, 3, 42).is_err());
    }
}
