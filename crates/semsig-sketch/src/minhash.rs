// crates/semsig-sketch/src/minhash.rs
//
// MinHash sketching over token sets.
//
// Each permutation is a universal hash `h_i(x) = (a_i * base(x) + b_i) mod p`
// with `p = 2^61 - 1` and the `(a_i, b_i)` coefficient pairs drawn from a
// seeded pseudo-random generator, so a (num_perm, seed) pair fully determines
// the permutation family. The fraction of agreeing slots between two sketches
// built with the same family estimates the Jaccard similarity of the
// underlying token sets.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use semsig_core::SemsigError;

/// Largest Mersenne prime below 2^64; modulus of the permutation family.
const MERSENNE_PRIME: u64 = (1 << 61) - 1;

/// MinHash sketch builder for a fixed permutation family.
#[derive(Debug, Clone)]
pub struct MinHasher {
    num_perm: usize,
    /// One (a, b) coefficient pair per permutation slot.
    coefficients: Vec<(u64, u64)>,
}

impl MinHasher {
    /// Create a sketch builder with `num_perm` permutations derived from `seed`.
    ///
    /// Fails with `InvalidParameter` when `num_perm` is zero.
    pub fn new(num_perm: usize, seed: u64) -> Result<Self, SemsigError> {
        if num_perm == 0 {
            return Err(SemsigError::InvalidParameter(
                "num_perm must be a positive integer".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let coefficients = (0..num_perm)
            .map(|_| {
                (
                    rng.gen_range(1..MERSENNE_PRIME),
                    rng.gen_range(0..MERSENNE_PRIME),
                )
            })
            .collect();

        Ok(Self {
            num_perm,
            coefficients,
        })
    }

    /// Number of permutations (sketch width).
    pub fn num_perm(&self) -> usize {
        self.num_perm
    }

    /// Build the sketch of a token sequence.
    ///
    /// Maintains a running minimum per permutation slot over the unique
    /// tokens, so duplicates are idempotent and processing order does not
    /// affect the result. An empty token sequence leaves every slot at
    /// `u64::MAX`.
    pub fn sketch<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u64> {
        let mut minima = vec![u64::MAX; self.num_perm];

        let unique: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        for token in unique {
            let base = base_hash(token.as_bytes());
            for (slot, &(a, b)) in minima.iter_mut().zip(self.coefficients.iter()) {
                let h = ((a as u128 * base as u128 + b as u128)
                    % MERSENNE_PRIME as u128) as u64;
                if h < *slot {
                    *slot = h;
                }
            }
        }

        minima
    }
}

/// Stable base hash of a token's byte representation: the first 8 bytes of
/// its SHA-256 digest, little-endian.
fn base_hash(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    u64::from_le_bytes([
        digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
    ])
}

/// Estimate Jaccard similarity as the fraction of agreeing slots between two
/// sketches built with the same permutation family.
pub fn estimate_jaccard(a: &[u64], b: &[u64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sketch_width_invariant() {
        let hasher = MinHasher::new(64, 42).unwrap();
        assert_eq!(hasher.sketch(&["a", "b", "c"]).len(), 64);
        assert_eq!(hasher.sketch::<&str>(&[]).len(), 64);
    }

    #[test]
    fn test_zero_num_perm_rejected() {
        assert!(matches!(
            MinHasher::new(0, 42),
            Err(SemsigError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_tokens_retain_max() {
        let hasher = MinHasher::new(16, 7).unwrap();
        let sketch = hasher.sketch::<&str>(&[]);
        assert!(sketch.iter().all(|&v| v == u64::MAX));
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let a = MinHasher::new(32, 42).unwrap().sketch(&["x", "y", "z"]);
        let b = MinHasher::new(32, 42).unwrap().sketch(&["x", "y", "z"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_and_duplicates_irrelevant() {
        let hasher = MinHasher::new(32, 42).unwrap();
        let forward = hasher.sketch(&["a", "b", "c"]);
        let reversed = hasher.sketch(&["c", "b", "a"]);
        let duplicated = hasher.sketch(&["a", "a", "b", "c", "c", "c"]);
        assert_eq!(forward, reversed);
        assert_eq!(forward, duplicated);
    }

    #[test]
    fn test_seed_changes_sketch() {
        let tokens = ["a", "b", "c", "d"];
        let s1 = MinHasher::new(32, 42).unwrap().sketch(&tokens);
        let s2 = MinHasher::new(32, 43).unwrap().sketch(&tokens);
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_jaccard_estimate_tracks_overlap() {
        let hasher = MinHasher::new(256, 42).unwrap();

        let base: Vec<String> = (0..100).map(|i| format!("tok_{}", i)).collect();
        // 90 of 110 union members shared => true Jaccard ~0.82
        let mut near: Vec<String> = (10..100).map(|i| format!("tok_{}", i)).collect();
        near.extend((0..10).map(|i| format!("other_{}", i)));
        let far: Vec<String> = (0..100).map(|i| format!("elsewhere_{}", i)).collect();

        let sb = hasher.sketch(&base);
        let sn = hasher.sketch(&near);
        let sf = hasher.sketch(&far);

        let near_sim = estimate_jaccard(&sb, &sn);
        let far_sim = estimate_jaccard(&sb, &sf);
        assert!(near_sim > 0.6, "near estimate too low: {}", near_sim);
        assert!(far_sim < 0.1, "far estimate too high: {}", far_sim);
    }
}
