// crates/semsig-core/src/embedding.rs

use async_trait::async_trait;

use crate::error::SemsigError;
use crate::traits::TextEmbedder;

/// Default embedding dimensionality (matches common sentence-embedding models).
pub const DEFAULT_DIMENSIONS: usize = 384;

/// L2-normalize a vector in place.
///
/// Divides every component by the Euclidean norm. A zero vector is left
/// unchanged (defined edge case, not an error).
pub fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Deterministic pseudo-embedding: hash text + dimension index to produce a
/// reproducible float vector, then L2-normalize. Identical text always yields
/// an identical vector (cosine similarity ~1.0). No ML model required.
pub fn hash_embedding(text: &str, dimensions: usize) -> Vec<f32> {
    use sha2::{Digest, Sha256};

    let mut raw = Vec::with_capacity(dimensions);
    for i in 0..dimensions {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hasher.update(i.to_le_bytes());
        let hash = hasher.finalize();
        // Interpret first 4 bytes as u32, map to [-1, 1]
        let bits = u32::from_le_bytes([hash[0], hash[1], hash[2], hash[3]]);
        let val = (bits as f64 / u32::MAX as f64) * 2.0 - 1.0;
        raw.push(val as f32);
    }

    l2_normalize(&mut raw);
    raw
}

/// Default embedder implementation backed by [`hash_embedding`].
///
/// Useful for development and testing where no model weights are available.
/// A production deployment substitutes a real model behind the same
/// [`TextEmbedder`] boundary.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    /// Create a hash embedder with the given output dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl TextEmbedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemsigError> {
        Ok(hash_embedding(text, self.dimensions))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_normalize_unit_norm() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_zero_vector_unchanged() {
        let mut v = vec![0.0, 0.0, 0.0];
        l2_normalize(&mut v);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_l2_normalize_idempotent() {
        let mut v = vec![0.1, -0.7, 0.3, 0.5];
        l2_normalize(&mut v);
        let once = v.clone();
        l2_normalize(&mut v);
        for (a, b) in once.iter().zip(v.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hash_embedding_deterministic() {
        let a = hash_embedding("i love ai", 64);
        let b = hash_embedding("i love ai", 64);
        assert_eq!(a, b);

        let c = hash_embedding("the stock market crashed", 64);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_embedding_normalized() {
        let v = hash_embedding("hello", 384);
        assert_eq!(v.len(), 384);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_hash_embedder_trait() {
        let embedder = HashEmbedder::new(128);
        assert_eq!(embedder.dimensions(), 128);
        let v = embedder.embed("test").await.unwrap();
        assert_eq!(v.len(), 128);
    }
}
