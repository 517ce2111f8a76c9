// crates/semsig-sketch/src/pipeline.rs
//
// The signature pipeline entry point. Owns an injected embedder resource
// (constructed once at startup and shared read-only) and drives:
//
//   text -> embedder -> normalize -> tokenize -> {sketch} x N -> composite -> digest
//
// Every step past the embedder call is a pure, synchronous, CPU-bound
// computation; independent invocations share no mutable state.

use std::sync::Arc;

use semsig_core::{l2_normalize, SemsigError, TextEmbedder};

use crate::digest::{digest, format_digest};
use crate::ensemble::{ensemble_signature, sketch_signature};
use crate::params::SignatureParams;
use crate::similarity::cosine_similarity;
use crate::tokenize::tokenize;

/// The full signature of one text: the composite string and its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSignature {
    /// Ordered concatenation of the rendered ensemble sketches.
    pub composite: String,
    /// Stable 64-bit digest of the composite string.
    pub digest: u64,
    /// The digest rendered as `0x` + 16 lowercase hex digits.
    pub digest_hex: String,
}

/// Signature pipeline with an injected embedder.
#[derive(Clone)]
pub struct SignaturePipeline {
    embedder: Arc<dyn TextEmbedder>,
}

impl std::fmt::Debug for SignaturePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignaturePipeline")
            .field("dimensions", &self.embedder.dimensions())
            .finish()
    }
}

impl SignaturePipeline {
    /// Create a pipeline around a shared embedder instance.
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    /// Embedding dimensionality of the underlying model.
    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }

    /// Embed a text and L2-normalize the result, validating the embedder
    /// output (expected dimensionality, finite values) on the way.
    async fn embed_normalized(&self, text: &str) -> Result<Vec<f32>, SemsigError> {
        let mut vector = self.embedder.embed(text).await?;

        let expected = self.embedder.dimensions();
        if vector.len() != expected {
            return Err(SemsigError::Embedder(format!(
                "embedder returned {} dimensions, expected {}",
                vector.len(),
                expected
            )));
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(SemsigError::Embedder(
                "embedder returned non-finite values".to_string(),
            ));
        }

        l2_normalize(&mut vector);
        Ok(vector)
    }

    /// Generate the full ensemble signature and digest for a text.
    pub async fn generate(
        &self,
        text: &str,
        params: &SignatureParams,
    ) -> Result<TextSignature, SemsigError> {
        let strategy = params.strategy()?;
        let vector = self.embed_normalized(text).await?;
        let tokens = tokenize(&vector, &strategy);

        let composite = ensemble_signature(
            &tokens,
            params.num_perm,
            params.ensemble_size,
            params.base_seed,
        )?;
        let value = digest(&composite);

        tracing::debug!(
            num_perm = params.num_perm,
            ensemble_size = params.ensemble_size,
            digest = %format_digest(value),
            "generated signature"
        );

        Ok(TextSignature {
            composite,
            digest: value,
            digest_hex: format_digest(value),
        })
    }

    /// Generate a single rendered sketch for a text, using `base_seed`
    /// directly (no ensemble).
    pub async fn single(
        &self,
        text: &str,
        params: &SignatureParams,
    ) -> Result<String, SemsigError> {
        let strategy = params.strategy()?;
        let vector = self.embed_normalized(text).await?;
        let tokens = tokenize(&vector, &strategy);
        sketch_signature(&tokens, params.num_perm, params.base_seed)
    }

    /// Ground-truth similarity oracle: cosine similarity of the two texts'
    /// normalized embeddings against a threshold. Thresholds outside [-1, 1]
    /// are accepted and simply never/always match.
    pub async fn is_similar(
        &self,
        text1: &str,
        text2: &str,
        threshold: f64,
    ) -> Result<bool, SemsigError> {
        let a = self.embed_normalized(text1).await?;
        let b = self.embed_normalized(text2).await?;
        Ok(cosine_similarity(&a, &b) >= threshold)
    }
}
