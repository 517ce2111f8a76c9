// crates/semsig-core/src/traits.rs

use async_trait::async_trait;

use crate::error::SemsigError;

/// Trait for the external text-embedding model.
///
/// Implementations are expected to be deterministic for a given text and
/// model version, and safe to call concurrently. The embedder instance is
/// constructed once at startup and shared read-only behind an `Arc`; it is
/// the single potentially slow step the signature pipeline depends on.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embed a text into a fixed-length float vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemsigError>;

    /// Output dimensionality of this embedder.
    fn dimensions(&self) -> usize;
}
