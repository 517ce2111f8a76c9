// crates/semsig-rpc/src/handlers/similarity.rs
//
// Similarity oracle handler: cosine similarity of two texts' embeddings
// against a threshold.

use serde::{Deserialize, Serialize};

use semsig_sketch::SignaturePipeline;

/// Request to compare two texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSimilarityRequest {
    /// First text.
    pub text1: String,
    /// Second text.
    pub text2: String,
    /// Cosine-similarity threshold; values outside [-1, 1] are accepted
    /// and simply never/always match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.7
}

/// Response with the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSimilarityResponse {
    /// Whether cosine similarity met the threshold.
    pub similar: bool,
    /// The threshold that was applied.
    pub threshold: f64,
}

/// Handle a CheckSimilarity request.
pub async fn handle_check_similarity(
    pipeline: &SignaturePipeline,
    request: CheckSimilarityRequest,
) -> Result<CheckSimilarityResponse, String> {
    let similar = pipeline
        .is_similar(&request.text1, &request.text2, request.threshold)
        .await
        .map_err(|e| e.to_string())?;

    Ok(CheckSimilarityResponse {
        similar,
        threshold: request.threshold,
    })
}
