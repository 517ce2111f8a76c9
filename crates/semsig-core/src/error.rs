use thiserror::Error;

/// Workspace-wide error types for the semsig service.
#[derive(Debug, Error)]
pub enum SemsigError {
    /// Invalid pipeline parameter (non-positive num_perm, bad bin size, etc.).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The external embedder failed or returned a malformed vector.
    #[error("Embedder error: {0}")]
    Embedder(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SemsigError {
    fn from(e: serde_json::Error) -> Self {
        SemsigError::Serialization(e.to_string())
    }
}
