// crates/semsig-rpc/src/handlers/node.rs
//
// Node info and health handlers: GetNodeInfo, GetHealth.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GetHealth
// ---------------------------------------------------------------------------

/// Request for service health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHealthRequest {}

/// Response containing service health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHealthResponse {
    /// Overall health: "healthy" while the process is serving.
    pub status: String,
    /// Whether the embedder resource is loaded.
    pub embedder_ok: bool,
    /// Embedding dimensionality of the loaded embedder.
    pub dimensions: usize,
}

/// Handle a GetHealth request.
///
/// The pipeline is pure and stateless, so a serving process is healthy by
/// construction; the response reports the loaded embedder's dimensionality.
pub async fn handle_get_health(
    _request: GetHealthRequest,
    dimensions: usize,
) -> Result<GetHealthResponse, String> {
    Ok(GetHealthResponse {
        status: "healthy".to_string(),
        embedder_ok: true,
        dimensions,
    })
}

// ---------------------------------------------------------------------------
// GetNodeInfo
// ---------------------------------------------------------------------------

/// Request for service information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNodeInfoRequest {}

/// Response containing service information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNodeInfoResponse {
    /// Software version.
    pub version: String,
    /// Embedding dimensionality of the loaded embedder.
    pub dimensions: usize,
    /// Capabilities list.
    pub capabilities: Vec<String>,
}

/// Handle a GetNodeInfo request.
pub async fn handle_get_node_info(
    _request: GetNodeInfoRequest,
    dimensions: usize,
) -> Result<GetNodeInfoResponse, String> {
    Ok(GetNodeInfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        dimensions,
        capabilities: vec![
            "signature-generate".to_string(),
            "signature-sketch".to_string(),
            "similarity-check".to_string(),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let resp = handle_get_health(GetHealthRequest {}, 384).await.unwrap();
        assert_eq!(resp.status, "healthy");
        assert!(resp.embedder_ok);
        assert_eq!(resp.dimensions, 384);
    }

    #[tokio::test]
    async fn test_node_info_capabilities() {
        let resp = handle_get_node_info(GetNodeInfoRequest {}, 384)
            .await
            .unwrap();
        assert!(resp
            .capabilities
            .contains(&"signature-generate".to_string()));
    }
}
