// crates/semsig-rpc/src/server.rs
//
// RPC server setup: SemsigRpcServer and RpcConfig.
//
// Uses a JSON-RPC-over-gRPC approach: a single tonic unary service accepts
// JSON-encoded requests with a method field, dispatches to the appropriate
// handler, and returns JSON-encoded responses.
//
// This avoids the need for proto codegen while still using tonic's server
// infrastructure for transport, streaming, and middleware.

use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tonic::transport::Server;
use tonic::Status;

use semsig_sketch::SignaturePipeline;

use crate::handlers;
use crate::middleware;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
/// The client sends a method name and a JSON params payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "signature/generate").
    pub method: String,
    /// JSON-encoded parameters for the method.
    pub params: serde_json::Value,
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// Error message (if not success).
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// SemsigRpcServer
// ---------------------------------------------------------------------------

/// The main RPC server for the semsig service.
///
/// Holds the signature pipeline (which owns the shared embedder resource)
/// and exposes a tonic-based server with JSON-RPC dispatching.
#[derive(Clone)]
pub struct SemsigRpcServer {
    /// Server configuration.
    config: RpcConfig,
    /// The signature pipeline with its injected embedder.
    pipeline: SignaturePipeline,
}

impl std::fmt::Debug for SemsigRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemsigRpcServer")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

impl SemsigRpcServer {
    /// Create a new SemsigRpcServer.
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port).
    /// * `pipeline` - Signature pipeline wrapping the shared embedder.
    pub fn new(config: RpcConfig, pipeline: SignaturePipeline) -> Self {
        Self { config, pipeline }
    }

    /// Start the RPC server and listen for requests.
    ///
    /// This binds to the configured address and serves requests until
    /// the process is terminated.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        tracing::info!("semsig RPC server starting on {}", addr);

        let service = SemsigServiceImpl {
            pipeline: self.pipeline.clone(),
        };

        Server::builder()
            .accept_http1(true)
            .add_service(tonic::service::interceptor::InterceptedService::new(
                SemsigJsonRpcServer::new(service),
                middleware::logging_interceptor,
            ))
            .serve(addr)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// gRPC Service Definition (manual, no proto codegen)
// ---------------------------------------------------------------------------

/// The internal service implementation that holds the pipeline and
/// dispatches JSON-RPC calls to the appropriate handler.
#[derive(Clone)]
struct SemsigServiceImpl {
    pipeline: SignaturePipeline,
}

impl SemsigServiceImpl {
    /// Dispatch a JSON-RPC request to the appropriate handler based on the method name.
    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let result = match request.method.as_str() {
            // Signature generation
            "signature/generate" => {
                let pipeline = self.pipeline.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::signature::handle_generate_signature(&pipeline, r).await
                })
                .await
            }
            "signature/sketch" => {
                let pipeline = self.pipeline.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::signature::handle_sketch_signature(&pipeline, r).await
                })
                .await
            }

            // Similarity oracle
            "similarity/check" => {
                let pipeline = self.pipeline.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::similarity::handle_check_similarity(&pipeline, r).await
                })
                .await
            }

            // Node
            "node/health" => {
                let dimensions = self.pipeline.dimensions();
                dispatch_handler(request.params, |r| async move {
                    handlers::node::handle_get_health(r, dimensions).await
                })
                .await
            }
            "node/info" => {
                let dimensions = self.pipeline.dimensions();
                dispatch_handler(request.params, |r| async move {
                    handlers::node::handle_get_node_info(r, dimensions).await
                })
                .await
            }

            _ => Err(format!("Unknown method: {}", request.method)),
        };

        match result {
            Ok(value) => JsonRpcResponse {
                success: true,
                result: Some(value),
                error: None,
            },
            Err(err) => JsonRpcResponse {
                success: false,
                result: None,
                error: Some(err),
            },
        }
    }
}

/// Generic dispatch helper: deserialize params into a request type,
/// call the handler, and serialize the result to JSON.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, String>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: std::future::Future<Output = Result<Resp, String>>,
{
    let request: Req = serde_json::from_value(params)
        .map_err(|e| format!("Failed to deserialize request: {}", e))?;
    let response = handler(request).await?;
    serde_json::to_value(response).map_err(|e| format!("Failed to serialize response: {}", e))
}

// ---------------------------------------------------------------------------
// Tonic Service Wiring
// ---------------------------------------------------------------------------
// We define a single service with one method: `Call`. The request and
// response are raw bytes (JSON-encoded JsonRpcRequest/Response). This is
// the pattern for defining tonic services without proto codegen.

/// The tonic service wrapper. Implements the low-level service by accepting
/// bytes, deserializing as JSON-RPC, and dispatching.
#[derive(Clone)]
pub struct SemsigJsonRpcServer {
    inner: SemsigServiceImpl,
}

impl std::fmt::Debug for SemsigJsonRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemsigJsonRpcServer").finish()
    }
}

impl SemsigJsonRpcServer {
    fn new(inner: SemsigServiceImpl) -> Self {
        Self { inner }
    }
}

impl tonic::server::NamedService for SemsigJsonRpcServer {
    const NAME: &'static str = "semsig.rpc.SemsigService";
}

impl<B> tower_service::Service<http::Request<B>> for SemsigJsonRpcServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    B::Data: Send,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            // Read the full request body.
            let body = req.into_body();
            let body_bytes = match collect_body(body).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!("Failed to read request body: {}", e);
                    let resp = JsonRpcResponse {
                        success: false,
                        result: None,
                        error: Some(format!("Failed to read request body: {}", e)),
                    };
                    let json = serde_json::to_vec(&resp).unwrap_or_default();
                    return Ok(build_response(json));
                }
            };

            // Deserialize the JSON-RPC request.
            let rpc_request: JsonRpcRequest = match serde_json::from_slice(&body_bytes) {
                Ok(r) => r,
                Err(e) => {
                    let resp = JsonRpcResponse {
                        success: false,
                        result: None,
                        error: Some(format!("Invalid JSON-RPC request: {}", e)),
                    };
                    let json = serde_json::to_vec(&resp).unwrap_or_default();
                    return Ok(build_response(json));
                }
            };

            // Dispatch to the appropriate handler.
            let rpc_response = inner.dispatch(rpc_request).await;
            let json = serde_json::to_vec(&rpc_response).unwrap_or_default();
            Ok(build_response(json))
        })
    }
}

/// Collect the body of an HTTP request into bytes.
async fn collect_body<B>(body: B) -> Result<Vec<u8>, String>
where
    B: HttpBody + Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    B::Data: Send,
{
    let mut collected = Vec::new();
    let mut body = std::pin::pin!(body);

    loop {
        match std::future::poll_fn(|cx| HttpBody::poll_frame(body.as_mut(), cx)).await {
            Some(Ok(frame)) => {
                if let Ok(data) = frame.into_data() {
                    use bytes::Buf;
                    collected.extend_from_slice(data.chunk());
                }
            }
            Some(Err(e)) => return Err(e.into().to_string()),
            None => break,
        }
    }

    Ok(collected)
}

/// Build an HTTP response with the given JSON body.
fn build_response(json: Vec<u8>) -> http::Response<tonic::body::BoxBody> {
    let body = tonic::body::BoxBody::new(
        http_body_util::Full::new(bytes::Bytes::from(json))
            .map_err(|e| Status::internal(format!("body error: {}", e))),
    );

    http::Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use semsig_core::HashEmbedder;

    fn test_service() -> SemsigServiceImpl {
        SemsigServiceImpl {
            pipeline: SignaturePipeline::new(Arc::new(HashEmbedder::new(32))),
        }
    }

    #[tokio::test]
    async fn test_dispatch_generate() {
        let service = test_service();
        let request = JsonRpcRequest {
            method: "signature/generate".to_string(),
            params: serde_json::json!({"text": "i love ai"}),
        };
        let resp = service.dispatch(request).await;
        assert!(resp.success, "error: {:?}", resp.error);
        let result = resp.result.unwrap();
        assert_eq!(result["text"], "i love ai");
        assert!(result["lsh_signature"]
            .as_str()
            .unwrap()
            .starts_with("0x"));
    }

    #[tokio::test]
    async fn test_dispatch_health() {
        let service = test_service();
        let request = JsonRpcRequest {
            method: "node/health".to_string(),
            params: serde_json::json!({}),
        };
        let resp = service.dispatch(request).await;
        assert!(resp.success);
        assert_eq!(resp.result.unwrap()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_method() {
        let service = test_service();
        let request = JsonRpcRequest {
            method: "no/such/method".to_string(),
            params: serde_json::json!({}),
        };
        let resp = service.dispatch(request).await;
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("Unknown method"));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_params_is_generic_failure() {
        let service = test_service();
        let request = JsonRpcRequest {
            method: "signature/generate".to_string(),
            params: serde_json::json!({"text": "x", "num_perm": 0}),
        };
        let resp = service.dispatch(request).await;
        assert!(!resp.success);
        assert!(resp.result.is_none());
    }
}
