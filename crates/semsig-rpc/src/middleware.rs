// crates/semsig-rpc/src/middleware.rs
//
// Middleware for the RPC server: logging interceptor.

use tonic::{Request, Status};

/// Logging interceptor for tonic requests.
///
/// Logs the metadata of each incoming request using the `tracing` crate.
/// Request text is deliberately not logged here; only the envelope metadata.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    tracing::info!("Incoming RPC request: {:?}", req.metadata());
    Ok(req)
}
