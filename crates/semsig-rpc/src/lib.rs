// crates/semsig-rpc/src/lib.rs
//
// semsig-rpc: JSON-RPC server and handlers for the semsig service.
//
// Provides a tonic-based RPC server exposing the signature pipeline.
// Uses JSON-based RPC over tonic rather than full protobuf codegen.

pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server type for ergonomic access.
pub use server::SemsigRpcServer;
pub use server::RpcConfig;
