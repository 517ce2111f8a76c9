// crates/semsig-rpc/src/handlers/mod.rs
//
// Handler modules for the RPC endpoints. Each module defines request and
// response types and handler functions for one API group.

pub mod node;
pub mod signature;
pub mod similarity;
