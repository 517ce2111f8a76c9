// crates/semsig-core/src/lib.rs
//
// semsig-core: Core types, embedder boundary, and vector helpers for the
// semsig service.
//
// This is the leaf crate the rest of the workspace depends on. It defines
// the error type, the text-embedder trait boundary, and the embedding
// vector helpers (L2 normalization, deterministic hash embedder).

pub mod embedding;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use semsig_core::TextEmbedder;`

pub use embedding::{hash_embedding, l2_normalize, HashEmbedder, DEFAULT_DIMENSIONS};
pub use error::SemsigError;
pub use traits::TextEmbedder;
