// crates/semsig-sketch/src/lib.rs
//
// semsig-sketch: The signature-generation pipeline for the semsig service.
//
// Turns a normalized embedding vector into discrete tokens, builds
// independently seeded MinHash sketches over the token set, concatenates
// them into a composite signature string, and reduces that string to a
// stable fixed-width digest. Also provides the cosine-similarity oracle
// used to validate the sketch-based approximation.

pub mod digest;
pub mod ensemble;
pub mod minhash;
pub mod params;
pub mod pipeline;
pub mod similarity;
pub mod tokenize;

// Re-export the main pipeline types for ergonomic access.
pub use digest::{digest, digest_hex, format_digest};
pub use ensemble::{ensemble_signature, member_seed, sketch_signature};
pub use minhash::{estimate_jaccard, MinHasher};
pub use params::SignatureParams;
pub use pipeline::{SignaturePipeline, TextSignature};
pub use similarity::cosine_similarity;
pub use tokenize::{tokenize, TokenStrategy};
