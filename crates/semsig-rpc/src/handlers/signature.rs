// crates/semsig-rpc/src/handlers/signature.rs
//
// Signature handlers: GenerateSignature (ensemble + digest) and
// SketchSignature (single rendered sketch).

use serde::{Deserialize, Serialize};

use semsig_sketch::{SignatureParams, SignaturePipeline};

// ---------------------------------------------------------------------------
// GenerateSignature
// ---------------------------------------------------------------------------

/// Request for a full ensemble signature.
///
/// Pipeline parameters are flattened into the request body and take their
/// contractual defaults when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSignatureRequest {
    /// Input text.
    pub text: String,
    /// Pipeline parameters (num_perm, ensemble_size, use_binning,
    /// round_digits_or_bin_size, base_seed).
    #[serde(flatten)]
    pub params: SignatureParams,
}

/// Response carrying the final signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSignatureResponse {
    /// The input text, echoed back.
    pub text: String,
    /// The hex-rendered digest of the composite ensemble signature.
    pub lsh_signature: String,
}

/// Handle a GenerateSignature request.
pub async fn handle_generate_signature(
    pipeline: &SignaturePipeline,
    request: GenerateSignatureRequest,
) -> Result<GenerateSignatureResponse, String> {
    let signature = pipeline
        .generate(&request.text, &request.params)
        .await
        .map_err(|e| e.to_string())?;

    Ok(GenerateSignatureResponse {
        text: request.text,
        lsh_signature: signature.digest_hex,
    })
}

// ---------------------------------------------------------------------------
// SketchSignature
// ---------------------------------------------------------------------------

/// Request for a single rendered sketch (no ensemble, no digest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchSignatureRequest {
    /// Input text.
    pub text: String,
    /// Pipeline parameters; `ensemble_size` is ignored here.
    #[serde(flatten)]
    pub params: SignatureParams,
}

/// Response carrying the single sketch string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchSignatureResponse {
    /// The input text, echoed back.
    pub text: String,
    /// `-`-joined decimal sketch values under `base_seed`.
    pub sketch: String,
}

/// Handle a SketchSignature request.
pub async fn handle_sketch_signature(
    pipeline: &SignaturePipeline,
    request: SketchSignatureRequest,
) -> Result<SketchSignatureResponse, String> {
    let sketch = pipeline
        .single(&request.text, &request.params)
        .await
        .map_err(|e| e.to_string())?;

    Ok(SketchSignatureResponse {
        text: request.text,
        sketch,
    })
}
