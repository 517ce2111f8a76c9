// crates/semsig-cli/src/commands/similar.rs
//
// `semsig similar` — check whether two texts are semantically similar.

use clap::Args;

use crate::rpc_client::{expect_result, rpc_call};

/// Arguments for the similar command.
#[derive(Debug, Args)]
pub struct SimilarArgs {
    /// First text.
    pub text1: String,

    /// Second text.
    pub text2: String,

    /// Cosine-similarity threshold.
    #[arg(long, default_value_t = 0.7)]
    pub threshold: f64,
}

/// Run the similar command.
pub async fn run(rpc: &str, args: SimilarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = serde_json::json!({
        "text1": args.text1,
        "text2": args.text2,
        "threshold": args.threshold,
    });

    let response = rpc_call(rpc, "similarity/check", params).await?;
    let result = expect_result(response)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
