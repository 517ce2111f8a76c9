// crates/semsig-cli/src/commands/sign.rs
//
// `semsig sign` — generate the ensemble signature and digest for a text.

use clap::Args;

use crate::rpc_client::{expect_result, rpc_call};

/// Arguments for the sign command.
#[derive(Debug, Args)]
pub struct SignArgs {
    /// The text to sign.
    pub text: String,

    /// Number of hash permutations per sketch.
    #[arg(long, default_value_t = 512)]
    pub num_perm: usize,

    /// Number of independently seeded sketches.
    #[arg(long, default_value_t = 10)]
    pub ensemble_size: u32,

    /// Use binning tokenization instead of rounding.
    #[arg(long)]
    pub use_binning: bool,

    /// Bin size (binning) or decimal places (rounding).
    #[arg(long, default_value_t = 0.01)]
    pub round_digits_or_bin_size: f64,

    /// Base seed for the ensemble.
    #[arg(long, default_value_t = 42)]
    pub base_seed: u64,
}

/// Run the sign command.
pub async fn run(rpc: &str, args: SignArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = serde_json::json!({
        "text": args.text,
        "num_perm": args.num_perm,
        "ensemble_size": args.ensemble_size,
        "use_binning": args.use_binning,
        "round_digits_or_bin_size": args.round_digits_or_bin_size,
        "base_seed": args.base_seed,
    });

    let response = rpc_call(rpc, "signature/generate", params).await?;
    let result = expect_result(response)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
