// crates/semsig-cli/src/main.rs
//
// CLI entrypoint for the semsig developer tools.
//
// Provides subcommands for generating signatures, checking similarity,
// and querying daemon status.

mod commands;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::sign::SignArgs;
use commands::similar::SimilarArgs;

/// semsig CLI — developer tools for the semantic signature service.
#[derive(Parser, Debug)]
#[command(
    name = "semsig",
    version = "0.1.0",
    about = "semsig CLI — text signatures and similarity checks against a running daemon"
)]
struct Cli {
    /// RPC endpoint for the semsig-daemon.
    #[arg(long, global = true, default_value = "http://localhost:8000")]
    rpc: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the ensemble signature and digest for a text.
    Sign(SignArgs),

    /// Check whether two texts are semantically similar.
    Similar(SimilarArgs),

    /// Display daemon health and version info.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign(args) => commands::sign::run(&cli.rpc, args).await,
        Commands::Similar(args) => commands::similar::run(&cli.rpc, args).await,
        Commands::Status => commands::status::run(&cli.rpc).await,
    }
}
