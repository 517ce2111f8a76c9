// crates/semsig-daemon/src/main.rs
//
// Binary entrypoint for the semsig daemon.
//
// Initializes tracing, parses CLI arguments, loads configuration,
// constructs the embedder resource once, and starts the RPC server.

mod config;

use std::sync::Arc;

use clap::Parser;
use config::DaemonConfig;

use semsig_core::HashEmbedder;
use semsig_rpc::{RpcConfig, SemsigRpcServer};
use semsig_sketch::SignaturePipeline;

/// semsig daemon — serves text-signature generation over JSON-RPC.
#[derive(Parser, Debug)]
#[command(name = "semsig-daemon", version = "0.1.0", about = "semsig signature service daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "semsig.toml")]
    config: String,

    /// Override the RPC port from the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration from TOML file, falling back to defaults if the file
    // is not found. Loaded before tracing init so the configured log level
    // can serve as the env-filter fallback.
    let config_result = DaemonConfig::load(&args.config);
    let mut daemon_config = match &config_result {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };

    // Initialize tracing subscriber for structured logging. RUST_LOG takes
    // precedence over the configured log level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match config_result {
        Ok(_) => tracing::info!("Loaded configuration from {}", args.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            args.config,
            e
        ),
    }

    // CLI --port flag overrides the config file value.
    if let Some(port) = args.port {
        daemon_config.rpc_port = port;
    }

    tracing::info!("semsig daemon v0.1.0");
    tracing::info!(
        "RPC endpoint: {}:{}",
        daemon_config.rpc_host,
        daemon_config.rpc_port
    );
    tracing::info!(
        "Embedding dimensions: {}",
        daemon_config.embedding_dimensions
    );

    // Construct the embedder once at startup; it is shared read-only for the
    // lifetime of the process and dropped at shutdown.
    let embedder = Arc::new(HashEmbedder::new(daemon_config.embedding_dimensions));
    let pipeline = SignaturePipeline::new(embedder);

    let rpc_config = RpcConfig {
        host: daemon_config.rpc_host.clone(),
        port: daemon_config.rpc_port,
    };
    let server = SemsigRpcServer::new(rpc_config, pipeline);

    if let Err(e) = server.start().await {
        tracing::error!("RPC server error: {}", e);
        return Err(e);
    }

    tracing::info!("semsig daemon shut down");
    Ok(())
}
