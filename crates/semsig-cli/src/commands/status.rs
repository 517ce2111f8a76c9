// crates/semsig-cli/src/commands/status.rs
//
// `semsig status` — display daemon health and version info.

use crate::rpc_client::{expect_result, rpc_call};

/// Run the status command.
pub async fn run(rpc: &str) -> Result<(), Box<dyn std::error::Error>> {
    let health = expect_result(rpc_call(rpc, "node/health", serde_json::json!({})).await?)?;
    let info = expect_result(rpc_call(rpc, "node/info", serde_json::json!({})).await?)?;

    println!("Daemon:       {}", rpc);
    println!(
        "Status:       {}",
        health["status"].as_str().unwrap_or("unknown")
    );
    println!(
        "Version:      {}",
        info["version"].as_str().unwrap_or("unknown")
    );
    println!("Dimensions:   {}", info["dimensions"]);

    Ok(())
}
