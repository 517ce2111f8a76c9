// crates/semsig-daemon/src/config.rs
//
// Runtime configuration for the semsig daemon.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the RPC server.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the RPC server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Embedding dimensionality of the embedder loaded at startup.
    #[serde(default = "default_embedding_dimensions")]
    pub embedding_dimensions: usize,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    8000
}

fn default_embedding_dimensions() -> usize {
    semsig_core::DEFAULT_DIMENSIONS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            embedding_dimensions: default_embedding_dimensions(),
            log_level: default_log_level(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: DaemonConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::default();
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 8000);
        assert_eq!(config.embedding_dimensions, 384);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DaemonConfig = toml::from_str("rpc_port = 9001").unwrap();
        assert_eq!(config.rpc_port, 9001);
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.embedding_dimensions, 384);
    }
}
