//! YAML configuration for ethkit tooling.
//!
//! Loads `config.yaml` into Rust types. Endpoints live here rather than in
//! code so that switching networks never requires a rebuild.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Defaults for the transaction-confirmation poller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmConfig {
    /// Maximum number of polling attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed polling interval, in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_max_attempts() -> u32 {
    60
}

fn default_interval_secs() -> u64 {
    3
}

/// Top-level ethkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP JSON-RPC endpoint.
    pub rpc_url: String,
    /// Websocket endpoint for subscriptions (optional).
    #[serde(default)]
    pub ws_url: Option<String>,
    /// Directory holding V3 keystore files.
    pub keystore_dir: PathBuf,
    /// Expected chain ID. When set, tooling cross-checks it against the node.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Confirmation poller defaults.
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            ws_url: Some("ws://127.0.0.1:8545".to_string()),
            keystore_dir: PathBuf::from("keystore"),
            chain_id: None,
            confirm: ConfirmConfig::default(),
        }
    }
}

impl Config {
    /// Loads a configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
