//! Shared helpers for the subcommands.

use std::path::PathBuf;

use ethkit_core::config::Config;

/// The default data directory: `~/.ethkit`.
pub fn default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let home = dirs::home_dir().ok_or("could not determine home directory")?;
    Ok(home.join(".ethkit"))
}

/// Resolves the config path (default: `~/.ethkit/config.yaml`).
pub fn resolve_config_path(
    config: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = config {
        return Ok(path);
    }
    Ok(default_data_dir()?.join("config.yaml"))
}

/// Loads the config from an optional explicit path.
pub fn load_config(config: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = resolve_config_path(config)?;
    tracing::debug!("loading config from {}", path.display());
    Config::from_file(&path)
        .map_err(|e| format!("{} ({e}); run `ethkit init` first", path.display()).into())
}

/// Prompts for a keystore passphrase without echoing it.
pub fn prompt_passphrase(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    eprint!("{prompt}: ");
    Ok(rpassword::read_password()?)
}
