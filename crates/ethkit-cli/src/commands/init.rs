//! `ethkit init`: write a default config and create the keystore directory.

use std::path::PathBuf;

use ethkit_core::config::Config;
use ethkit_core::fs::write_secure;

use super::util;

/// Run the `init` subcommand.
pub fn run(
    data_dir: Option<PathBuf>,
    rpc_url: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => util::default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir)?;

    let config_path = data_dir.join("config.yaml");
    if config_path.exists() {
        return Err(format!("{} already exists", config_path.display()).into());
    }

    let keystore_dir = data_dir.join("keystore");
    std::fs::create_dir_all(&keystore_dir)?;

    let config = Config {
        rpc_url,
        keystore_dir,
        ..Config::default()
    };
    write_secure(&config_path, config.to_yaml()?)?;

    println!("Wrote {}", config_path.display());
    println!("Keystore directory: {}", config.keystore_dir.display());
    println!("Next: `ethkit new-account` to create an account.");

    Ok(())
}
