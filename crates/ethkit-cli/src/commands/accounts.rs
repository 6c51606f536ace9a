//! `ethkit accounts`: list keystore accounts.

use std::path::PathBuf;

use ethkit_signer::keystore;

use super::util;

/// Run the `accounts` subcommand.
pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let accounts = keystore::list(&config.keystore_dir)?;
    if accounts.is_empty() {
        println!(
            "No accounts in {}: run `ethkit new-account`.",
            config.keystore_dir.display()
        );
        return Ok(());
    }

    for (address, path) in accounts {
        println!("{address}  {}", path.display());
    }

    Ok(())
}
