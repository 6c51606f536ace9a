//! `ethkit new-account`: generate a key and encrypt it into the keystore.

use std::path::PathBuf;

use ethkit_signer::keystore;

use super::util;

/// Run the `new-account` subcommand.
pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let passphrase = util::prompt_passphrase("New keystore passphrase")?;
    let confirm = util::prompt_passphrase("Repeat passphrase")?;
    if passphrase != confirm {
        return Err("passphrases do not match".into());
    }

    let (address, path) = keystore::create(&config.keystore_dir, &passphrase)?;

    println!("Created account {address}");
    println!("Keystore file: {}", path.display());

    Ok(())
}
