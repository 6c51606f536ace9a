//! Encrypted keystore directories.
//!
//! Wraps the `eth-keystore` crate (V3 JSON, scrypt + aes-128-ctr) with
//! directory-level operations: create, import, unlock, list, and find.

use std::path::{Path, PathBuf};

use ethkit_core::types::Address;
use k256::ecdsa::SigningKey;
use thiserror::Error;

use crate::keys;

/// Errors arising from keystore operations.
#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("keystore crypto error: {0}")]
    Crypto(String),

    #[error("account {0} not found in keystore directory")]
    AccountNotFound(Address),

    #[error(transparent)]
    Key(#[from] keys::KeyError),
}

/// Result alias for keystore operations.
pub type Result<T> = std::result::Result<T, KeystoreError>;

/// Creates a keystore file holding a fresh random key.
///
/// Returns the derived address and the path of the new keystore JSON file.
pub fn create(dir: &Path, passphrase: &str) -> Result<(Address, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let mut rng = rand::thread_rng();
    let (secret, name) = eth_keystore::new(dir, &mut rng, passphrase, None)
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;

    let key =
        SigningKey::from_slice(secret.as_slice()).map_err(|_| keys::KeyError::InvalidPrivateKey)?;
    Ok((keys::address_of(&key), dir.join(name)))
}

/// Encrypts an existing private key into a keystore file.
pub fn import(dir: &Path, passphrase: &str, key: &SigningKey) -> Result<(Address, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let mut rng = rand::thread_rng();
    let secret = key.to_bytes();
    let name = eth_keystore::encrypt_key(dir, &mut rng, secret.as_slice(), passphrase, None)
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;

    Ok((keys::address_of(key), dir.join(name)))
}

/// Decrypts a keystore file with the given passphrase.
pub fn unlock(path: &Path, passphrase: &str) -> Result<SigningKey> {
    let secret = eth_keystore::decrypt_key(path, passphrase)
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;

    SigningKey::from_slice(secret.as_slice())
        .map_err(|_| keys::KeyError::InvalidPrivateKey.into())
}

/// Lists the accounts in a keystore directory.
///
/// Files that are not parseable keystore JSON are skipped. A missing
/// directory yields an empty list.
pub fn list(dir: &Path) -> Result<Vec<(Address, PathBuf)>> {
    let mut accounts = Vec::new();

    if !dir.exists() {
        return Ok(accounts);
    }

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(address) = read_keystore_address(&path) {
            accounts.push((address, path));
        }
    }

    Ok(accounts)
}

/// Locates the keystore file for an address within a directory.
pub fn find(dir: &Path, address: Address) -> Result<PathBuf> {
    list(dir)?
        .into_iter()
        .find(|(a, _)| *a == address)
        .map(|(_, path)| path)
        .ok_or(KeystoreError::AccountNotFound(address))
}

/// Reads the `address` field out of a keystore JSON file, if any.
fn read_keystore_address(path: &Path) -> Option<Address> {
    let data = std::fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&data).ok()?;
    json.get("address")?.as_str()?.parse().ok()
}
