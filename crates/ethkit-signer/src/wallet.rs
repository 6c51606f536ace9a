//! Keystore-backed wallet.
//!
//! A `KeystoreWallet` wraps exactly one unlocked account out of a keystore
//! directory. Its single invariant: it never signs on behalf of any address
//! other than the one it wraps.

use std::path::{Path, PathBuf};

use ethkit_core::types::Address;
use sha3::{Digest, Keccak256};
use thiserror::Error;
use tracing::info;

use crate::keystore::{self, KeystoreError};
use crate::signer::{LocalSigner, Signature, Signer, SignerError};

/// Errors from wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Keystore(#[from] KeystoreError),

    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error("not authorized to sign for {requested}; wallet holds {held}")]
    NotAuthorized { requested: Address, held: Address },
}

/// Result alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// A single unlocked account from a keystore directory.
pub struct KeystoreWallet {
    keystore_dir: PathBuf,
    keystore_path: PathBuf,
    signer: LocalSigner,
}

impl std::fmt::Debug for KeystoreWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystoreWallet")
            .field("address", &self.signer.address())
            .field("keystore_path", &self.keystore_path)
            .finish()
    }
}

impl KeystoreWallet {
    /// Finds `address` in the keystore directory and unlocks it.
    pub fn open(dir: &Path, address: Address, passphrase: &str) -> Result<Self> {
        let path = keystore::find(dir, address)?;
        let key = keystore::unlock(&path, passphrase)?;
        info!(%address, "unlocked keystore account");
        Ok(Self {
            keystore_dir: dir.to_path_buf(),
            keystore_path: path,
            signer: LocalSigner::new(key),
        })
    }

    /// Unlocks the first account found in the keystore directory.
    pub fn open_first(dir: &Path, passphrase: &str) -> Result<Self> {
        let accounts = keystore::list(dir)?;
        let (address, _) = accounts
            .first()
            .ok_or(KeystoreError::AccountNotFound(Address::ZERO))?;
        Self::open(dir, *address, passphrase)
    }

    /// Re-points the wallet at another account in the same directory.
    ///
    /// On failure the wallet keeps its current account.
    pub fn switch_account(&mut self, address: Address, passphrase: &str) -> Result<()> {
        let path = keystore::find(&self.keystore_dir, address)?;
        let key = keystore::unlock(&path, passphrase)?;
        info!(from = %self.signer.address(), to = %address, "switched wallet account");
        self.keystore_path = path;
        self.signer = LocalSigner::new(key);
        Ok(())
    }

    /// The address this wallet wraps.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Path of the unlocked keystore file.
    pub fn keystore_path(&self) -> &Path {
        &self.keystore_path
    }

    /// Returns the wallet's signer, checking that `from` is the wrapped
    /// account.
    pub fn signer_for(&self, from: Address) -> Result<&LocalSigner> {
        if from != self.signer.address() {
            return Err(WalletError::NotAuthorized {
                requested: from,
                held: self.signer.address(),
            });
        }
        Ok(&self.signer)
    }

    /// Signs a raw text message using EIP-191 personal-sign framing.
    pub fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        Ok(self.signer.sign_hash(&eip191_hash(message))?)
    }

    /// Signs keccak256 of arbitrary bytes.
    pub fn sign_data(&self, data: &[u8]) -> Result<Signature> {
        let hash: [u8; 32] = Keccak256::digest(data).into();
        Ok(self.signer.sign_hash(&hash)?)
    }
}

impl Signer for KeystoreWallet {
    fn sign_hash(&self, hash: &[u8; 32]) -> std::result::Result<Signature, SignerError> {
        self.signer.sign_hash(hash)
    }

    fn address(&self) -> Address {
        self.signer.address()
    }
}

/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`.
fn eip191_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(format!("\x19Ethereum Signed Message:\n{}", message.len()));
    hasher.update(message);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use k256::ecdsa::{RecoveryId, VerifyingKey};
    use tempfile::TempDir;

    fn recover(hash: &[u8; 32], sig: &Signature) -> Address {
        let recovery_id = RecoveryId::try_from(sig.v - 27).unwrap();
        let mut rs = [0u8; 64];
        rs[..32].copy_from_slice(&sig.r);
        rs[32..].copy_from_slice(&sig.s);
        let ecdsa_sig = k256::ecdsa::Signature::from_slice(&rs).unwrap();
        let key = VerifyingKey::recover_from_prehash(hash, &ecdsa_sig, recovery_id).unwrap();
        keys::address_of_public(&key)
    }

    #[test]
    fn open_and_sign() {
        let dir = TempDir::new().unwrap();
        let (address, _) = keystore::create(dir.path(), "pw").unwrap();

        let wallet = KeystoreWallet::open(dir.path(), address, "pw").unwrap();
        assert_eq!(wallet.address(), address);

        let sig = wallet.sign_message(b"hello ethkit").unwrap();
        assert_eq!(recover(&eip191_hash(b"hello ethkit"), &sig), address);
    }

    #[test]
    fn open_unknown_account_errors() {
        let dir = TempDir::new().unwrap();
        keystore::create(dir.path(), "pw").unwrap();

        let missing = Address([0x55; 20]);
        let result = KeystoreWallet::open(dir.path(), missing, "pw");
        assert!(matches!(
            result,
            Err(WalletError::Keystore(KeystoreError::AccountNotFound(_)))
        ));
    }

    #[test]
    fn open_first_picks_an_account() {
        let dir = TempDir::new().unwrap();
        let (address, _) = keystore::create(dir.path(), "pw").unwrap();

        let wallet = KeystoreWallet::open_first(dir.path(), "pw").unwrap();
        assert_eq!(wallet.address(), address);
    }

    #[test]
    fn switch_account_moves_the_wallet() {
        let dir = TempDir::new().unwrap();
        let (a1, _) = keystore::create(dir.path(), "pw1").unwrap();
        let (a2, _) = keystore::create(dir.path(), "pw2").unwrap();

        let mut wallet = KeystoreWallet::open(dir.path(), a1, "pw1").unwrap();
        wallet.switch_account(a2, "pw2").unwrap();
        assert_eq!(wallet.address(), a2);
    }

    #[test]
    fn failed_switch_keeps_current_account() {
        let dir = TempDir::new().unwrap();
        let (a1, _) = keystore::create(dir.path(), "pw1").unwrap();
        let (a2, _) = keystore::create(dir.path(), "pw2").unwrap();

        let mut wallet = KeystoreWallet::open(dir.path(), a1, "pw1").unwrap();
        assert!(wallet.switch_account(a2, "wrong-pass").is_err());
        assert_eq!(wallet.address(), a1);
    }

    #[test]
    fn refuses_to_sign_for_other_address() {
        let dir = TempDir::new().unwrap();
        let (address, _) = keystore::create(dir.path(), "pw").unwrap();
        let wallet = KeystoreWallet::open(dir.path(), address, "pw").unwrap();

        let other = Address([0x77; 20]);
        assert!(wallet.signer_for(address).is_ok());
        assert!(matches!(
            wallet.signer_for(other),
            Err(WalletError::NotAuthorized { requested, held })
                if requested == other && held == address
        ));
    }

    #[test]
    fn sign_data_hashes_before_signing() {
        let dir = TempDir::new().unwrap();
        let (address, _) = keystore::create(dir.path(), "pw").unwrap();
        let wallet = KeystoreWallet::open(dir.path(), address, "pw").unwrap();

        let data = b"arbitrary payload";
        let sig = wallet.sign_data(data).unwrap();
        let hash: [u8; 32] = Keccak256::digest(data).into();
        assert_eq!(recover(&hash, &sig), address);
    }
}
