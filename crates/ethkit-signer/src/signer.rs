//! Signing interface.
//!
//! A small trait over "sign this 32-byte hash" so that the transaction and
//! confirmation plumbing does not care where keys live, plus the in-memory
//! `k256` implementation.

use ethkit_core::types::Address;
use k256::ecdsa::{SigningKey, VerifyingKey};
use thiserror::Error;

use crate::keys;

/// Errors from signing operations.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("signature error: {0}")]
    Signature(String),

    #[error(transparent)]
    Key(#[from] keys::KeyError),
}

/// Result alias for signing operations.
pub type Result<T> = std::result::Result<T, SignerError>;

/// A 65-byte recoverable secp256k1 signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// Recovery value, 27 or 28.
    pub v: u8,
}

impl Signature {
    /// Concatenated `r || s || v` form.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Something that can sign 32-byte hashes on behalf of one address.
pub trait Signer {
    /// Signs the given prehashed message.
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<Signature>;

    /// The address this signer signs for.
    fn address(&self) -> Address;
}

/// An in-memory signer holding a plain `k256` key.
#[derive(Clone)]
pub struct LocalSigner {
    key: SigningKey,
    address: Address,
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish()
    }
}

impl LocalSigner {
    /// Wraps an existing signing key.
    pub fn new(key: SigningKey) -> Self {
        let address = keys::address_of(&key);
        Self { key, address }
    }

    /// Builds a signer from raw 32-byte key material.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let key = SigningKey::from_slice(bytes).map_err(|_| keys::KeyError::InvalidPrivateKey)?;
        Ok(Self::new(key))
    }

    /// Builds a signer from a hex-encoded private key.
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        Ok(Self::new(keys::from_hex(hex_key)?))
    }

    /// Generates a signer with a fresh random key.
    pub fn random() -> Self {
        let (key, address) = keys::generate();
        Self { key, address }
    }

    /// The underlying signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.key
    }

    /// The corresponding public key.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey::from(&self.key)
    }
}

impl Signer for LocalSigner {
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<Signature> {
        let (sig, recovery_id) = self
            .key
            .sign_prehash_recoverable(hash)
            .map_err(|e| SignerError::Signature(e.to_string()))?;

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(Signature {
            r,
            s,
            v: 27 + recovery_id.to_byte(),
        })
    }

    fn address(&self) -> Address {
        self.address
    }
}
