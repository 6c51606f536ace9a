//! Key pair generation and address derivation.

use ethkit_core::types::Address;
use k256::ecdsa::{SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Errors from key handling.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The bytes do not describe a valid secp256k1 scalar.
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// The bytes are not a valid secp256k1 public key encoding.
    #[error("unexpected key type: not a secp256k1 public key")]
    UnexpectedKeyType,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Result alias for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;

/// Generates a fresh random key pair, returning the key and its address.
pub fn generate() -> (SigningKey, Address) {
    let key = SigningKey::random(&mut rand::thread_rng());
    let address = address_of(&key);
    (key, address)
}

/// Derives the Ethereum address of a private key.
///
/// keccak256 of the uncompressed public key (minus the 0x04 prefix byte),
/// last 20 bytes.
pub fn address_of(key: &SigningKey) -> Address {
    address_of_public(&VerifyingKey::from(key))
}

/// Derives the Ethereum address of a public key.
pub fn address_of_public(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..]);
    Address(addr)
}

/// Parses a hex-encoded 32-byte private key (with or without `0x`).
pub fn from_hex(hex_key: &str) -> Result<SigningKey> {
    let stripped = hex_key.strip_prefix("0x").unwrap_or(hex_key);
    let bytes = hex::decode(stripped)?;
    SigningKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPrivateKey)
}

/// Parses a SEC1-encoded public key and derives its address.
///
/// Bytes that do not describe a point on secp256k1 surface as
/// [`KeyError::UnexpectedKeyType`].
pub fn address_from_sec1(sec1: &[u8]) -> Result<Address> {
    let key = VerifyingKey::from_sec1_bytes(sec1).map_err(|_| KeyError::UnexpectedKeyType)?;
    Ok(address_of_public(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's well-known account 0.
    const ANVIL_KEY_0: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDR_0: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn generate_yields_nonzero_address() {
        let (key, address) = generate();
        assert_ne!(address, Address::ZERO);
        assert_eq!(address_of(&key), address);
    }

    #[test]
    fn generate_is_not_deterministic() {
        let (_, a) = generate();
        let (_, b) = generate();
        assert_ne!(a, b);
    }

    #[test]
    fn known_key_derives_known_address() {
        let key = from_hex(ANVIL_KEY_0).unwrap();
        assert_eq!(address_of(&key).to_hex(), ANVIL_ADDR_0);
    }

    #[test]
    fn from_hex_accepts_prefix() {
        let key = from_hex(&format!("0x{ANVIL_KEY_0}")).unwrap();
        assert_eq!(address_of(&key).to_hex(), ANVIL_ADDR_0);
    }

    #[test]
    fn invalid_private_key_rejected() {
        // Not a scalar: all zeros.
        let zeros = "00".repeat(32);
        assert!(matches!(
            from_hex(&zeros),
            Err(KeyError::InvalidPrivateKey)
        ));
        assert!(matches!(from_hex("0x1234"), Err(KeyError::InvalidPrivateKey)));
        assert!(matches!(from_hex("zz"), Err(KeyError::Hex(_))));
    }

    #[test]
    fn public_key_roundtrips_through_sec1() {
        let (key, address) = generate();
        let point = VerifyingKey::from(&key).to_encoded_point(false);
        let derived = address_from_sec1(point.as_bytes()).unwrap();
        assert_eq!(derived, address);
    }

    #[test]
    fn garbage_public_key_is_unexpected_key_type() {
        let result = address_from_sec1(&[0x07; 65]);
        assert!(matches!(result, Err(KeyError::UnexpectedKeyType)));
    }
}
