//! # ethkit-signer
//!
//! Key generation, encrypted V3 keystores, and message/transaction-hash
//! signing. Elliptic-curve operations are delegated to `k256`; keystore
//! encryption to `eth-keystore`. This crate stays independent of alloy so
//! it can be reused outside an RPC context.

pub mod keys;
pub mod keystore;
pub mod signer;
pub mod wallet;

pub use keys::{generate, KeyError};
pub use signer::{LocalSigner, Signature, Signer};
pub use wallet::KeystoreWallet;
