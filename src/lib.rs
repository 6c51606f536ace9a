//! # ethkit
//!
//! Convenience toolkit over the [alloy](https://docs.rs/alloy) Ethereum SDK.
//!
//! ethkit does not reimplement any protocol machinery. Key derivation,
//! transaction encoding, signing, and JSON-RPC transport are all delegated
//! to alloy, k256, and eth-keystore; this crate arranges the calls:
//!
//! - [`signer`]: key generation, encrypted V3 keystores, a single-account
//!   keystore wallet, and message/hash signing
//! - [`evm`]: RPC client wrapper, nonce and fee queries, EIP-1559 ETH
//!   transfers, bounded transaction-confirmation polling, and an
//!   address-scoped log watcher
//! - [`core`]: shared address/hash types, chain registry, and YAML config

pub use ethkit_core as core;
pub use ethkit_evm as evm;
pub use ethkit_signer as signer;

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
