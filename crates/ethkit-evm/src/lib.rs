//! # ethkit-evm
//!
//! RPC-facing half of ethkit. Everything here is a thin arrangement of
//! alloy provider calls:
//!
//! - [`client`]: connection dialing (HTTP/websocket) and chain queries
//!   (balance, pending nonce, gas price, tip, base fee)
//! - [`tx`]: EIP-1559 transaction options, ETH transfers, signing and
//!   submission
//! - [`confirm`]: bounded fixed-interval polling until a submitted
//!   transaction is mined
//! - [`logs`]: address-scoped log subscription over websocket

pub mod client;
pub mod confirm;
pub mod logs;
pub mod tx;

pub use client::{EvmClient, EvmClientError};
pub use confirm::{wait_for_confirmation, wait_until_mined, ConfirmError, TxStatus};
pub use logs::watch_address_logs;
pub use tx::{send_eth, TxOptions};

// Re-export alloy primitives used throughout the public API.
pub use alloy::primitives::{Address, B256, U256};
