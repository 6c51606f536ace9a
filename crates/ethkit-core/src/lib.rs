//! # ethkit-core
//!
//! Shared types, chain registry, configuration, and filesystem helpers
//! for the ethkit crates.

pub mod chain;
pub mod config;
pub mod fs;
pub mod types;

pub use chain::KnownChain;
pub use config::Config;
pub use types::{Address, TxHash};
