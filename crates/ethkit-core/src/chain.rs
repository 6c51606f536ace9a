//! Well-known chain identifiers.
//!
//! Endpoints are not hardcoded here; RPC URLs always come from
//! [`crate::config::Config`]. This registry only maps numeric chain IDs to
//! names so that tooling can label what it is talking to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Networks ethkit knows by name.
///
/// Each variant carries its well-known numeric chain ID. Any other chain ID
/// is still usable everywhere ethkit takes a `u64`; this enum exists for
/// display and testnet detection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum KnownChain {
    /// Ethereum mainnet
    Ethereum = 1,
    /// Optimism
    Optimism = 10,
    /// Polygon
    Polygon = 137,
    /// Base
    Base = 8453,
    /// Arbitrum One
    Arbitrum = 42161,
    /// Holesky testnet
    Holesky = 17000,
    /// Sepolia testnet
    Sepolia = 11155111,
}

impl KnownChain {
    /// All known chain IDs.
    pub const ALL: [KnownChain; 7] = [
        Self::Ethereum,
        Self::Optimism,
        Self::Polygon,
        Self::Base,
        Self::Arbitrum,
        Self::Holesky,
        Self::Sepolia,
    ];

    /// Returns the numeric chain ID.
    pub const fn as_u64(self) -> u64 {
        self as u64
    }

    /// Human-readable chain name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Optimism => "Optimism",
            Self::Polygon => "Polygon",
            Self::Base => "Base",
            Self::Arbitrum => "Arbitrum One",
            Self::Holesky => "Holesky",
            Self::Sepolia => "Sepolia",
        }
    }

    /// Whether this chain is a testnet.
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Holesky | Self::Sepolia)
    }

    /// Label for an arbitrary chain ID: the known name, or the ID itself.
    pub fn label(chain_id: u64) -> String {
        match KnownChain::try_from(chain_id) {
            Ok(chain) => chain.to_string(),
            Err(_) => format!("chain {chain_id}"),
        }
    }
}

impl TryFrom<u64> for KnownChain {
    type Error = UnknownChainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ethereum),
            10 => Ok(Self::Optimism),
            137 => Ok(Self::Polygon),
            8453 => Ok(Self::Base),
            42161 => Ok(Self::Arbitrum),
            17000 => Ok(Self::Holesky),
            11155111 => Ok(Self::Sepolia),
            _ => Err(UnknownChainError(value)),
        }
    }
}

impl From<KnownChain> for u64 {
    fn from(chain: KnownChain) -> u64 {
        chain.as_u64()
    }
}

impl fmt::Display for KnownChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u64())
    }
}

/// Error when a chain ID is not in the known set.
#[derive(Debug, Clone)]
pub struct UnknownChainError(pub u64);

impl fmt::Display for UnknownChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chain_id {}", self.0)
    }
}

impl std::error::Error for UnknownChainError {}
