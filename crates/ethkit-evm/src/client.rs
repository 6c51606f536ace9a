//! EVM client wrapper.
//!
//! Dials an EVM-compatible JSON-RPC endpoint (HTTP or websocket) and exposes
//! the handful of chain queries the rest of ethkit needs. All transport and
//! encoding concerns belong to alloy.

use alloy::eips::BlockNumberOrTag;
use alloy::network::Ethereum;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder, WsConnect};
use thiserror::Error;
use tracing::{debug, error};

/// Errors from client operations.
#[derive(Debug, Error)]
pub enum EvmClientError {
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("URL parse error: {0}")]
    UrlParse(String),

    #[error("latest block has no base fee; node predates EIP-1559?")]
    NoBaseFee,

    #[error("connected to chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, EvmClientError>;

fn rpc_err(e: impl std::fmt::Display) -> EvmClientError {
    error!("RPC call failed: {e}");
    EvmClientError::Rpc(e.to_string())
}

/// A connection to one EVM node.
pub struct EvmClient {
    provider: DynProvider<Ethereum>,
    url: String,
}

impl std::fmt::Debug for EvmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmClient").field("url", &self.url).finish()
    }
}

impl EvmClient {
    /// Dials an HTTP JSON-RPC endpoint.
    pub fn connect(rpc_url: &str) -> Result<Self> {
        let url: alloy::transports::http::reqwest::Url = rpc_url
            .parse()
            .map_err(|e| EvmClientError::UrlParse(format!("{e}")))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();
        debug!(url = rpc_url, "connected over HTTP");

        Ok(Self {
            provider,
            url: rpc_url.to_string(),
        })
    }

    /// Dials a websocket JSON-RPC endpoint. Required for log subscriptions.
    pub async fn connect_ws(ws_url: &str) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .connect_ws(WsConnect::new(ws_url))
            .await
            .map_err(rpc_err)?
            .erased();
        debug!(url = ws_url, "connected over websocket");

        Ok(Self {
            provider,
            url: ws_url.to_string(),
        })
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Returns the endpoint URL this client dialed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets the chain ID from the connected node.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(rpc_err)
    }

    /// Gets the chain ID and checks it against an expected value.
    pub async fn expect_chain_id(&self, expected: u64) -> Result<u64> {
        let actual = self.chain_id().await?;
        if actual != expected {
            return Err(EvmClientError::ChainMismatch { expected, actual });
        }
        Ok(actual)
    }

    /// Queries the native balance of an address.
    pub async fn balance(&self, address: Address) -> Result<U256> {
        self.provider.get_balance(address).await.map_err(rpc_err)
    }

    /// Queries the pending-state nonce of an address.
    ///
    /// Pending rather than latest, so queued-but-unmined transactions are
    /// counted and the next submission does not collide.
    pub async fn pending_nonce(&self, address: Address) -> Result<u64> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(rpc_err)
    }

    /// Node-suggested legacy gas price, in wei.
    pub async fn gas_price(&self) -> Result<u128> {
        self.provider.get_gas_price().await.map_err(rpc_err)
    }

    /// Node-suggested priority fee (tip) per gas, in wei.
    pub async fn max_priority_fee(&self) -> Result<u128> {
        self.provider
            .get_max_priority_fee_per_gas()
            .await
            .map_err(rpc_err)
    }

    /// Base fee per gas of the latest block, in wei.
    pub async fn latest_base_fee(&self) -> Result<u128> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .map_err(rpc_err)?
            .ok_or_else(|| EvmClientError::Rpc("no latest block".to_string()))?;

        block
            .header
            .base_fee_per_gas
            .map(u128::from)
            .ok_or(EvmClientError::NoBaseFee)
    }
}

/// Converts an `ethkit_core` address into an alloy `Address`.
pub fn to_alloy_address(addr: ethkit_core::types::Address) -> Address {
    Address::from(addr.0)
}

/// Converts an alloy `Address` into an `ethkit_core` address.
pub fn to_core_address(addr: Address) -> ethkit_core::types::Address {
    ethkit_core::types::Address(addr.0 .0)
}

/// Converts an alloy `B256` into an `ethkit_core` transaction hash.
pub fn to_core_tx_hash(hash: B256) -> ethkit_core::types::TxHash {
    ethkit_core::types::TxHash(hash.0)
}

/// Converts an `ethkit_core` transaction hash into an alloy `B256`.
pub fn to_alloy_tx_hash(hash: ethkit_core::types::TxHash) -> B256 {
    B256::from(hash.0)
}
