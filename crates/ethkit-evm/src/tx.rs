//! Transaction construction, signing, and submission.
//!
//! Transactions are always EIP-1559: fee cap = latest base fee + boosted
//! tip. Encoding and signature plumbing are alloy's; this module only fills
//! in fields queried from the node.

use alloy::consensus::TxEnvelope;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use thiserror::Error;
use tracing::info;

use ethkit_signer::LocalSigner;

use crate::client::{EvmClient, EvmClientError};

/// Gas limit for a plain ETH transfer.
pub const ETH_TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Default gas limit when preparing options for a contract call.
pub const DEFAULT_CALL_GAS_LIMIT: u64 = 6_869_310;

/// Errors from transaction operations.
#[derive(Debug, Error)]
pub enum TxError {
    #[error(transparent)]
    Client(#[from] EvmClientError),

    #[error("signer error: {0}")]
    Signer(String),

    #[error("transaction build error: {0}")]
    Build(String),

    #[error("RPC send error: {0}")]
    Send(String),
}

/// Result alias for transaction operations.
pub type Result<T> = std::result::Result<T, TxError>;

/// EIP-1559 fee caps derived from chain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    /// Max total fee per gas (wei).
    pub max_fee_per_gas: u128,
    /// Max priority fee per gas (wei).
    pub max_priority_fee_per_gas: u128,
}

/// Computes fee caps from a base fee and a suggested tip.
///
/// The tip is multiplied by `tip_factor` (1 = take the node's suggestion as
/// is) and the fee cap is the latest base fee plus the boosted tip.
pub fn fee_caps(base_fee: u128, suggested_tip: u128, tip_factor: u64) -> FeeQuote {
    let tip = suggested_tip.saturating_mul(u128::from(tip_factor));
    FeeQuote {
        max_fee_per_gas: base_fee.saturating_add(tip),
        max_priority_fee_per_gas: tip,
    }
}

/// Queries the node for current base fee and tip, returning fee caps.
pub async fn quote_fees(client: &EvmClient, tip_factor: u64) -> Result<FeeQuote> {
    let base_fee = client.latest_base_fee().await?;
    let tip = client.max_priority_fee().await?;
    Ok(fee_caps(base_fee, tip, tip_factor))
}

/// A prepared bundle of transaction fields.
///
/// The EIP-1559 counterpart of a keyed transactor: everything needed to
/// submit on behalf of a sender except the calldata and recipient.
#[derive(Debug, Clone)]
pub struct TxOptions {
    pub chain_id: u64,
    pub nonce: u64,
    pub gas_limit: u64,
    pub fees: FeeQuote,
    pub value: U256,
}

impl TxOptions {
    /// Fills options from chain state for the given sender.
    ///
    /// `nonce_offset` shifts past transactions already queued locally but
    /// not yet submitted.
    pub async fn prepare(
        client: &EvmClient,
        sender: Address,
        nonce_offset: u64,
        value: U256,
        tip_factor: u64,
    ) -> Result<Self> {
        let chain_id = client.chain_id().await?;
        let nonce = client.pending_nonce(sender).await? + nonce_offset;
        let fees = quote_fees(client, tip_factor).await?;

        Ok(Self {
            chain_id,
            nonce,
            gas_limit: DEFAULT_CALL_GAS_LIMIT,
            fees,
            value,
        })
    }

    /// Applies the options to a transaction request.
    pub fn apply(&self, tx: TransactionRequest) -> TransactionRequest {
        tx.with_chain_id(self.chain_id)
            .with_nonce(self.nonce)
            .with_gas_limit(self.gas_limit)
            .with_max_fee_per_gas(self.fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(self.fees.max_priority_fee_per_gas)
            .with_value(self.value)
    }
}

/// Builds an unsigned EIP-1559 ETH transfer.
pub fn build_eth_transfer(
    to: Address,
    value: U256,
    chain_id: u64,
    nonce: u64,
    fees: FeeQuote,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(to)
        .with_value(value)
        .with_chain_id(chain_id)
        .with_nonce(nonce)
        .with_gas_limit(ETH_TRANSFER_GAS_LIMIT)
        .with_max_fee_per_gas(fees.max_fee_per_gas)
        .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas)
}

/// Signs a fully-populated transaction request.
///
/// Fails if any field alloy needs for an EIP-1559 envelope is missing.
pub async fn sign_request(signer: &LocalSigner, tx: TransactionRequest) -> Result<TxEnvelope> {
    let key_bytes = B256::from_slice(signer.signing_key().to_bytes().as_slice());
    let pk_signer =
        PrivateKeySigner::from_bytes(&key_bytes).map_err(|e| TxError::Signer(e.to_string()))?;
    let wallet = EthereumWallet::from(pk_signer);

    tx.build(&wallet).await.map_err(|e| TxError::Build(e.to_string()))
}

/// Signs a transaction request and serializes the envelope as JSON.
pub async fn sign_to_json(signer: &LocalSigner, tx: TransactionRequest) -> Result<serde_json::Value> {
    let envelope = sign_request(signer, tx).await?;
    serde_json::to_value(&envelope).map_err(|e| TxError::Build(e.to_string()))
}

/// Sends ETH from the signer's account.
///
/// Prepares options from chain state, builds an EIP-1559 transfer, signs
/// it, and submits it. Returns the transaction hash; callers that need
/// finality follow up with [`crate::confirm::wait_until_mined`].
pub async fn send_eth(
    client: &EvmClient,
    signer: &LocalSigner,
    to: Address,
    value: U256,
    tip_factor: u64,
) -> Result<B256> {
    let sender = crate::client::to_alloy_address(ethkit_signer::Signer::address(signer));

    let opts = TxOptions::prepare(client, sender, 0, value, tip_factor).await?;
    let tx = build_eth_transfer(to, value, opts.chain_id, opts.nonce, opts.fees).with_from(sender);
    let envelope = sign_request(signer, tx).await?;

    let pending = client
        .provider()
        .send_tx_envelope(envelope)
        .await
        .map_err(|e| TxError::Send(e.to_string()))?;

    let tx_hash = *pending.tx_hash();
    info!(%tx_hash, %to, %value, "submitted ETH transfer");
    Ok(tx_hash)
}
