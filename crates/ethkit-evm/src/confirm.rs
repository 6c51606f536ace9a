//! Bounded polling for transaction finality.
//!
//! Fixed-interval, attempt-budgeted, no backoff or jitter: adequate for
//! manual and CLI use, and intentionally not a confirmation service. The
//! loop lives behind a small trait so its retry contract is testable
//! without a node.

use std::time::Duration;

use alloy::primitives::B256;
use alloy::providers::Provider;
use alloy::rpc::types::TransactionReceipt;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use ethkit_core::config::ConfirmConfig;

use crate::client::EvmClient;

/// Errors from confirmation polling.
#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("transaction {tx_hash} still pending after {attempts} attempts")]
    ExhaustedRetries { tx_hash: B256, attempts: u32 },

    #[error("transaction {tx_hash} reverted")]
    TransactionReverted { tx_hash: B256 },

    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Where a transaction currently stands on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// The node does not know the hash (yet).
    NotFound,
    /// Known but not included in a block.
    Pending,
    /// Included in a block.
    Mined,
}

/// A receipt that can report whether its transaction succeeded.
pub trait ReceiptStatus {
    fn succeeded(&self) -> bool;
}

impl ReceiptStatus for TransactionReceipt {
    fn succeeded(&self) -> bool {
        self.status()
    }
}

/// Source of transaction status and receipts, usually an [`EvmClient`].
#[async_trait]
pub trait StatusSource {
    type Receipt: ReceiptStatus;

    /// Looks the transaction up by hash.
    async fn transaction_status(&self, tx_hash: B256) -> Result<TxStatus, ConfirmError>;

    /// Fetches the receipt; `None` when the node has not indexed it yet.
    async fn transaction_receipt(&self, tx_hash: B256)
        -> Result<Option<Self::Receipt>, ConfirmError>;
}

#[async_trait]
impl StatusSource for EvmClient {
    type Receipt = TransactionReceipt;

    async fn transaction_status(&self, tx_hash: B256) -> Result<TxStatus, ConfirmError> {
        let tx = self
            .provider()
            .get_transaction_by_hash(tx_hash)
            .await
            .map_err(|e| ConfirmError::Rpc(e.to_string()))?;

        Ok(match tx {
            None => TxStatus::NotFound,
            Some(tx) if tx.block_number.is_none() => TxStatus::Pending,
            Some(_) => TxStatus::Mined,
        })
    }

    async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, ConfirmError> {
        self.provider()
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| ConfirmError::Rpc(e.to_string()))
    }
}

/// Polls until the transaction is mined, then returns its receipt.
///
/// Each attempt sleeps `interval`, queries the transaction's status, and on
/// anything other than "mined with an indexed receipt" burns one unit of the
/// attempt budget. A hash the node has not seen yet counts as still pending,
/// not as a failure; only the exhausted budget ends the loop early. A mined
/// transaction whose receipt reports failure yields
/// [`ConfirmError::TransactionReverted`].
///
/// Worst-case wall time is `max_attempts * interval`.
pub async fn wait_until_mined<S: StatusSource + Sync>(
    source: &S,
    tx_hash: B256,
    max_attempts: u32,
    interval: Duration,
) -> Result<S::Receipt, ConfirmError> {
    let mut remaining = max_attempts;

    loop {
        if remaining == 0 {
            warn!(%tx_hash, attempts = max_attempts, "confirmation attempts exhausted");
            return Err(ConfirmError::ExhaustedRetries {
                tx_hash,
                attempts: max_attempts,
            });
        }

        tokio::time::sleep(interval).await;

        let status = source.transaction_status(tx_hash).await?;
        debug!(%tx_hash, ?status, remaining, "polled transaction");

        if status == TxStatus::Mined {
            // The receipt can lag inclusion on nodes that index lazily;
            // a missing receipt counts as still pending.
            if let Some(receipt) = source.transaction_receipt(tx_hash).await? {
                if !receipt.succeeded() {
                    return Err(ConfirmError::TransactionReverted { tx_hash });
                }
                return Ok(receipt);
            }
        }

        remaining -= 1;
    }
}

/// [`wait_until_mined`] with attempts and interval taken from a
/// [`ConfirmConfig`].
pub async fn wait_for_confirmation(
    client: &EvmClient,
    tx_hash: B256,
    config: &ConfirmConfig,
) -> Result<TransactionReceipt, ConfirmError> {
    wait_until_mined(
        client,
        tx_hash,
        config.max_attempts,
        Duration::from_secs(config.interval_secs),
    )
    .await
}
