//! Address-scoped log watching.
//!
//! Subscribes to logs emitted by a single address over a websocket
//! connection and hands each one to a callback until the subscription dies
//! or a shutdown signal arrives.

use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::rpc::types::{Filter, Log};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::client::EvmClient;

/// Errors from log watching.
#[derive(Debug, Error)]
pub enum LogWatchError {
    /// Subscribing failed, usually because the client is not a websocket
    /// connection.
    #[error("subscription error: {0}")]
    Subscribe(String),

    /// The node closed the subscription stream.
    #[error("subscription stream closed by node")]
    StreamClosed,
}

/// Watches logs emitted by `address`, invoking `on_log` for each one.
///
/// Runs until the shutdown channel fires (clean return) or the node closes
/// the stream ([`LogWatchError::StreamClosed`]). The client must have been
/// dialed with [`EvmClient::connect_ws`]; HTTP connections cannot subscribe.
pub async fn watch_address_logs(
    client: &EvmClient,
    address: Address,
    mut shutdown: oneshot::Receiver<()>,
    mut on_log: impl FnMut(Log),
) -> Result<(), LogWatchError> {
    let filter = Filter::new().address(address);

    let subscription = client
        .provider()
        .subscribe_logs(&filter)
        .await
        .map_err(|e| LogWatchError::Subscribe(e.to_string()))?;
    let mut stream = subscription.into_stream();

    info!(%address, url = client.url(), "watching logs");

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!(%address, "log watcher shutting down");
                return Ok(());
            }
            next = stream.next() => match next {
                Some(log) => {
                    debug!(
                        %address,
                        block = ?log.block_number,
                        tx = ?log.transaction_hash,
                        "log received"
                    );
                    on_log(log);
                }
                None => return Err(LogWatchError::StreamClosed),
            }
        }
    }
}
