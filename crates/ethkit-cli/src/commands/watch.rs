//! `ethkit watch`: stream logs emitted by an address until Ctrl+C.

use std::path::PathBuf;

use ethkit_evm::{logs, Address, EvmClient};
use tokio::sync::oneshot;

use super::util;

/// Run the `watch` subcommand.
pub async fn run(
    address: Address,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let ws_url = config
        .ws_url
        .ok_or("no ws_url in config: log watching needs a websocket endpoint")?;
    let client = EvmClient::connect_ws(&ws_url).await?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        let _ = shutdown_tx.send(());
    });

    println!("Watching {address} (Ctrl+C to stop)...");
    logs::watch_address_logs(&client, address, shutdown_rx, |log| {
        println!(
            "block {:?} tx {:?}: {} topic(s), {} data byte(s)",
            log.block_number,
            log.transaction_hash,
            log.inner.data.topics().len(),
            log.inner.data.data.len()
        );
    })
    .await?;

    Ok(())
}
