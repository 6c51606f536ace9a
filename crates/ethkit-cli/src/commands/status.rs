//! `ethkit status`: poll a transaction hash until it is mined.

use std::path::PathBuf;

use ethkit_core::config::ConfirmConfig;
use ethkit_core::types::TxHash;
use ethkit_evm::client::to_alloy_tx_hash;
use ethkit_evm::{confirm, EvmClient};

use super::util;

/// Run the `status` subcommand.
pub async fn run(
    tx_hash: TxHash,
    max_attempts: Option<u32>,
    interval: Option<u64>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let confirm_config = ConfirmConfig {
        max_attempts: max_attempts.unwrap_or(config.confirm.max_attempts),
        interval_secs: interval.unwrap_or(config.confirm.interval_secs),
    };

    let client = EvmClient::connect(&config.rpc_url)?;
    println!(
        "Polling {tx_hash} (up to {} attempts every {}s)...",
        confirm_config.max_attempts, confirm_config.interval_secs
    );

    let receipt =
        confirm::wait_for_confirmation(&client, to_alloy_tx_hash(tx_hash), &confirm_config)
            .await?;
    println!(
        "Mined in block {} (gas used: {})",
        receipt.block_number.unwrap_or_default(),
        receipt.gas_used
    );

    Ok(())
}
