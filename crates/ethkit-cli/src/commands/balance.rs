//! `ethkit balance`: query the ETH balance of an address.

use std::path::PathBuf;

use ethkit_core::chain::KnownChain;
use ethkit_evm::{Address, EvmClient};

use super::util;

/// Run the `balance` subcommand.
pub async fn run(
    address: Address,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let client = EvmClient::connect(&config.rpc_url)?;
    let chain_id = match config.chain_id {
        Some(expected) => client.expect_chain_id(expected).await?,
        None => client.chain_id().await?,
    };

    let balance = client.balance(address).await?;
    println!("{address} on {}: {balance} wei", KnownChain::label(chain_id));

    Ok(())
}
