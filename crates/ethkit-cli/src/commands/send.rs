//! `ethkit send`: send ETH from a keystore account, then wait for the
//! transaction to be mined.

use std::path::PathBuf;

use ethkit_evm::client::to_core_tx_hash;
use ethkit_evm::{confirm, tx, Address, EvmClient, U256};
use ethkit_signer::KeystoreWallet;

use super::util;

/// Run the `send` subcommand.
pub async fn run(
    to: Address,
    value: U256,
    from: Option<ethkit_core::Address>,
    tip_factor: u64,
    no_wait: bool,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = util::load_config(config)?;

    let passphrase = util::prompt_passphrase("Keystore passphrase")?;
    let wallet = match from {
        Some(address) => KeystoreWallet::open(&config.keystore_dir, address, &passphrase)?,
        None => KeystoreWallet::open_first(&config.keystore_dir, &passphrase)?,
    };
    let signer = wallet.signer_for(from.unwrap_or_else(|| wallet.address()))?;

    let client = EvmClient::connect(&config.rpc_url)?;
    if let Some(expected) = config.chain_id {
        client.expect_chain_id(expected).await?;
    }

    println!("\n=== Send Summary ===");
    println!("  From:       {}", wallet.address());
    println!("  To:         {to}");
    println!("  Value:      {value} wei");
    println!("  Tip factor: {tip_factor}");
    println!("  Endpoint:   {}", config.rpc_url);
    println!("====================\n");

    let tx_hash = tx::send_eth(&client, signer, to, value, tip_factor).await?;
    println!("Submitted: {}", to_core_tx_hash(tx_hash));

    if no_wait {
        return Ok(());
    }

    let receipt = confirm::wait_for_confirmation(&client, tx_hash, &config.confirm).await?;
    println!(
        "Mined in block {} (gas used: {})",
        receipt.block_number.unwrap_or_default(),
        receipt.gas_used
    );

    Ok(())
}
