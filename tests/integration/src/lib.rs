//! Integration tests for ethkit.
//!
//! Node-dependent tests are `#[ignore]`d and run against a local Anvil
//! instance:
//!
//! ```bash
//! anvil &
//! ANVIL_URL=http://127.0.0.1:8545 \
//! ANVIL_PRIVATE_KEY=ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80 \
//!     cargo test -p ethkit-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy::primitives::{Address, U256};
    use ethkit_core::config::Config;
    use ethkit_evm::{confirm, tx, EvmClient};
    use ethkit_signer::{keystore, KeystoreWallet, LocalSigner, Signer};

    fn env_anvil() -> Option<(String, LocalSigner)> {
        let url = std::env::var("ANVIL_URL").ok()?;
        let key_hex = std::env::var("ANVIL_PRIVATE_KEY").ok()?;
        let signer = LocalSigner::from_hex(&key_hex).ok()?;
        Some((url, signer))
    }

    // -----------------------------------------------------------------
    // init flow: keystore + config, no node needed
    // -----------------------------------------------------------------

    #[test]
    fn keystore_and_config_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join(".ethkit");
        let keystore_dir = data_dir.join("keystore");
        std::fs::create_dir_all(&keystore_dir).unwrap();

        // 1. Generate a keystore account
        let passphrase = "integration-test-pw";
        let (address, ks_path) = keystore::create(&keystore_dir, passphrase).unwrap();
        assert!(ks_path.exists(), "keystore file should exist");

        // 2. Open it through the wallet and check the signing invariant
        let wallet = KeystoreWallet::open(&keystore_dir, address, passphrase).unwrap();
        assert_eq!(wallet.address(), address);
        assert!(wallet.signer_for(ethkit_core::Address([0xee; 20])).is_err());

        // 3. Write and reload config.yaml
        let config = Config {
            rpc_url: "http://127.0.0.1:8545".into(),
            ws_url: None,
            keystore_dir: keystore_dir.clone(),
            chain_id: Some(31337),
            confirm: Default::default(),
        };
        let config_path = data_dir.join("config.yaml");
        std::fs::write(&config_path, config.to_yaml().unwrap()).unwrap();

        let loaded = Config::from_file(&config_path).unwrap();
        assert_eq!(loaded.keystore_dir, keystore_dir);
        assert_eq!(loaded.chain_id, Some(31337));
    }

    // -----------------------------------------------------------------
    // chain queries against Anvil
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn chain_queries_on_anvil() {
        let Some((anvil_url, signer)) = env_anvil() else {
            eprintln!("skipping: set ANVIL_URL and ANVIL_PRIVATE_KEY to run");
            return;
        };

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = EvmClient::connect(&anvil_url).unwrap();

            let chain_id = client.chain_id().await.unwrap();
            assert_eq!(chain_id, 31337, "Anvil default chain ID");

            let sender = ethkit_evm::client::to_alloy_address(signer.address());
            let balance = client.balance(sender).await.unwrap();
            assert!(balance > U256::ZERO, "funded Anvil account expected");

            let gas_price = client.gas_price().await.unwrap();
            assert!(gas_price > 0);
            let base_fee = client.latest_base_fee().await.unwrap();
            assert!(base_fee > 0);
        });
    }

    // -----------------------------------------------------------------
    // transaction options prepared from chain state
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn prepare_options_on_anvil() {
        let Some((anvil_url, signer)) = env_anvil() else {
            eprintln!("skipping: set ANVIL_URL and ANVIL_PRIVATE_KEY to run");
            return;
        };

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = EvmClient::connect(&anvil_url).unwrap();
            let sender = ethkit_evm::client::to_alloy_address(signer.address());
            let pending = client.pending_nonce(sender).await.unwrap();

            // Offset shifts past transfers queued locally but not submitted.
            let value = U256::from(42u64);
            let opts = tx::TxOptions::prepare(&client, sender, 2, value, 3)
                .await
                .expect("options should fill from chain state");

            assert_eq!(opts.chain_id, 31337);
            assert_eq!(opts.nonce, pending + 2);
            assert_eq!(opts.gas_limit, tx::DEFAULT_CALL_GAS_LIMIT);
            assert_eq!(opts.value, value);
            assert!(opts.fees.max_fee_per_gas > 0);
            assert!(opts.fees.max_fee_per_gas >= opts.fees.max_priority_fee_per_gas);
        });
    }

    // -----------------------------------------------------------------
    // full transfer + confirmation flow against Anvil
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn transfer_and_confirm_on_anvil() {
        let Some((anvil_url, signer)) = env_anvil() else {
            eprintln!("skipping: set ANVIL_URL and ANVIL_PRIVATE_KEY to run");
            return;
        };

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = EvmClient::connect(&anvil_url).unwrap();

            // Anvil default account 1
            let recipient: Address = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
                .parse()
                .unwrap();
            let before = client.balance(recipient).await.unwrap();

            let value = U256::from(1_000_000_000_000_000u64); // 0.001 ETH
            let tx_hash = tx::send_eth(&client, &signer, recipient, value, 1)
                .await
                .expect("transfer should succeed on Anvil");

            let receipt =
                confirm::wait_until_mined(&client, tx_hash, 20, Duration::from_millis(250))
                    .await
                    .expect("transfer should be mined");
            assert_eq!(receipt.transaction_hash, tx_hash);

            let after = client.balance(recipient).await.unwrap();
            assert_eq!(after - before, value);
        });
    }

    // -----------------------------------------------------------------
    // keystore-backed wallet signs the transfer
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn keystore_wallet_transfer_on_anvil() {
        let Some((anvil_url, signer)) = env_anvil() else {
            eprintln!("skipping: set ANVIL_URL and ANVIL_PRIVATE_KEY to run");
            return;
        };

        let tmp = tempfile::tempdir().unwrap();
        let (address, _) = keystore::import(tmp.path(), "test", signer.signing_key()).unwrap();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let wallet = KeystoreWallet::open(tmp.path(), address, "test").unwrap();
            let from = wallet.address();
            let signer = wallet.signer_for(from).unwrap();

            let client = EvmClient::connect(&anvil_url).unwrap();
            let recipient: Address = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
                .parse()
                .unwrap();

            let tx_hash = tx::send_eth(&client, signer, recipient, U256::from(1u64), 1)
                .await
                .expect("keystore-backed transfer should succeed");

            let receipt =
                confirm::wait_until_mined(&client, tx_hash, 20, Duration::from_millis(250))
                    .await
                    .expect("transfer should be mined");
            assert!(receipt.status());
        });
    }
}
