//! # ethkit CLI
//!
//! Entry point for the `ethkit` binary.
//!
//! Subcommands:
//! - `ethkit init`       : Write a default config and keystore directory
//! - `ethkit new-account`: Generate an encrypted keystore account
//! - `ethkit accounts`   : List keystore accounts
//! - `ethkit balance`    : Query an address's ETH balance
//! - `ethkit send`       : Send ETH and wait for confirmation
//! - `ethkit status`     : Poll a transaction hash until it is mined
//! - `ethkit watch`      : Stream logs emitted by an address

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// ethkit: EVM account, transaction, and confirmation helper.
#[derive(Parser)]
#[command(name = "ethkit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml and create the keystore directory.
    Init {
        /// Data directory (default: ~/.ethkit).
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// HTTP JSON-RPC endpoint to record in the config.
        #[arg(long, default_value = "http://127.0.0.1:8545")]
        rpc_url: String,
    },

    /// Generate a new account, encrypted into the keystore directory.
    NewAccount {
        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// List the accounts in the keystore directory.
    Accounts {
        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Query the ETH balance of an address.
    Balance {
        /// Address to query (0x...).
        address: ethkit_evm::Address,

        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Send ETH from a keystore account and wait until it is mined.
    Send {
        /// Recipient address (0x...).
        #[arg(long)]
        to: ethkit_evm::Address,

        /// Value to send, in wei.
        #[arg(long)]
        value: ethkit_evm::U256,

        /// Sender account (default: first account in the keystore).
        #[arg(long)]
        from: Option<ethkit_core::Address>,

        /// Multiplier applied to the node's suggested priority fee.
        #[arg(long, default_value_t = 1)]
        tip_factor: u64,

        /// Submit without waiting for confirmation.
        #[arg(long)]
        no_wait: bool,

        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Poll a transaction hash until it is mined or attempts run out.
    Status {
        /// Transaction hash (0x...).
        tx_hash: ethkit_core::TxHash,

        /// Override the configured attempt budget.
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Override the configured polling interval, in seconds.
        #[arg(long)]
        interval: Option<u64>,

        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Stream logs emitted by an address until Ctrl+C.
    Watch {
        /// Address to watch (0x...).
        address: ethkit_evm::Address,

        /// Path to config.yaml (default: ~/.ethkit/config.yaml).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, rpc_url } => commands::init::run(data_dir, rpc_url),
        Commands::NewAccount { config } => commands::new_account::run(config),
        Commands::Accounts { config } => commands::accounts::run(config),
        Commands::Balance { address, config } => commands::balance::run(address, config).await,
        Commands::Send {
            to,
            value,
            from,
            tip_factor,
            no_wait,
            config,
        } => commands::send::run(to, value, from, tip_factor, no_wait, config).await,
        Commands::Status {
            tx_hash,
            max_attempts,
            interval,
            config,
        } => commands::status::run(tx_hash, max_attempts, interval, config).await,
        Commands::Watch { address, config } => commands::watch::run(address, config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
