//! tern-send — one-shot testnet transfer.
//!
//! Provisions (or reloads) a mnemonic-backed wallet, resolves a testnet
//! RPC gateway, submits a single fixed transfer and polls until the
//! wallet seqno advances. No flags, no environment configuration; exits
//! 0 on confirmation, non-zero with a logged error chain otherwise.

use anyhow::{Context, Result};
use tracing::info;

mod config;
mod run;

use config::Config;
use tern_client::{HttpDiscovery, HttpLedgerClient};
use tern_wallet::FsPhraseStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::testnet().context("failed to build configuration")?;

    info!(
        network = %config.network,
        phrase_file = %config.phrase_path.display(),
        dest = %config.destination,
        "starting tern-send"
    );

    let discovery = HttpDiscovery::new(config.discovery_url.clone());
    let store = FsPhraseStore::new(config.phrase_path.clone());

    run::run(&discovery, &store, HttpLedgerClient::connect, &config).await
}
