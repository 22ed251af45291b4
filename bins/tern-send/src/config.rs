//! Fixed run configuration.
//!
//! This tool deliberately has no CLI flags and reads no environment
//! variables; everything is pinned to the testnet demo values here.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tern_client::{parse_tern, ConfirmPolicy};
use tern_wallet::Address;

/// Discovery service for testnet gateway endpoints.
const DISCOVERY_URL: &str = "https://config.ternscan.io";

/// Network environment name passed to discovery.
const NETWORK: &str = "testnet";

/// Plaintext phrase file in the working directory.
const PHRASE_FILE: &str = "mnemonic.txt";

/// Fixed demo destination address.
const DESTINATION: &str = "0:3857db45e256364bf27eb04411eda523f48c16f8ebb6bc94250a7fbed832ce2d";

/// Amount sent per run, in TERN.
const AMOUNT_TERN: &str = "0.01";

/// Resolved run configuration.
pub struct Config {
    /// Discovery service base URL.
    pub discovery_url: String,
    /// Named network environment.
    pub network: String,
    /// Path of the plaintext phrase file.
    pub phrase_path: PathBuf,
    /// Transfer destination.
    pub destination: Address,
    /// Transfer amount in nanotern.
    pub amount: u64,
    /// Optional transfer comment.
    pub comment: Option<String>,
    /// Bounce flag on the outbound message.
    pub bounce: bool,
    /// Confirmation polling policy.
    pub confirm: ConfirmPolicy,
}

impl Config {
    /// The fixed testnet configuration.
    pub fn testnet() -> Result<Self> {
        Ok(Self {
            discovery_url: DISCOVERY_URL.to_string(),
            network: NETWORK.to_string(),
            phrase_path: PathBuf::from(PHRASE_FILE),
            destination: Address::from_str(DESTINATION)
                .context("built-in destination address is invalid")?,
            amount: parse_tern(AMOUNT_TERN).context("built-in amount is invalid")?,
            comment: Some("Hello".to_string()),
            bounce: false,
            confirm: ConfirmPolicy::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_config_builds() {
        let config = Config::testnet().unwrap();
        assert_eq!(config.network, "testnet");
        assert_eq!(config.amount, 10_000_000); // 0.01 TERN
        assert_eq!(config.destination.workchain(), 0);
        assert_eq!(config.confirm.max_attempts, None);
    }
}
