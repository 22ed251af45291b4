//! Wallet error types.

use thiserror::Error;

/// Errors that can occur during wallet provisioning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Phrase store I/O failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid BIP-39 mnemonic phrase.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Key derivation failure.
    #[error("key derivation: {0}")]
    KeyDerivation(String),

    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        WalletError::Io(e.to_string())
    }
}
