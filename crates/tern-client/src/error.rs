//! Client error types.

use thiserror::Error;

/// Errors that can occur during a network session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Endpoint discovery failure. Fatal; there is no failover.
    #[error("endpoint discovery: {0}")]
    Discovery(String),

    /// RPC transport or query failure.
    #[error("rpc: {0}")]
    Rpc(String),

    /// Transfer submission rejected or failed to serialize.
    #[error("transfer: {0}")]
    Transfer(String),

    /// Confirmation polling gave up after the configured attempts.
    #[error("transaction not confirmed after {attempts} poll(s)")]
    ConfirmTimeout {
        /// Number of polls performed before giving up.
        attempts: u32,
    },

    /// Invalid monetary amount string.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_discovery() {
        let e = ClientError::Discovery("503 from config service".into());
        assert_eq!(e.to_string(), "endpoint discovery: 503 from config service");
    }

    #[test]
    fn display_confirm_timeout() {
        let e = ClientError::ConfirmTimeout { attempts: 40 };
        assert_eq!(e.to_string(), "transaction not confirmed after 40 poll(s)");
    }

    #[test]
    fn clone_and_eq() {
        let e1 = ClientError::Rpc("connection refused".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
