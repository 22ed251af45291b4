//! Remote ledger client.
//!
//! `LedgerClient` is the seam the rest of the tool talks through; the
//! production implementation is a jsonrpsee HTTP client bound to the
//! endpoint that discovery resolved. Tests substitute the trait.

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use tracing::debug;

use tern_wallet::Address;

use crate::error::ClientError;
use crate::message::ExternalMessage;

/// Balance, seqno and submission operations against a wallet address.
#[async_trait]
pub trait LedgerClient {
    /// Current balance of `address` in nanotern.
    async fn balance(&self, address: &Address) -> Result<u64, ClientError>;

    /// Current seqno of `address`. An uninitialized account reports 0.
    async fn seqno(&self, address: &Address) -> Result<u32, ClientError>;

    /// Submit a signed external message.
    ///
    /// Acceptance only means the gateway took the message; finalization
    /// is observed separately through seqno drift.
    async fn send_external(&self, message: &ExternalMessage) -> Result<(), ClientError>;
}

/// JSON-RPC ledger client over HTTP.
pub struct HttpLedgerClient {
    inner: jsonrpsee::http_client::HttpClient,
}

impl HttpLedgerClient {
    /// Bind a client to a resolved endpoint URL.
    pub fn connect(endpoint: &str) -> Result<Self, ClientError> {
        let inner = jsonrpsee::http_client::HttpClientBuilder::default()
            .build(endpoint)
            .map_err(|e| ClientError::Rpc(format!("failed to build client: {e}")))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn balance(&self, address: &Address) -> Result<u64, ClientError> {
        let mut params = ArrayParams::new();
        params.insert(address.to_string()).unwrap();
        self.inner
            .request("getbalance", params)
            .await
            .map_err(|e| ClientError::Rpc(format!("getbalance: {e}")))
    }

    async fn seqno(&self, address: &Address) -> Result<u32, ClientError> {
        let mut params = ArrayParams::new();
        params.insert(address.to_string()).unwrap();
        self.inner
            .request("getseqno", params)
            .await
            .map_err(|e| ClientError::Rpc(format!("getseqno: {e}")))
    }

    async fn send_external(&self, message: &ExternalMessage) -> Result<(), ClientError> {
        let hex = message.encode_hex()?;
        let mut params = ArrayParams::new();
        params.insert(hex).unwrap();
        let accepted: bool = self
            .inner
            .request("sendrawmessage", params)
            .await
            .map_err(|e| ClientError::Transfer(format!("sendrawmessage: {e}")))?;
        if !accepted {
            return Err(ClientError::Transfer("message rejected by gateway".into()));
        }
        debug!(seqno = message.seqno, dest = %message.dest, "external message accepted");
        Ok(())
    }
}
