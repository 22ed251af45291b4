//! Endpoint discovery for a named network environment.
//!
//! The discovery service maps a network name ("testnet", "mainnet") to a
//! list of live RPC gateway endpoints. This tool takes the first healthy
//! one; there is no retry or failover, a discovery failure aborts the run.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ClientError;

/// Resolves an RPC endpoint for a named network.
#[async_trait]
pub trait Discovery {
    /// Return the endpoint URL to use for `network`.
    async fn http_endpoint(&self, network: &str) -> Result<String, ClientError>;
}

/// Discovery backed by an HTTP configuration service.
///
/// Queries `GET {base_url}/endpoints?network={network}` and expects a
/// JSON body of the form `{"endpoints": ["https://..."]}`.
pub struct HttpDiscovery {
    base_url: String,
    http: reqwest::Client,
}

impl HttpDiscovery {
    /// Create a discovery client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Discovery for HttpDiscovery {
    async fn http_endpoint(&self, network: &str) -> Result<String, ClientError> {
        let url = format!("{}/endpoints", self.base_url);
        let body: serde_json::Value = self
            .http
            .get(&url)
            .query(&[("network", network)])
            .send()
            .await
            .map_err(|e| ClientError::Discovery(e.to_string()))?
            .error_for_status()
            .map_err(|e| ClientError::Discovery(e.to_string()))?
            .json()
            .await
            .map_err(|e| ClientError::Discovery(format!("bad response body: {e}")))?;

        let endpoint = endpoint_from_response(&body)?;
        debug!(%network, %endpoint, "endpoint resolved");
        Ok(endpoint)
    }
}

/// Pick the first endpoint out of a discovery response body.
fn endpoint_from_response(body: &serde_json::Value) -> Result<String, ClientError> {
    body["endpoints"]
        .as_array()
        .and_then(|list| list.first())
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ClientError::Discovery("no endpoints in response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_endpoint_is_taken() {
        let body = json!({"endpoints": ["https://a.example/rpc", "https://b.example/rpc"]});
        assert_eq!(endpoint_from_response(&body).unwrap(), "https://a.example/rpc");
    }

    #[test]
    fn empty_list_is_an_error() {
        let body = json!({"endpoints": []});
        assert!(matches!(
            endpoint_from_response(&body),
            Err(ClientError::Discovery(_))
        ));
    }

    #[test]
    fn missing_field_is_an_error() {
        let body = json!({"status": "ok"});
        assert!(endpoint_from_response(&body).is_err());
    }

    #[test]
    fn empty_string_endpoint_is_an_error() {
        let body = json!({"endpoints": [""]});
        assert!(endpoint_from_response(&body).is_err());
    }
}
