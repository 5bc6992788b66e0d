//! HTTP client for a single chain node.

use crate::error::RpcError;
use crate::retry::with_retry;
use crate::types::{HealthResponse, RpcConfig};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared_types::{Block, BlockHeight};

/// Node RPC client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct NodeRpcClient {
    client: Client,
    base_url: Url,
    config: RpcConfig,
}

impl NodeRpcClient {
    /// Create a client for the node at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str, config: RpcConfig) -> Result<Self, RpcError> {
        let invalid = |reason: String| RpcError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base_url.scheme())));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(RpcError::Http)?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Create a client with default settings.
    pub fn with_defaults(base_url: &str) -> Result<Self, RpcError> {
        Self::new(base_url, RpcConfig::default())
    }

    /// The node's base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `GET /block/{height}`.
    pub async fn fetch_block(&self, height: BlockHeight) -> Result<Block, RpcError> {
        let url = self.endpoint(&format!("block/{height}"));
        let what = format!("fetch block {height}");
        with_retry(self.config.max_retries, self.config.retry_base_delay, &what, || {
            self.get_json::<Block>(&url, Some(height))
        })
        .await
    }

    /// `GET /health`.
    pub async fn fetch_health(&self) -> Result<HealthResponse, RpcError> {
        let url = self.endpoint("health");
        with_retry(
            self.config.max_retries,
            self.config.retry_base_delay,
            "fetch health",
            || self.get_json::<HealthResponse>(&url, None),
        )
        .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        height: Option<BlockHeight>,
    ) -> Result<T, RpcError> {
        tracing::trace!(url, "[ci-02] GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(height) = height {
                return Err(RpcError::BlockNotFound { height });
            }
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| RpcError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            NodeRpcClient::with_defaults("not a url"),
            Err(RpcError::InvalidUrl { .. })
        ));
        assert!(matches!(
            NodeRpcClient::with_defaults("ftp://node:21"),
            Err(RpcError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let client = NodeRpcClient::with_defaults("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.endpoint("health"), "http://localhost:8080/health");
    }
}
