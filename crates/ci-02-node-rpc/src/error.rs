//! Errors returned by the node RPC client.

use shared_types::BlockHeight;
use thiserror::Error;

/// Errors that can occur when talking to a node.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("node returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("node has no block at height {height}")]
    BlockNotFound { height: BlockHeight },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("invalid node URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl RpcError {
    /// Whether another attempt could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            RpcError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            RpcError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
