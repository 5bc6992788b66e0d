//! Wire types and client settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Current chain height of the node.
    pub height: u64,
    /// Unix seconds of the most recent block.
    pub last_block_time: i64,
    /// Connected peer count.
    #[serde(default)]
    pub peers: u32,
    /// Recent block production rate.
    #[serde(default)]
    pub blocks_per_min: f64,
    /// Free-form status reported by the node.
    #[serde(default)]
    pub status: String,
}

/// Client settings.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Per-request timeout (default: 10s)
    pub timeout: Duration,
    /// Connect timeout (default: 3s)
    pub connect_timeout: Duration,
    /// Retries after the first attempt on transient failures (default: 2)
    pub max_retries: u32,
    /// First backoff delay, doubled per retry (default: 200ms)
    pub retry_base_delay: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(200),
        }
    }
}

impl RpcConfig {
    /// No retries and short timeouts, for tests.
    pub fn for_testing() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            max_retries: 0,
            retry_base_delay: Duration::from_millis(10),
        }
    }
}
