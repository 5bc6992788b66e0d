use ci_02_node_rpc::{NodeRpcClient, RpcConfig};
use std::time::Duration;

use crate::watcher::{watch, WatchThresholds};

pub(super) async fn run(url: &str, interval_secs: u64, json: bool) -> anyhow::Result<()> {
    // A slow poll should show up as an error line, not stall the next tick.
    let config = RpcConfig {
        timeout: Duration::from_secs(interval_secs.max(1) * 2),
        max_retries: 0,
        ..RpcConfig::default()
    };
    let client = NodeRpcClient::new(url, config)?;
    watch(
        &client,
        Duration::from_secs(interval_secs),
        WatchThresholds::default(),
        json,
    )
    .await
}
