//! Live node watcher.
//!
//! Polls `/health` on a fixed interval and prints one status line per tick:
//!
//! ```text
//! [14:02:11] HEALTHY | Height:  128 | Peers: 3 | Last: 14:02:09 (2s ago) | Rate: 6.0 blk/min
//! ```

use chrono::{DateTime, Local, TimeZone};
use ci_02_node_rpc::{HealthResponse, NodeRpcClient};
use crossterm::style::Stylize;
use serde::Serialize;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Seconds without a new block before a node is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchThresholds {
    /// Default: 30
    pub slow_after_secs: i64,
    /// Default: 60
    pub stuck_after_secs: i64,
}

impl Default for WatchThresholds {
    fn default() -> Self {
        Self {
            slow_after_secs: 30,
            stuck_after_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WatchStatus {
    Healthy,
    Slow,
    Stuck,
}

impl WatchStatus {
    pub fn classify(secs_since_last: i64, thresholds: &WatchThresholds) -> Self {
        if secs_since_last > thresholds.stuck_after_secs {
            WatchStatus::Stuck
        } else if secs_since_last > thresholds.slow_after_secs {
            WatchStatus::Slow
        } else {
            WatchStatus::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Healthy => "HEALTHY",
            WatchStatus::Slow => "SLOW",
            WatchStatus::Stuck => "STUCK",
        }
    }
}

/// One poll result, as printed in `--json` mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchSample {
    pub time: String,
    pub status: WatchStatus,
    pub height: u64,
    pub peers: u32,
    pub last_block_time: i64,
    pub seconds_since_last: i64,
    pub blocks_per_min: f64,
}

impl WatchSample {
    pub fn new<Tz: TimeZone>(
        now: &DateTime<Tz>,
        health: &HealthResponse,
        thresholds: &WatchThresholds,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let since = (now.timestamp() - health.last_block_time).max(0);
        Self {
            time: now.format("%H:%M:%S").to_string(),
            status: WatchStatus::classify(since, thresholds),
            height: health.height,
            peers: health.peers,
            last_block_time: health.last_block_time,
            seconds_since_last: since,
            blocks_per_min: health.blocks_per_min,
        }
    }

    /// Uncoloured status line. `tz` renders the last block time.
    pub fn line<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let last = tz
            .timestamp_opt(self.last_block_time, 0)
            .single()
            .map_or_else(|| "--:--:--".to_string(), |t| t.format("%H:%M:%S").to_string());
        format!(
            "[{}] {:<7} | Height: {:4} | Peers: {} | Last: {} ({}s ago) | Rate: {:.1} blk/min",
            self.time,
            self.status.as_str(),
            self.height,
            self.peers,
            last,
            self.seconds_since_last,
            self.blocks_per_min
        )
    }
}

fn paint(status: WatchStatus, line: String) -> String {
    match status {
        WatchStatus::Healthy => line.green().to_string(),
        WatchStatus::Slow => line.yellow().to_string(),
        WatchStatus::Stuck => line.red().to_string(),
    }
}

fn print_header(url: &str, every: Duration) {
    let rule = "═".repeat(60);
    println!("{}", rule.as_str().cyan());
    println!("{}", "BHIV BLOCKCHAIN NODE WATCHER".cyan().bold());
    println!("{}", rule.as_str().cyan());
    println!("Watching: {url}");
    println!("Interval: {}s", every.as_secs());
    println!("Press Ctrl+C to stop\n");
}

/// Poll until Ctrl-C. A failed poll prints an error line and the loop goes on.
pub async fn watch(
    client: &NodeRpcClient,
    every: Duration,
    thresholds: WatchThresholds,
    json: bool,
) -> anyhow::Result<()> {
    if !json {
        print_header(client.base_url(), every);
    }

    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = &mut shutdown => {
                result?;
                if !json {
                    println!("\nStopped watching {}", client.base_url());
                }
                return Ok(());
            }
            _ = ticker.tick() => poll_once(client, &thresholds, json).await?,
        }
    }
}

async fn poll_once(
    client: &NodeRpcClient,
    thresholds: &WatchThresholds,
    json: bool,
) -> anyhow::Result<()> {
    let now = Local::now();
    match client.fetch_health().await {
        Ok(health) => {
            let sample = WatchSample::new(&now, &health, thresholds);
            if json {
                println!("{}", serde_json::to_string(&sample)?);
            } else {
                println!("{}", paint(sample.status, sample.line(&Local)));
            }
        }
        Err(e) => {
            tracing::debug!(node = client.base_url(), error = %e, "health poll failed");
            let line = format!("[{}] ERROR   | {}", now.format("%H:%M:%S"), e);
            if json {
                let value = serde_json::json!({
                    "time": now.format("%H:%M:%S").to_string(),
                    "status": "ERROR",
                    "error": e.to_string(),
                });
                println!("{value}");
            } else {
                println!("{}", line.red());
            }
        }
    }
    Ok(())
}
