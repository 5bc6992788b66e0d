//! Logging setup.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: full filter directive, wins over everything else
//! - `CI_LOG_LEVEL`: log level (default: info)
//! - `CI_JSON_LOGS`: `true` for JSON log lines (default: false)
//!
//! `--verbose` and `--quiet` override `CI_LOG_LEVEL`. Logs go to stderr.

use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("CI_LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            json_logs: lookup("CI_JSON_LOGS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Apply the `--verbose` / `--quiet` flags.
    pub fn with_verbosity(mut self, verbose: bool, quiet: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
        } else if quiet {
            self.log_level = "error".to_string();
        }
        self
    }
}

/// Install the global subscriber.
pub fn init_tracing(config: &TelemetryConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::debug!(level = %config.log_level, json = config.json_logs, "logging initialized");
    Ok(())
}
