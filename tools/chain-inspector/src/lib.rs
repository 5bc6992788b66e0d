//! Chain Inspector: operator CLI for local block stores and remote nodes.
//!
//! ## Commands
//!
//! ```text
//! chain-inspector load --db ./node1-data --blocks 10
//! chain-inspector block 5 --db ./node1-data
//! chain-inspector block 5 --rpc http://localhost:8080
//! chain-inspector scan-errors --db ./node1-data
//! chain-inspector compare --db1 ./node1-data --db2 ./node2-data
//! chain-inspector consensus --config nodes.json
//! chain-inspector watch --rpc http://localhost:8080 --interval 2
//! chain-inspector report --config nodes.json --output inspector-report.json
//! ```
//!
//! `--json` switches any command to machine-readable output on stdout. Logs
//! always go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod sources;
pub mod telemetry;
pub mod watcher;

pub use cli::{Cli, Command};
pub use config::{ConfigError, NetworkConfig, NodeConfig};
pub use sources::{resolve_nodes, NodeSource, ResolvedNode};
pub use telemetry::{init_tracing, TelemetryConfig};

/// Version reported by `--version` and written into reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
