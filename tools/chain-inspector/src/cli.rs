//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default data directory for single-store commands.
pub const DEFAULT_DB: &str = "./leveldb-data";

/// Inspect local block stores and remote nodes.
#[derive(Parser, Debug)]
#[command(name = "chain-inspector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a linked sample chain into a local store
    Load {
        /// Data directory (created when missing)
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
        /// Number of blocks to write
        #[arg(long, default_value_t = 10)]
        blocks: u64,
    },

    /// Print one block
    Block {
        /// Block height
        height: u64,
        /// Local data directory
        #[arg(long, conflicts_with = "rpc")]
        db: Option<PathBuf>,
        /// Node URL, e.g. http://localhost:8080
        #[arg(long)]
        rpc: Option<String>,
    },

    /// Check a local store for missing, tampered or unlinked blocks
    ScanErrors {
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// Compare two local stores height by height
    Compare {
        #[arg(long, default_value = "./node1-data")]
        db1: PathBuf,
        #[arg(long, default_value = "./node2-data")]
        db2: PathBuf,
    },

    /// Consensus & fork analysis across every node in a network file
    Consensus {
        /// Network config (JSON)
        #[arg(long, default_value = "nodes.json")]
        config: PathBuf,
    },

    /// Poll a node's health endpoint until interrupted
    Watch {
        /// Node URL
        #[arg(long)]
        rpc: String,
        /// Seconds between polls
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },

    /// Write a combined JSON report
    Report {
        /// Network config (JSON)
        #[arg(long, default_value = "nodes.json")]
        config: PathBuf,
        /// Report file
        #[arg(long, default_value = "inspector-report.json")]
        output: PathBuf,
        /// Also scan this data directory
        #[arg(long)]
        scan: Option<PathBuf>,
        /// Also compare these two data directories
        #[arg(long, num_args = 2, value_names = ["DB1", "DB2"])]
        compare: Option<Vec<PathBuf>>,
    },
}
