//! Subcommand handlers.

mod block;
mod compare;
mod consensus;
mod load;
mod report;
mod scan;
mod watch;

use crate::cli::{Cli, Command};
use serde::Serialize;

pub use consensus::analyze_network;
pub use load::{load_sample_chain, sample_chain};
pub use report::build_report;

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Load { db, blocks } => load::run(&db, blocks, json).await,
        Command::Block { height, db, rpc } => block::run(height, db, rpc, json).await,
        Command::ScanErrors { db } => scan::run(&db, json).await,
        Command::Compare { db1, db2 } => compare::run(&db1, &db2, json).await,
        Command::Consensus { config } => consensus::run(&config, json).await,
        Command::Watch { rpc, interval } => watch::run(&rpc, interval, json).await,
        Command::Report {
            config,
            output,
            scan,
            compare,
        } => report::run(&config, &output, scan, compare, json).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
