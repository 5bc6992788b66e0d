//! Chain Inspector binary.

use std::process::ExitCode;

use clap::Parser;

use chain_inspector::{commands, init_tracing, Cli, TelemetryConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = TelemetryConfig::from_env().with_verbosity(cli.verbose, cli.quiet);
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("⚠️  Logging disabled: {e:#}");
    }

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
