use anyhow::Context;
use ci_04_diagnostics::{scan_errors, write_report, FullReport};
use std::path::{Path, PathBuf};

use crate::sources::NodeSource;

/// Assemble a report from whichever sections were requested.
///
/// A consensus failure leaves that section out instead of failing the report.
pub async fn build_report(
    config: &Path,
    scan: Option<&Path>,
    compare: Option<(&Path, &Path)>,
) -> anyhow::Result<FullReport> {
    let mut report = FullReport::new(crate::VERSION);

    if let Some(db) = scan {
        let source = NodeSource::open_local(db).await?;
        report = report.with_error_scan(scan_errors(&source, &db.display().to_string()));
    }

    if let Some((db1, db2)) = compare {
        report = report.with_comparison(super::compare::compare_stores(db1, db2).await?);
    }

    match super::consensus::analyze_network(config).await {
        Ok(result) => report = report.with_consensus(result),
        Err(e) => tracing::warn!("consensus section skipped: {e:#}"),
    }

    Ok(report)
}

pub(super) async fn run(
    config: &Path,
    output: &Path,
    scan: Option<PathBuf>,
    compare: Option<Vec<PathBuf>>,
    json: bool,
) -> anyhow::Result<()> {
    let pair = match compare.as_deref() {
        Some([a, b]) => Some((a.as_path(), b.as_path())),
        _ => None,
    };

    let report = build_report(config, scan.as_deref(), pair).await?;
    write_report(&report, output).with_context(|| format!("cannot write {}", output.display()))?;

    if json {
        super::print_json(&report)?;
    } else {
        println!("✅ Report saved to: {}", output.display());
    }
    Ok(())
}
