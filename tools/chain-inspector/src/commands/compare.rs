use ci_04_diagnostics::{compare_nodes, render_comparison_text, ComparisonResult};
use std::path::Path;

use crate::sources::NodeSource;

/// Open both stores and compare them.
pub(super) async fn compare_stores(db1: &Path, db2: &Path) -> anyhow::Result<ComparisonResult> {
    let (a, b) = tokio::try_join!(NodeSource::open_local(db1), NodeSource::open_local(db2))?;
    Ok(compare_nodes(
        &a,
        &b,
        &db1.display().to_string(),
        &db2.display().to_string(),
    ))
}

pub(super) async fn run(db1: &Path, db2: &Path, json: bool) -> anyhow::Result<()> {
    let result = compare_stores(db1, db2).await?;

    if json {
        super::print_json(&result)
    } else {
        print!("{}", render_comparison_text(&result));
        Ok(())
    }
}
