use ci_04_diagnostics::{render_scan_text, scan_errors, BlockError, ErrorCode};
use std::path::Path;

use crate::sources::NodeSource;

pub(super) async fn run(db: &Path, json: bool) -> anyhow::Result<()> {
    let source = NodeSource::open_local(db)
        .await
        .map_err(|e| BlockError::new(0, ErrorCode::DbOpenFailed, format!("{e:#}")))?;

    let result = scan_errors(&source, &db.display().to_string());
    tracing::info!(path = %db.display(), errors = result.error_count, "scan complete");

    if json {
        super::print_json(&result)
    } else {
        print!("{}", render_scan_text(&result));
        Ok(())
    }
}
