//! # ci-04-diagnostics
//!
//! Checks that sit beside the consensus engine:
//!
//! - `scan` - walks one chain and reports integrity problems
//! - `compare` - lines two chains up height by height
//! - `report` - bundles results into a single JSON file
//!
//! Unlike the consensus engine, the scanner recomputes block hashes and checks
//! predecessor links.

pub mod compare;
pub mod errors;
pub mod render;
pub mod report;
pub mod scan;

pub use compare::{compare_nodes, ComparisonResult};
pub use errors::{format_error, BlockError, DiagnosticsError, ErrorCode};
pub use render::{render_comparison_text, render_scan_text};
pub use report::{write_report, FullReport};
pub use scan::{scan_errors, ErrorScanResult};

/// Timestamp of a scan or report, local time.
pub(crate) fn now_stamp() -> String {
    chrono::Local::now()
        .format(ci_03_consensus::service::TIMESTAMP_FORMAT)
        .to_string()
}
