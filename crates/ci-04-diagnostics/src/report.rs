//! # Full Report
//!
//! One JSON document bundling whichever results were produced.

use crate::compare::ComparisonResult;
use crate::errors::DiagnosticsError;
use crate::scan::ErrorScanResult;
use ci_03_consensus::ConsensusResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullReport {
    pub timestamp: String,
    /// Version of the tool that produced the report.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_scan: Option<ErrorScanResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusResult>,
}

impl FullReport {
    /// An empty report stamped with the current time.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            timestamp: crate::now_stamp(),
            version: version.into(),
            error_scan: None,
            comparison: None,
            consensus: None,
        }
    }

    pub fn with_error_scan(mut self, scan: ErrorScanResult) -> Self {
        self.error_scan = Some(scan);
        self
    }

    pub fn with_comparison(mut self, comparison: ComparisonResult) -> Self {
        self.comparison = Some(comparison);
        self
    }

    pub fn with_consensus(mut self, consensus: ConsensusResult) -> Self {
        self.consensus = Some(consensus);
        self
    }
}

/// Write `report` to `path` as pretty JSON.
pub fn write_report(report: &FullReport, path: &Path) -> Result<(), DiagnosticsError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| DiagnosticsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "[ci-04] report written");
    Ok(())
}
