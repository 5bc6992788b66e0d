//! Diagnostic findings and crate errors.

use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;
use std::path::PathBuf;
use thiserror::Error;

/// Kind of problem found at a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The store could not be opened.
    DbOpenFailed,
    /// The record exists but could not be read or decoded.
    BlockFetchFailed,
    /// No block stored at a height below the tip.
    MissingBlock,
    /// The stored block claims a different height than its index.
    HeightMismatch,
    /// Recomputed content hash differs from the stored hash.
    HashMismatch,
    /// Predecessor hash does not match the previous block.
    PrevHashMismatch,
    /// Two nodes hold different blocks at a height.
    HashDivergence,
    MissingOnNode1,
    MissingOnNode2,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DbOpenFailed => "DB_OPEN_FAILED",
            ErrorCode::BlockFetchFailed => "BLOCK_FETCH_FAILED",
            ErrorCode::MissingBlock => "MISSING_BLOCK",
            ErrorCode::HeightMismatch => "HEIGHT_MISMATCH",
            ErrorCode::HashMismatch => "HASH_MISMATCH",
            ErrorCode::PrevHashMismatch => "PREV_HASH_MISMATCH",
            ErrorCode::HashDivergence => "HASH_DIVERGENCE",
            ErrorCode::MissingOnNode1 => "MISSING_ON_NODE1",
            ErrorCode::MissingOnNode2 => "MISSING_ON_NODE2",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockError {
    pub height: BlockHeight,
    pub code: ErrorCode,
    pub msg: String,
}

impl BlockError {
    pub fn new(height: BlockHeight, code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            height,
            code,
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] height {}: {}", self.code, self.height, self.msg)
    }
}

impl std::error::Error for BlockError {}

/// Single-line operator message for a finding.
pub fn format_error(err: &BlockError) -> String {
    format!("❌ {err}")
}

/// Errors from the diagnostics crate itself.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}
