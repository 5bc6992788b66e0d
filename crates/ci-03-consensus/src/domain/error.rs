//! Error types for consensus analysis.

use thiserror::Error;

/// Errors that abort an analysis call.
///
/// Per-height lookup failures are not errors: a node that cannot produce a
/// block simply has no entry at that height.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no nodes provided for consensus analysis")]
    NoNodesProvided,

    #[error("node name '{name}' supplied more than once")]
    DuplicateNode { name: String },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
