//! # Error Types
//!
//! Errors that cross crate boundaries through the block source contracts.

use crate::entities::BlockHeight;
use thiserror::Error;

/// Why a single block lookup produced no data.
///
/// Consumers of a `BlockSource` treat every variant as "no block at this
/// height for this node"; the distinction only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceLookupError {
    /// The view has no block at this height.
    #[error("no block at height {height}")]
    NotFound { height: BlockHeight },

    /// The block exists (or may exist) but could not be read.
    #[error("block at height {height} unavailable: {reason}")]
    Unavailable { height: BlockHeight, reason: String },
}

impl SourceLookupError {
    /// Height the failed lookup was for.
    pub fn height(&self) -> BlockHeight {
        match self {
            SourceLookupError::NotFound { height } => *height,
            SourceLookupError::Unavailable { height, .. } => *height,
        }
    }

    /// True when the view positively reported a gap.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceLookupError::NotFound { .. })
    }
}
