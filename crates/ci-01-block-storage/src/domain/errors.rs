//! # Domain Errors
//!
//! Error types for the block store.

use shared_types::{BlockHeight, SourceLookupError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during block store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No block exists at this height.
    #[error("No block at height {height}")]
    HeightNotFound { height: BlockHeight },

    /// The store was opened in `MustExist` mode and nothing is there.
    #[error("No block store at {}", path.display())]
    NotFound { path: PathBuf },

    /// Database I/O error.
    #[error("Database error: {message}")]
    Database { message: String },

    /// Stored bytes could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StorageError {
    /// Convert into the lookup error reported through the block source traits.
    pub fn into_lookup(self, height: BlockHeight) -> SourceLookupError {
        match self {
            StorageError::HeightNotFound { height } => SourceLookupError::NotFound { height },
            other => SourceLookupError::Unavailable {
                height,
                reason: other.to_string(),
            },
        }
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl From<KVStoreError> for StorageError {
    fn from(err: KVStoreError) -> Self {
        StorageError::Database {
            message: err.to_string(),
        }
    }
}
