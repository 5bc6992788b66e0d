//! Bincode encoding for stored blocks and metadata values.

use crate::domain::errors::StorageError;
use shared_types::{Block, BlockHeight};

/// Encode a block for storage.
pub fn encode_block(block: &Block) -> Result<Vec<u8>, StorageError> {
    bincode::serialize(block).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })
}

/// Decode a stored block.
pub fn decode_block(bytes: &[u8]) -> Result<Block, StorageError> {
    bincode::deserialize(bytes).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })
}

/// Encode a height marker.
pub fn encode_height(height: BlockHeight) -> Vec<u8> {
    height.to_be_bytes().to_vec()
}

/// Decode a height marker.
pub fn decode_height(bytes: &[u8]) -> Result<BlockHeight, StorageError> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| StorageError::Serialization {
            message: format!("height marker must be 8 bytes, got {}", bytes.len()),
        })?;
    Ok(BlockHeight::from_be_bytes(raw))
}
