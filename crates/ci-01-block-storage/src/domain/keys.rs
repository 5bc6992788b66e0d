//! # Key Layout
//!
//! Every key starts with a short prefix naming its record type. Heights are
//! encoded big-endian so a prefix scan returns blocks in height order on
//! ordered backends.

use shared_types::BlockHeight;

/// Record types stored in the key-value backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// `blk:{height}` -> encoded block
    BlockByHeight,
    /// `meta:{name}` -> store metadata
    Metadata,
}

impl KeyPrefix {
    /// Raw prefix bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::BlockByHeight => b"blk:",
            KeyPrefix::Metadata => b"meta:",
        }
    }

    /// Build a full key from this prefix and a suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let prefix = self.as_bytes();
        let mut key = Vec::with_capacity(prefix.len() + suffix.len());
        key.extend_from_slice(prefix);
        key.extend_from_slice(suffix);
        key
    }
}

/// Metadata entry holding the highest stored height.
pub const MAX_HEIGHT_META: &[u8] = b"max_height";

/// Key of the block at `height`.
pub fn block_key(height: BlockHeight) -> Vec<u8> {
    KeyPrefix::BlockByHeight.key(&height.to_be_bytes())
}

/// Key of the max-height marker.
pub fn max_height_key() -> Vec<u8> {
    KeyPrefix::Metadata.key(MAX_HEIGHT_META)
}

/// Recover the height from a block key, if it is one.
pub fn height_from_key(key: &[u8]) -> Option<BlockHeight> {
    let suffix = key.strip_prefix(KeyPrefix::BlockByHeight.as_bytes())?;
    let bytes: [u8; 8] = suffix.try_into().ok()?;
    Some(BlockHeight::from_be_bytes(bytes))
}
