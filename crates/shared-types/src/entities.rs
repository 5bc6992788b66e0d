//! # Core Domain Entities
//!
//! Defines the block as it is stored locally and served by remote nodes.
//!
//! A block is identified by its height. It carries its own content hash and
//! the hash of its predecessor, which is what links the chain together.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Position of a block in its chain. Genesis is height 0.
pub type BlockHeight = u64;

/// Predecessor hash used by the genesis block.
pub const GENESIS_PREV_HASH: &str = "0";

/// A block as persisted by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block height in the chain.
    #[serde(alias = "Height")]
    pub height: BlockHeight,
    /// Hex-encoded content hash.
    #[serde(alias = "Hash")]
    pub hash: String,
    /// Hash of the parent block (creates the chain linkage).
    #[serde(alias = "prevHash", alias = "PrevHash")]
    pub prev_hash: String,
    /// Opaque block payload.
    #[serde(default, alias = "Data")]
    pub data: String,
    /// Unix timestamp (seconds) when the block was produced.
    #[serde(default, alias = "Timestamp")]
    pub timestamp: i64,
}

impl Block {
    /// Build a block and compute its hash from the given content.
    pub fn new(
        height: BlockHeight,
        prev_hash: impl Into<String>,
        data: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        let prev_hash = prev_hash.into();
        let data = data.into();
        let hash = compute_block_hash(height, &prev_hash, &data, timestamp);
        Self {
            height,
            hash,
            prev_hash,
            data,
            timestamp,
        }
    }

    /// Whether this is the first block of a chain.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }

    /// Recompute the content hash from the block fields.
    pub fn recompute_hash(&self) -> String {
        compute_block_hash(self.height, &self.prev_hash, &self.data, self.timestamp)
    }

    /// The identity-only view of this block.
    pub fn to_ref(&self) -> BlockRef {
        BlockRef {
            hash: self.hash.clone(),
            prev_hash: self.prev_hash.clone(),
        }
    }
}

/// The two hashes that identify a block's position in a chain.
///
/// This is all the consensus engine ever looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRef {
    /// Content hash of the block.
    pub hash: String,
    /// Content hash of the predecessor.
    pub prev_hash: String,
}

impl From<Block> for BlockRef {
    fn from(block: Block) -> Self {
        Self {
            hash: block.hash,
            prev_hash: block.prev_hash,
        }
    }
}

/// Compute the content hash of a block.
///
/// Lowercase hex SHA-256 over `height || prev_hash || data || timestamp`, all
/// rendered as decimal or raw strings.
pub fn compute_block_hash(
    height: BlockHeight,
    prev_hash: &str,
    data: &str,
    timestamp: i64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(height.to_string().as_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(data.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
