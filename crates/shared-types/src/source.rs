//! # Block Source Contracts
//!
//! Read-only views over one logical chain. Local stores and remote nodes both
//! implement these, which lets the consensus engine and the diagnostics treat
//! them uniformly.

use crate::entities::{Block, BlockHeight, BlockRef};
use crate::errors::SourceLookupError;

/// Minimal view the consensus engine needs from a chain.
pub trait BlockSource: Send + Sync {
    /// Highest height this view knows of, `None` when empty or unknown.
    fn max_height(&self) -> Option<BlockHeight>;

    /// Identity of the block at `height`.
    fn block_at(&self, height: BlockHeight) -> Result<BlockRef, SourceLookupError>;
}

/// Full-block view used by the scanner and the block viewer.
pub trait BlockReader: Send + Sync {
    /// Highest height this view knows of, `None` when empty or unknown.
    fn max_height(&self) -> Option<BlockHeight>;

    /// The complete block at `height`.
    fn read_block(&self, height: BlockHeight) -> Result<Block, SourceLookupError>;
}

/// A fixed, in-memory chain view.
///
/// Used for prefetched remote data and in tests. Heights without an entry are
/// gaps.
#[derive(Debug, Clone, Default)]
pub struct StaticChain {
    blocks: std::collections::BTreeMap<BlockHeight, Block>,
    declared_height: Option<BlockHeight>,
}

impl StaticChain {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view from a list of blocks, keyed by their own heights.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut chain = Self::new();
        for block in blocks {
            chain.insert(block);
        }
        chain
    }

    /// Add or replace the block at its height.
    pub fn insert(&mut self, block: Block) {
        self.blocks.insert(block.height, block);
    }

    /// Place a block at `height` regardless of the height it claims.
    ///
    /// Remote nodes are indexed by the height that was requested, so a node
    /// serving the wrong block for a height stays detectable.
    pub fn insert_at(&mut self, height: BlockHeight, block: Block) {
        self.blocks.insert(height, block);
    }

    /// Pin the reported max height (a remote node may report a tip it failed
    /// to serve).
    pub fn with_declared_height(mut self, height: BlockHeight) -> Self {
        self.declared_height = Some(height);
        self
    }

    /// Number of blocks held.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are held.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn tip(&self) -> Option<BlockHeight> {
        self.declared_height
            .or_else(|| self.blocks.keys().next_back().copied())
    }
}

impl BlockReader for StaticChain {
    fn max_height(&self) -> Option<BlockHeight> {
        self.tip()
    }

    fn read_block(&self, height: BlockHeight) -> Result<Block, SourceLookupError> {
        self.blocks
            .get(&height)
            .cloned()
            .ok_or(SourceLookupError::NotFound { height })
    }
}

impl BlockSource for StaticChain {
    fn max_height(&self) -> Option<BlockHeight> {
        self.tip()
    }

    fn block_at(&self, height: BlockHeight) -> Result<BlockRef, SourceLookupError> {
        self.blocks
            .get(&height)
            .map(Block::to_ref)
            .ok_or(SourceLookupError::NotFound { height })
    }
}
