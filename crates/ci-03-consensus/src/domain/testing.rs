//! Fixtures shared by the domain tests.

use shared_types::{Block, BlockHeight, StaticChain};

/// A block identified only by its hash.
pub(crate) fn block(height: BlockHeight, hash: &str) -> Block {
    Block {
        height,
        hash: hash.to_string(),
        prev_hash: String::new(),
        data: String::new(),
        timestamp: 0,
    }
}

/// A gap-free chain whose block at height `i` has hash `hashes[i]`.
pub(crate) fn chain(hashes: &[&str]) -> StaticChain {
    StaticChain::from_blocks(
        hashes
            .iter()
            .enumerate()
            .map(|(h, hash)| block(h as BlockHeight, hash)),
    )
}
