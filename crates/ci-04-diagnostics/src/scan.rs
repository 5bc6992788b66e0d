//! # Integrity Scan
//!
//! Walks heights `0..=max` of one chain and records every problem found.

use crate::errors::{BlockError, ErrorCode};
use serde::{Deserialize, Serialize};
use shared_types::{Block, BlockHeight, BlockReader, SourceLookupError, GENESIS_PREV_HASH};

/// Outcome of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorScanResult {
    /// Store path or node URL that was scanned.
    pub path: String,
    pub scanned_at: String,
    pub max_height: BlockHeight,
    /// Blocks that could be read.
    pub total_blocks: usize,
    pub error_count: usize,
    pub errors: Vec<BlockError>,
    pub healthy: bool,
}

/// Scan `reader`, labelling the result with `label`.
pub fn scan_errors(reader: &dyn BlockReader, label: &str) -> ErrorScanResult {
    let max_height = reader.max_height();
    let mut errors = Vec::new();
    let mut total_blocks = 0;

    if let Some(max) = max_height {
        let mut previous: Option<Block> = None;
        for height in 0..=max {
            match reader.read_block(height) {
                Ok(block) => {
                    total_blocks += 1;
                    check_block(height, &block, previous.as_ref(), &mut errors);
                    previous = Some(block);
                }
                Err(SourceLookupError::NotFound { .. }) => {
                    errors.push(BlockError::new(
                        height,
                        ErrorCode::MissingBlock,
                        "no block stored at this height",
                    ));
                    previous = None;
                }
                Err(SourceLookupError::Unavailable { reason, .. }) => {
                    errors.push(BlockError::new(height, ErrorCode::BlockFetchFailed, reason));
                    previous = None;
                }
            }
        }
    }

    tracing::debug!(
        path = label,
        blocks = total_blocks,
        errors = errors.len(),
        "[ci-04] scan complete"
    );

    ErrorScanResult {
        path: label.to_string(),
        scanned_at: crate::now_stamp(),
        max_height: max_height.unwrap_or(0),
        total_blocks,
        error_count: errors.len(),
        healthy: errors.is_empty(),
        errors,
    }
}

fn check_block(
    height: BlockHeight,
    block: &Block,
    previous: Option<&Block>,
    errors: &mut Vec<BlockError>,
) {
    if block.height != height {
        errors.push(BlockError::new(
            height,
            ErrorCode::HeightMismatch,
            format!("stored block claims height {}", block.height),
        ));
    }

    let recomputed = block.recompute_hash();
    if recomputed != block.hash {
        errors.push(BlockError::new(
            height,
            ErrorCode::HashMismatch,
            format!("stored {} but content hashes to {}", block.hash, recomputed),
        ));
    }

    let expected_prev = match (height, previous) {
        (0, _) => Some(GENESIS_PREV_HASH),
        (_, Some(prev)) => Some(prev.hash.as_str()),
        // Gap below: linkage cannot be checked.
        (_, None) => None,
    };
    if let Some(expected) = expected_prev {
        if block.prev_hash != expected {
            errors.push(BlockError::new(
                height,
                ErrorCode::PrevHashMismatch,
                format!("prevHash {} does not match {}", block.prev_hash, expected),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::StaticChain;

    fn linked(count: u64) -> Vec<Block> {
        let mut prev = GENESIS_PREV_HASH.to_string();
        (0..count)
            .map(|h| {
                let block = Block::new(h, prev.clone(), format!("tx{h}"), 1_000 + h as i64);
                prev = block.hash.clone();
                block
            })
            .collect()
    }

    fn codes(result: &ErrorScanResult) -> Vec<(BlockHeight, ErrorCode)> {
        result.errors.iter().map(|e| (e.height, e.code)).collect()
    }

    #[test]
    fn test_clean_chain_is_healthy() {
        let chain = StaticChain::from_blocks(linked(5));
        let result = scan_errors(&chain, "./node1-data");

        assert!(result.healthy);
        assert_eq!(result.total_blocks, 5);
        assert_eq!(result.max_height, 4);
        assert_eq!(result.error_count, 0);
        assert_eq!(result.path, "./node1-data");
    }

    #[test]
    fn test_tampered_data_is_a_hash_mismatch() {
        let mut blocks = linked(3);
        blocks[1].data = "forged".to_string();
        let result = scan_errors(&StaticChain::from_blocks(blocks), "db");

        assert_eq!(codes(&result), vec![(1, ErrorCode::HashMismatch)]);
        assert!(!result.healthy);
    }

    #[test]
    fn test_broken_link_is_reported() {
        let mut blocks = linked(3);
        blocks[2] = Block::new(2, "not-the-parent", "tx2", 1_002);
        let result = scan_errors(&StaticChain::from_blocks(blocks), "db");

        assert_eq!(codes(&result), vec![(2, ErrorCode::PrevHashMismatch)]);
    }

    #[test]
    fn test_gap_is_missing_and_skips_link_check() {
        let mut blocks = linked(4);
        blocks.remove(1);
        let result = scan_errors(&StaticChain::from_blocks(blocks), "db");

        assert_eq!(codes(&result), vec![(1, ErrorCode::MissingBlock)]);
        assert_eq!(result.total_blocks, 3);
    }

    #[test]
    fn test_misplaced_block_is_height_mismatch() {
        let blocks = linked(3);
        let mut chain = StaticChain::from_blocks(blocks[..2].to_vec());
        chain.insert_at(2, blocks[0].clone());
        let result = scan_errors(&chain, "db");

        assert!(codes(&result).contains(&(2, ErrorCode::HeightMismatch)));
    }

    #[test]
    fn test_empty_store() {
        let result = scan_errors(&StaticChain::new(), "empty");
        assert!(result.healthy);
        assert_eq!(result.total_blocks, 0);
    }

    #[test]
    fn test_result_field_names() {
        let result = scan_errors(&StaticChain::from_blocks(linked(1)), "db");
        let json = serde_json::to_value(&result).unwrap();
        for key in ["path", "scannedAt", "maxHeight", "totalBlocks", "errorCount", "errors", "healthy"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
