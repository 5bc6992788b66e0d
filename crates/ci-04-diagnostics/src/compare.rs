//! # Two-Node Comparison
//!
//! Lines two chains up height by height.

use crate::errors::{BlockError, ErrorCode};
use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, BlockReader};

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub node1: String,
    pub node2: String,
    pub node1_height: Option<BlockHeight>,
    pub node2_height: Option<BlockHeight>,
    /// Heights at which both nodes hold the same block.
    pub matching_blocks: usize,
    /// Lowest height with any mismatch.
    pub first_divergence: Option<BlockHeight>,
    pub mismatches: Vec<BlockError>,
    /// Same tip and no mismatches.
    pub in_sync: bool,
}

/// Compare two chains over `0..=max(height1, height2)`.
pub fn compare_nodes(
    node1: &dyn BlockReader,
    node2: &dyn BlockReader,
    name1: &str,
    name2: &str,
) -> ComparisonResult {
    let height1 = node1.max_height();
    let height2 = node2.max_height();
    let mut matching_blocks = 0;
    let mut mismatches = Vec::new();

    if let Some(top) = height1.max(height2) {
        for height in 0..=top {
            let a = node1.read_block(height).ok();
            let b = node2.read_block(height).ok();
            match (a, b) {
                (Some(a), Some(b)) if a.hash == b.hash => matching_blocks += 1,
                (Some(a), Some(b)) => mismatches.push(BlockError::new(
                    height,
                    ErrorCode::HashDivergence,
                    format!("{name1} has {} but {name2} has {}", a.hash, b.hash),
                )),
                (Some(_), None) => mismatches.push(BlockError::new(
                    height,
                    ErrorCode::MissingOnNode2,
                    format!("block missing on {name2}"),
                )),
                (None, Some(_)) => mismatches.push(BlockError::new(
                    height,
                    ErrorCode::MissingOnNode1,
                    format!("block missing on {name1}"),
                )),
                (None, None) => {}
            }
        }
    }

    let first_divergence = mismatches.first().map(|m| m.height);
    let in_sync = mismatches.is_empty() && height1 == height2;

    tracing::debug!(
        node1 = name1,
        node2 = name2,
        matching_blocks,
        mismatches = mismatches.len(),
        "[ci-04] comparison complete"
    );

    ComparisonResult {
        node1: name1.to_string(),
        node2: name2.to_string(),
        node1_height: height1,
        node2_height: height2,
        matching_blocks,
        first_divergence,
        mismatches,
        in_sync,
    }
}
