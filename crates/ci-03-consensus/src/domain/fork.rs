//! Fork detection.

use crate::domain::consensus_map::ConsensusMap;
use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;

/// A height at which nodes report more than one hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkPoint {
    pub height: BlockHeight,
    /// Number of distinct hashes (always ≥ 2).
    pub branches: usize,
    /// Every node with a block at this height, group by group.
    pub affected_nodes: Vec<String>,
}

/// One fork point per height with more than one hash group, ascending.
pub fn detect_forks(map: &ConsensusMap) -> Vec<ForkPoint> {
    map.heights()
        .filter(|(_, groups)| groups.len() > 1)
        .map(|(height, groups)| ForkPoint {
            height,
            branches: groups.len(),
            affected_nodes: groups.iter().flat_map(|g| g.nodes.iter().cloned()).collect(),
        })
        .collect()
}
