//! Consensus height.

use crate::domain::consensus_map::ConsensusMap;
use shared_types::BlockHeight;

/// Highest height with exactly one hash group, scanning down from the network
/// height. `0` when no such height exists; callers tell that apart from a
/// genuine agreement at genesis by checking the node count.
pub fn find_consensus_height(map: &ConsensusMap) -> BlockHeight {
    (0..=map.network_height())
        .rev()
        .find(|height| map.group_count(*height) == 1)
        .unwrap_or(0)
}
