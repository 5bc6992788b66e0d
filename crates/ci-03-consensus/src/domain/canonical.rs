//! Canonical chain selection.
//!
//! A node's score is the sum, over every height it has a block at, of the
//! number of nodes reporting the same hash there. The strictly highest score
//! wins; on a tie the node supplied first keeps the lead.

use crate::domain::consensus_map::ConsensusMap;

/// Agreement score of every node, in supplied order.
pub fn chain_scores(map: &ConsensusMap) -> Vec<(String, usize)> {
    map.node_names()
        .map(|name| {
            let score = map
                .answers_of(name)
                .map(|(height, hash)| map.group_size(height, hash))
                .sum();
            (name.to_string(), score)
        })
        .collect()
}

/// Name of the canonical node, `None` when every score is zero.
pub fn select_canonical(map: &ConsensusMap) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (name, score) in chain_scores(map) {
        let leader_score = best.as_ref().map_or(0, |(_, s)| *s);
        if score > leader_score {
            best = Some((name, score));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consensus_map::NodeInfo;
    use crate::domain::testing::chain;
    use shared_types::StaticChain;

    #[test]
    fn test_majority_wins() {
        let a = chain(&["g", "x"]);
        let b = chain(&["g", "y"]);
        let c = chain(&["g", "y"]);
        let map = ConsensusMap::build(&[
            NodeInfo::from_source("A", &a),
            NodeInfo::from_source("B", &b),
            NodeInfo::from_source("C", &c),
        ]);

        assert_eq!(
            chain_scores(&map),
            vec![("A".into(), 4), ("B".into(), 5), ("C".into(), 5)]
        );
        assert_eq!(select_canonical(&map).as_deref(), Some("B"));
    }

    #[test]
    fn test_tie_goes_to_first_supplied() {
        let a = chain(&["g", "x"]);
        let b = chain(&["g", "y"]);

        let map = ConsensusMap::build(&[NodeInfo::from_source("A", &a), NodeInfo::from_source("B", &b)]);
        assert_eq!(select_canonical(&map).as_deref(), Some("A"));

        let map = ConsensusMap::build(&[NodeInfo::from_source("B", &b), NodeInfo::from_source("A", &a)]);
        assert_eq!(select_canonical(&map).as_deref(), Some("B"));
    }

    #[test]
    fn test_longer_chain_outscores_on_agreement() {
        let a = chain(&["g", "1"]);
        let b = chain(&["g", "1", "2", "3"]);
        let map = ConsensusMap::build(&[NodeInfo::from_source("A", &a), NodeInfo::from_source("B", &b)]);
        assert_eq!(select_canonical(&map).as_deref(), Some("B"));
    }

    #[test]
    fn test_no_blocks_means_no_canonical_chain() {
        let empty = StaticChain::new();
        let map = ConsensusMap::build(&[NodeInfo::from_source("A", &empty)]);
        assert_eq!(select_canonical(&map), None);
    }
}
