//! Per-node sync classification.

use crate::domain::consensus_map::ConsensusMap;
use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;
use std::collections::BTreeMap;

/// Position of a node relative to the network height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Synchronized,
    Behind,
    Ahead,
}

impl SyncStatus {
    pub fn from_lag(blocks_behind: i64) -> Self {
        match blocks_behind {
            0 => SyncStatus::Synchronized,
            lag if lag > 0 => SyncStatus::Behind,
            _ => SyncStatus::Ahead,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Synchronized => "synchronized",
            SyncStatus::Behind => "behind",
            SyncStatus::Ahead => "ahead",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sync state of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub height: BlockHeight,
    pub status: SyncStatus,
    /// Network height minus node height; negative when ahead.
    pub blocks_behind: i64,
    pub on_canonical: bool,
}

/// Classify every node, keyed by name.
pub fn classify_nodes(map: &ConsensusMap, canonical: Option<&str>) -> BTreeMap<String, NodeState> {
    let network_height = map.network_height();

    map.node_names()
        .map(|name| {
            let height = map.max_height_of(name).unwrap_or(0);
            let blocks_behind = lag(network_height, height);
            let state = NodeState {
                height,
                status: SyncStatus::from_lag(blocks_behind),
                blocks_behind,
                on_canonical: is_on_canonical(map, name, canonical),
            };
            (name.to_string(), state)
        })
        .collect()
}

fn lag(network_height: BlockHeight, height: BlockHeight) -> i64 {
    let diff = i128::from(network_height) - i128::from(height);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// The canonical node itself, or a node that matches it at every height both
/// have a block for (and shares at least one such height).
fn is_on_canonical(map: &ConsensusMap, name: &str, canonical: Option<&str>) -> bool {
    let Some(canonical) = canonical else {
        return false;
    };
    if name == canonical {
        return true;
    }

    let mut shared = 0usize;
    for (height, hash) in map.answers_of(name) {
        match map.hash_of(canonical, height) {
            Some(expected) if expected == hash => shared += 1,
            Some(_) => return false,
            None => {}
        }
    }
    shared > 0
}
