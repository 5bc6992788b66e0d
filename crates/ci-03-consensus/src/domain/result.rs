//! The record produced by one analysis call.

use crate::domain::fork::ForkPoint;
use crate::domain::health::NetworkHealth;
use crate::domain::node_state::NodeState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_types::BlockHeight;
use std::collections::BTreeMap;

/// Outcome of a consensus analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    /// Local wall-clock time of the analysis, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub total_nodes: usize,
    /// Name of the canonical node; serialized as `""` when there is none.
    #[serde(
        serialize_with = "serialize_canonical",
        deserialize_with = "deserialize_canonical"
    )]
    pub canonical_chain: Option<String>,
    pub consensus_height: BlockHeight,
    pub fork_points: Vec<ForkPoint>,
    pub node_states: BTreeMap<String, NodeState>,
    pub recommendations: Vec<String>,
    pub network_health: NetworkHealth,
}

impl ConsensusResult {
    /// Canonical chain name, `""` when there is none.
    pub fn canonical_name(&self) -> &str {
        self.canonical_chain.as_deref().unwrap_or("")
    }

    pub fn has_forks(&self) -> bool {
        !self.fork_points.is_empty()
    }
}

fn serialize_canonical<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(value.as_deref().unwrap_or(""))
}

fn deserialize_canonical<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let name = String::deserialize(d)?;
    Ok(if name.is_empty() { None } else { Some(name) })
}
