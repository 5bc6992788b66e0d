//! Network health verdict.

use crate::domain::config::AnalysisConfig;
use crate::domain::node_state::NodeState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall verdict, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Warning,
    Critical,
}

impl NetworkHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkHealth::Excellent => "EXCELLENT",
            NetworkHealth::Good => "GOOD",
            NetworkHealth::Fair => "FAIR",
            NetworkHealth::Poor => "POOR",
            NetworkHealth::Warning => "WARNING",
            NetworkHealth::Critical => "CRITICAL",
        }
    }

    /// Display label with its status marker.
    pub fn label(&self) -> &'static str {
        match self {
            NetworkHealth::Excellent => "✅ EXCELLENT",
            NetworkHealth::Good => "🟢 GOOD",
            NetworkHealth::Fair => "🟡 FAIR",
            NetworkHealth::Poor => "🟠 POOR",
            NetworkHealth::Warning => "⚠️  WARNING",
            NetworkHealth::Critical => "🔴 CRITICAL",
        }
    }
}

impl std::fmt::Display for NetworkHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of nodes that are both at the network height and on the canonical
/// chain, in percent.
pub fn sync_percentage(node_states: &BTreeMap<String, NodeState>) -> f64 {
    if node_states.is_empty() {
        return 0.0;
    }
    let in_sync = node_states
        .values()
        .filter(|s| s.blocks_behind == 0 && s.on_canonical)
        .count();
    in_sync as f64 / node_states.len() as f64 * 100.0
}

/// Fork count decides first; otherwise the sync percentage does.
pub fn assess_health(
    fork_count: usize,
    node_states: &BTreeMap<String, NodeState>,
    config: &AnalysisConfig,
) -> NetworkHealth {
    if fork_count > config.critical_fork_count {
        return NetworkHealth::Critical;
    }
    if fork_count > 0 {
        return NetworkHealth::Warning;
    }

    match sync_percentage(node_states) {
        p if p >= 90.0 => NetworkHealth::Excellent,
        p if p >= 70.0 => NetworkHealth::Good,
        p if p >= 50.0 => NetworkHealth::Fair,
        _ => NetworkHealth::Poor,
    }
}
