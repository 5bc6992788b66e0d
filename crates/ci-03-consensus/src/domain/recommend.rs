//! Operator recommendations.

use crate::domain::config::AnalysisConfig;
use crate::domain::fork::ForkPoint;
use crate::domain::node_state::NodeState;
use std::collections::BTreeMap;

/// Remediation lines: fork summary first, then per-node actions in name
/// order, or a single all-clear line.
pub fn generate_recommendations(
    forks: &[ForkPoint],
    node_states: &BTreeMap<String, NodeState>,
    canonical: Option<&str>,
    config: &AnalysisConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    if !forks.is_empty() {
        lines.push(format!("⚠️  Fork detected at {} point(s)", forks.len()));
        for fork in forks {
            lines.push(format!(
                "   Height {}: {} branches affecting {} nodes",
                fork.height,
                fork.branches,
                fork.affected_nodes.len()
            ));
        }
    }

    for (name, state) in node_states {
        if !state.on_canonical {
            lines.push(format!(
                "🔧 {}: Resync from canonical chain ({})",
                name,
                canonical.unwrap_or("none")
            ));
        }
        if state.blocks_behind > config.critical_lag {
            lines.push(format!(
                "📥 {}: Critically behind - sync {} blocks urgently",
                name, state.blocks_behind
            ));
        } else if state.blocks_behind > 0 {
            lines.push(format!(
                "📥 {}: Sync {} blocks from network",
                name, state.blocks_behind
            ));
        }
    }

    if lines.is_empty() {
        lines.push("✅ All nodes in perfect consensus - no action needed".to_string());
    }

    lines
}
