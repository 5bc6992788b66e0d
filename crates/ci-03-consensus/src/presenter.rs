//! # Result Presenter
//!
//! Text and JSON renderings of a `ConsensusResult`.

use crate::domain::{ConsensusResult, NodeState};
use std::fmt::Write;

const RULE_WIDTH: usize = 72;

/// Pretty-printed JSON with the documented field names.
pub fn render_json(result: &ConsensusResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Human-readable report. Same input, same output.
pub fn render_text(result: &ConsensusResult) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result, &rule);
    out
}

fn write_report(out: &mut String, result: &ConsensusResult, rule: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "CONSENSUS ANALYSIS REPORT")?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\n📊 NETWORK OVERVIEW:")?;
    writeln!(out, "  Scan Time:         {}", result.timestamp)?;
    writeln!(out, "  Total Nodes:       {}", result.total_nodes)?;
    writeln!(out, "  Network Health:    {}", result.network_health.label())?;
    writeln!(out, "  Canonical Chain:   {}", result.canonical_name())?;
    writeln!(out, "  Consensus Height:  {}", result.consensus_height)?;
    writeln!(out, "  Fork Points:       {}", result.fork_points.len())?;

    if result.has_forks() {
        writeln!(out, "\n🔀 FORK ANALYSIS:")?;
        for (i, fork) in result.fork_points.iter().enumerate() {
            writeln!(out, "  Fork #{}:", i + 1)?;
            writeln!(out, "    Height:   {}", fork.height)?;
            writeln!(out, "    Branches: {}", fork.branches)?;
            writeln!(out, "    Affected: [{}]", fork.affected_nodes.join(", "))?;
        }
    }

    writeln!(out, "\n🖥️  NODE STATUS:")?;
    for (name, state) in &result.node_states {
        writeln!(out, "  {} {}:", status_icon(state), name)?;
        writeln!(out, "      Height:        {}", state.height)?;
        writeln!(out, "      Status:        {}", state.status)?;
        writeln!(out, "      Blocks Behind: {}", state.blocks_behind)?;
        writeln!(out, "      On Canonical:  {}", state.on_canonical)?;
    }

    writeln!(out, "\n💡 RECOMMENDATIONS:")?;
    if result.recommendations.is_empty() {
        writeln!(out, "  No issues detected - network is healthy")?;
    }
    for (i, line) in result.recommendations.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, line)?;
    }

    writeln!(out, "{rule}")
}

fn status_icon(state: &NodeState) -> &'static str {
    if !state.on_canonical {
        "❌"
    } else if state.blocks_behind > 10 {
        "🔴"
    } else if state.blocks_behind > 0 {
        "⚠️"
    } else {
        "✅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForkPoint, NetworkHealth, SyncStatus};
    use std::collections::BTreeMap;

    fn sample() -> ConsensusResult {
        ConsensusResult {
            timestamp: "2024-03-01 12:30:05".to_string(),
            total_nodes: 2,
            canonical_chain: Some("A".to_string()),
            consensus_height: 4,
            fork_points: vec![ForkPoint {
                height: 5,
                branches: 2,
                affected_nodes: vec!["A".into(), "B".into()],
            }],
            node_states: BTreeMap::from([
                (
                    "A".to_string(),
                    NodeState {
                        height: 5,
                        status: SyncStatus::Synchronized,
                        blocks_behind: 0,
                        on_canonical: true,
                    },
                ),
                (
                    "B".to_string(),
                    NodeState {
                        height: 5,
                        status: SyncStatus::Synchronized,
                        blocks_behind: 0,
                        on_canonical: false,
                    },
                ),
            ]),
            recommendations: vec![
                "⚠️  Fork detected at 1 point(s)".to_string(),
                "   Height 5: 2 branches affecting 2 nodes".to_string(),
            ],
            network_health: NetworkHealth::Warning,
        }
    }

    #[test]
    fn test_text_sections() {
        let text = render_text(&sample());

        assert!(text.contains("CONSENSUS ANALYSIS REPORT"));
        assert!(text.contains("  Network Health:    ⚠️  WARNING\n"));
        assert!(text.contains("  Canonical Chain:   A\n"));
        assert!(text.contains("  Fork #1:\n    Height:   5\n    Branches: 2\n    Affected: [A, B]\n"));
        assert!(text.contains("  ✅ A:\n"));
        assert!(text.contains("  ❌ B:\n"));
        assert!(text.contains("  1. ⚠️  Fork detected at 1 point(s)\n"));
        assert!(text.ends_with(&format!("{}\n", "═".repeat(RULE_WIDTH))));
    }

    #[test]
    fn test_text_omits_fork_section_without_forks() {
        let mut result = sample();
        result.fork_points.clear();
        assert!(!render_text(&result).contains("FORK ANALYSIS"));
    }

    #[test]
    fn test_text_is_reproducible() {
        assert_eq!(render_text(&sample()), render_text(&sample()));
    }

    #[test]
    fn test_status_icons() {
        let mut state = NodeState {
            height: 0,
            status: SyncStatus::Behind,
            blocks_behind: 11,
            on_canonical: true,
        };
        assert_eq!(status_icon(&state), "🔴");
        state.blocks_behind = 2;
        assert_eq!(status_icon(&state), "⚠️");
        state.on_canonical = false;
        assert_eq!(status_icon(&state), "❌");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = render_json(&sample()).unwrap();
        assert!(json.contains("\"forkPoints\""));
        assert!(json.contains("\"networkHealth\": \"WARNING\""));
    }
}
