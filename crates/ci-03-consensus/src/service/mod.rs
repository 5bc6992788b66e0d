//! # Consensus Analyzer
//!
//! Runs the full analysis pipeline over a set of nodes.

use crate::domain::{
    assess_health, classify_nodes, detect_forks, find_consensus_height,
    generate_recommendations, select_canonical, AnalysisConfig, AnalysisError, AnalysisResult,
    ConsensusMap, ConsensusResult, NodeInfo,
};
use crate::ports::{SystemTimeSource, TimeSource};
use std::collections::HashSet;


/// Timestamp layout of `ConsensusResult::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Consensus & fork analyzer.
///
/// Holds no state between calls; one instance can serve concurrent callers.
pub struct ConsensusAnalyzer {
    config: AnalysisConfig,
    time_source: Box<dyn TimeSource>,
}

impl Default for ConsensusAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl ConsensusAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            time_source: Box::new(SystemTimeSource),
        }
    }

    /// Replace the clock (tests pin it for reproducible output).
    pub fn with_time_source(mut self, time_source: impl TimeSource + 'static) -> Self {
        self.time_source = Box::new(time_source);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse the given nodes.
    ///
    /// Node order matters: it decides hash group order and canonical ties.
    pub fn analyze(&self, nodes: &[NodeInfo<'_>]) -> AnalysisResult<ConsensusResult> {
        if nodes.is_empty() {
            return Err(AnalysisError::NoNodesProvided);
        }
        let mut seen = HashSet::with_capacity(nodes.len());
        if let Some(dup) = nodes.iter().find(|n| !seen.insert(n.name)) {
            return Err(AnalysisError::DuplicateNode {
                name: dup.name.to_string(),
            });
        }

        let timestamp = self.time_source.now().format(TIMESTAMP_FORMAT).to_string();
        let map = ConsensusMap::build(nodes);

        let fork_points = detect_forks(&map);
        let canonical_chain = select_canonical(&map);
        let consensus_height = find_consensus_height(&map);
        let node_states = classify_nodes(&map, canonical_chain.as_deref());
        let recommendations = generate_recommendations(
            &fork_points,
            &node_states,
            canonical_chain.as_deref(),
            &self.config,
        );
        let network_health = assess_health(fork_points.len(), &node_states, &self.config);

        tracing::info!(
            nodes = nodes.len(),
            network_height = map.network_height(),
            forks = fork_points.len(),
            consensus_height,
            canonical = canonical_chain.as_deref().unwrap_or(""),
            health = %network_health,
            "[ci-03] consensus analysis complete"
        );

        Ok(ConsensusResult {
            timestamp,
            total_nodes: nodes.len(),
            canonical_chain,
            consensus_height,
            fork_points,
            node_states,
            recommendations,
            network_health,
        })
    }
}
