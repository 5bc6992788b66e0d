use anyhow::{bail, Context};
use ci_02_node_rpc::{FetchOptions, RpcConfig};
use ci_03_consensus::{render_json, render_text, ConsensusAnalyzer, ConsensusResult, NodeInfo};
use std::path::Path;

use crate::config::NetworkConfig;
use crate::sources::resolve_nodes;

/// Load the network file, open every usable node and run the analysis.
///
/// Fails when the file is invalid or when no node could be opened.
pub async fn analyze_network(config_path: &Path) -> anyhow::Result<ConsensusResult> {
    let network = NetworkConfig::load(config_path)?;
    let resolved = resolve_nodes(&network.nodes, &RpcConfig::default(), &FetchOptions::default()).await;
    if resolved.is_empty() {
        bail!("No valid nodes found in {}", config_path.display());
    }

    let nodes: Vec<NodeInfo<'_>> = resolved
        .iter()
        .map(|node| NodeInfo::from_source(&node.name, &node.source))
        .collect();

    ConsensusAnalyzer::default()
        .analyze(&nodes)
        .context("consensus analysis failed")
}

pub(super) async fn run(config: &Path, json: bool) -> anyhow::Result<()> {
    let result = analyze_network(config).await?;
    if json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_text(&result));
    }
    Ok(())
}
