//! Resolve configured nodes into readable chains.

use anyhow::{bail, Context};
use ci_01_block_storage::{open_store, DefaultStore, OpenMode};
use ci_02_node_rpc::{FetchOptions, NodeRpcClient, RemoteChainView, RpcConfig};
use shared_types::{Block, BlockHeight, BlockReader, BlockRef, BlockSource, SourceLookupError};
use std::path::Path;

use crate::config::NodeConfig;

/// A node's chain, local or fetched.
pub enum NodeSource {
    Local(DefaultStore),
    Remote(RemoteChainView),
}

impl NodeSource {
    /// Open a local data directory for inspection. A missing store is an error.
    pub async fn open_local(path: &Path) -> anyhow::Result<Self> {
        let owned = path.to_path_buf();
        let store = tokio::task::spawn_blocking(move || open_store(&owned, OpenMode::MustExist))
            .await
            .context("store open task panicked")?
            .with_context(|| format!("cannot open {}", path.display()))?;
        Ok(Self::Local(store))
    }

    /// Prefetch a remote node.
    pub async fn fetch_remote(
        url: &str,
        rpc: &RpcConfig,
        fetch: &FetchOptions,
    ) -> anyhow::Result<Self> {
        let client = NodeRpcClient::new(url, rpc.clone())?;
        let view = RemoteChainView::fetch(&client, fetch)
            .await
            .with_context(|| format!("cannot fetch {url}"))?;
        Ok(Self::Remote(view))
    }

    /// Path or URL, for messages.
    pub fn describe(&self) -> String {
        match self {
            NodeSource::Local(store) => store.location().display().to_string(),
            NodeSource::Remote(view) => view.base_url().to_string(),
        }
    }
}

impl BlockSource for NodeSource {
    fn max_height(&self) -> Option<BlockHeight> {
        match self {
            NodeSource::Local(store) => BlockSource::max_height(store),
            NodeSource::Remote(view) => BlockSource::max_height(view),
        }
    }

    fn block_at(&self, height: BlockHeight) -> Result<BlockRef, SourceLookupError> {
        match self {
            NodeSource::Local(store) => store.block_at(height),
            NodeSource::Remote(view) => view.block_at(height),
        }
    }
}

impl BlockReader for NodeSource {
    fn max_height(&self) -> Option<BlockHeight> {
        BlockSource::max_height(self)
    }

    fn read_block(&self, height: BlockHeight) -> Result<Block, SourceLookupError> {
        match self {
            NodeSource::Local(store) => store.read_block(height),
            NodeSource::Remote(view) => view.read_block(height),
        }
    }
}

/// A configured node that could be opened.
pub struct ResolvedNode {
    pub name: String,
    pub source: NodeSource,
}

/// Open every node concurrently. `db_path` wins over `rpc_url`.
///
/// Nodes that cannot be opened are skipped with a warning. The result keeps
/// config order.
pub async fn resolve_nodes(
    nodes: &[NodeConfig],
    rpc: &RpcConfig,
    fetch: &FetchOptions,
) -> Vec<ResolvedNode> {
    let attempts = nodes.iter().map(|node| async move {
        let source = resolve_node(node, rpc, fetch).await;
        (node, source)
    });

    futures::future::join_all(attempts)
        .await
        .into_iter()
        .filter_map(|(node, source)| match source {
            Ok(source) => {
                tracing::debug!(node = %node.name, source = %source.describe(), "node resolved");
                Some(ResolvedNode {
                    name: node.name.clone(),
                    source,
                })
            }
            Err(e) => {
                tracing::warn!("⚠️  Warning: Cannot open {}: {:#}", node.name, e);
                None
            }
        })
        .collect()
}

async fn resolve_node(
    node: &NodeConfig,
    rpc: &RpcConfig,
    fetch: &FetchOptions,
) -> anyhow::Result<NodeSource> {
    if let Some(path) = &node.db_path {
        return NodeSource::open_local(path).await;
    }
    if let Some(url) = &node.rpc_url {
        return NodeSource::fetch_remote(url, rpc, fetch).await;
    }
    bail!("node '{}' has neither db_path nor rpc_url", node.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn local(name: &str, path: PathBuf) -> NodeConfig {
        NodeConfig {
            name: name.to_string(),
            db_path: Some(path),
            rpc_url: None,
        }
    }

    #[tokio::test]
    async fn test_unusable_nodes_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good");
        let mut store = open_store(&good, OpenMode::CreateIfMissing).unwrap();
        store.save_block(&Block::new(0, "0", "genesis", 1)).unwrap();
        store.close().unwrap();

        let nodes = vec![
            local("missing", dir.path().join("nope")),
            local("good", good),
            NodeConfig {
                name: "bad-url".to_string(),
                db_path: None,
                rpc_url: Some("ftp://example".to_string()),
            },
        ];

        let resolved = resolve_nodes(&nodes, &RpcConfig::for_testing(), &FetchOptions::default()).await;
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "good");
        assert_eq!(BlockSource::max_height(&resolved[0].source), Some(0));
    }

    #[tokio::test]
    async fn test_db_path_preferred_over_rpc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n");
        open_store(&path, OpenMode::CreateIfMissing)
            .unwrap()
            .save_block(&Block::new(0, "0", "g", 1))
            .unwrap();

        let node = NodeConfig {
            name: "n".to_string(),
            db_path: Some(path),
            // Unreachable; must not be contacted.
            rpc_url: Some("http://127.0.0.1:1".to_string()),
        };
        let resolved = resolve_nodes(&[node], &RpcConfig::for_testing(), &FetchOptions::default()).await;
        assert!(matches!(resolved[0].source, NodeSource::Local(_)));
    }
}
