//! # Consensus Map
//!
//! `height -> [hash group]`, where a hash group is the ordered list of nodes
//! reporting that hash at that height.
//!
//! Every source is asked for every height at most once. The answers are kept
//! per node so later stages (canonical scoring, node agreement) reuse them
//! instead of querying again.

use shared_types::{BlockHeight, BlockSource};
use std::collections::BTreeMap;

/// One node as supplied to an analysis call.
#[derive(Clone, Copy)]
pub struct NodeInfo<'a> {
    /// Unique node name.
    pub name: &'a str,
    /// Highest height the node claims to have.
    pub max_height: BlockHeight,
    /// Where the node's blocks are read from.
    pub source: &'a dyn BlockSource,
}

impl<'a> NodeInfo<'a> {
    pub fn new(name: &'a str, max_height: BlockHeight, source: &'a dyn BlockSource) -> Self {
        Self {
            name,
            max_height,
            source,
        }
    }

    /// Take the max height from the source itself; an empty source counts as 0.
    pub fn from_source(name: &'a str, source: &'a dyn BlockSource) -> Self {
        Self::new(name, source.max_height().unwrap_or(0), source)
    }
}

impl std::fmt::Debug for NodeInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeInfo")
            .field("name", &self.name)
            .field("max_height", &self.max_height)
            .finish_non_exhaustive()
    }
}

/// Nodes that agree on the block at one height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    pub hash: String,
    /// Node names in supplied order.
    pub nodes: Vec<String>,
}

/// The map for one analysis call.
#[derive(Debug, Clone, Default)]
pub struct ConsensusMap {
    /// Heights with at least one answer. Groups are in first-seen order.
    heights: BTreeMap<BlockHeight, Vec<HashGroup>>,
    /// Per node (input order): name, claimed max height, and its answers.
    nodes: Vec<NodeAnswers>,
    network_height: BlockHeight,
}

#[derive(Debug, Clone)]
struct NodeAnswers {
    name: String,
    max_height: BlockHeight,
    hashes: BTreeMap<BlockHeight, String>,
}

impl ConsensusMap {
    /// Query every node for every height up to the network height.
    ///
    /// A node is only asked for heights up to its own max height. Lookup
    /// failures leave the node out of that height.
    pub fn build(nodes: &[NodeInfo<'_>]) -> Self {
        let network_height = nodes.iter().map(|n| n.max_height).max().unwrap_or(0);
        let mut map = Self {
            heights: BTreeMap::new(),
            nodes: nodes
                .iter()
                .map(|n| NodeAnswers {
                    name: n.name.to_string(),
                    max_height: n.max_height,
                    hashes: BTreeMap::new(),
                })
                .collect(),
            network_height,
        };

        if nodes.is_empty() {
            return map;
        }

        for height in 0..=network_height {
            for (index, node) in nodes.iter().enumerate() {
                if node.max_height < height {
                    continue;
                }
                match node.source.block_at(height) {
                    Ok(block) => map.record(index, height, block.hash),
                    Err(e) => {
                        tracing::trace!(node = node.name, height, error = %e, "[ci-03] no data");
                    }
                }
            }
        }

        map
    }

    fn record(&mut self, index: usize, height: BlockHeight, hash: String) {
        let name = self.nodes[index].name.clone();
        let groups = self.heights.entry(height).or_default();
        match groups.iter_mut().find(|g| g.hash == hash) {
            Some(group) => group.nodes.push(name),
            None => groups.push(HashGroup {
                hash: hash.clone(),
                nodes: vec![name],
            }),
        }
        self.nodes[index].hashes.insert(height, hash);
    }

    /// Highest claimed height across all nodes.
    pub fn network_height(&self) -> BlockHeight {
        self.network_height
    }

    /// Hash groups at `height`, empty when no node reported a block there.
    pub fn groups_at(&self, height: BlockHeight) -> &[HashGroup] {
        self.heights.get(&height).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct hashes at `height`.
    pub fn group_count(&self, height: BlockHeight) -> usize {
        self.groups_at(height).len()
    }

    /// Heights with at least one answer, ascending.
    pub fn heights(&self) -> impl Iterator<Item = (BlockHeight, &[HashGroup])> + '_ {
        self.heights.iter().map(|(h, g)| (*h, g.as_slice()))
    }

    /// Number of nodes that reported `hash` at `height`.
    pub fn group_size(&self, height: BlockHeight, hash: &str) -> usize {
        self.groups_at(height)
            .iter()
            .find(|g| g.hash == hash)
            .map_or(0, |g| g.nodes.len())
    }

    /// Node names in supplied order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Claimed max height of a node.
    pub fn max_height_of(&self, name: &str) -> Option<BlockHeight> {
        self.node(name).map(|n| n.max_height)
    }

    /// Every `(height, hash)` a node reported, ascending by height.
    pub fn answers_of(&self, name: &str) -> impl Iterator<Item = (BlockHeight, &str)> + '_ {
        self.node(name)
            .into_iter()
            .flat_map(|n| n.hashes.iter().map(|(h, hash)| (*h, hash.as_str())))
    }

    /// Hash a node reported at `height`.
    pub fn hash_of(&self, name: &str, height: BlockHeight) -> Option<&str> {
        self.node(name)?.hashes.get(&height).map(String::as_str)
    }

    fn node(&self, name: &str) -> Option<&NodeAnswers> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
