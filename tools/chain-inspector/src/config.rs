//! Network config file.
//!
//! ```json
//! {
//!   "nodes": [
//!     {"name": "node1", "db_path": "./node1-data"},
//!     {"name": "node2", "rpc_url": "http://localhost:8081"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid network config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("network config lists no nodes")]
    NoNodes,

    #[error("node name '{0}' appears more than once")]
    DuplicateName(String),

    #[error("node '{0}' needs a db_path or an rpc_url")]
    NoSource(String),

    #[error("node entry has an empty name")]
    EmptyName,
}

/// One node entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    /// Local data directory. Takes precedence over `rpc_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

/// The whole network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub nodes: Vec<NodeConfig>,
}

impl NetworkConfig {
    /// Read and validate a network file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        for node in &mut config.nodes {
            node.db_path = node.db_path.take().filter(|p| !p.as_os_str().is_empty());
            node.rpc_url = node.rpc_url.take().filter(|u| !u.trim().is_empty());
        }
        config.validate()?;
        tracing::debug!(path = %path.display(), nodes = config.nodes.len(), "network config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nodes.is_empty() {
            return Err(ConfigError::NoNodes);
        }

        let mut names = HashSet::new();
        for node in &self.nodes {
            if node.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !names.insert(node.name.as_str()) {
                return Err(ConfigError::DuplicateName(node.name.clone()));
            }
            if node.db_path.is_none() && node.rpc_url.is_none() {
                return Err(ConfigError::NoSource(node.name.clone()));
            }
        }
        Ok(())
    }
}
