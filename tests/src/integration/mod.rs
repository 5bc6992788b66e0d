//! Cross-crate flows.
//!
//! - `local_network`: stores on disk → consensus engine
//! - `mixed_network`: local stores plus mocked remote nodes
//! - `diagnostics`: scan, compare and report over real stores

mod diagnostics;
mod local_network;
mod mixed_network;

#[cfg(test)]
pub(crate) mod fixtures {
    use ci_01_block_storage::{open_store, OpenMode};
    use shared_types::{Block, GENESIS_PREV_HASH};
    use std::path::{Path, PathBuf};

    /// A linked chain whose block at height `h` carries `payloads[h]`.
    pub fn linked_chain(payloads: &[&str]) -> Vec<Block> {
        let mut prev = GENESIS_PREV_HASH.to_string();
        payloads
            .iter()
            .enumerate()
            .map(|(h, data)| {
                let block = Block::new(h as u64, prev.clone(), *data, 1_700_000_000 + h as i64 * 10);
                prev = block.hash.clone();
                block
            })
            .collect()
    }

    /// Write `blocks` into a fresh store at `root/name`.
    pub fn write_store(root: &Path, name: &str, blocks: &[Block]) -> PathBuf {
        let path = root.join(name);
        let mut store = open_store(&path, OpenMode::CreateIfMissing).unwrap();
        for block in blocks {
            store.save_block(block).unwrap();
        }
        store.close().unwrap();
        path
    }

    /// Write a network config listing `(name, db_path)` pairs and `(name, url)` pairs.
    pub fn write_config(
        root: &Path,
        local: &[(&str, &PathBuf)],
        remote: &[(&str, &str)],
    ) -> PathBuf {
        let mut nodes: Vec<serde_json::Value> = local
            .iter()
            .map(|(name, path)| serde_json::json!({"name": name, "db_path": path}))
            .collect();
        nodes.extend(
            remote
                .iter()
                .map(|(name, url)| serde_json::json!({"name": name, "rpc_url": url})),
        );

        let path = root.join("nodes.json");
        std::fs::write(&path, serde_json::json!({ "nodes": nodes }).to_string()).unwrap();
        path
    }
}
