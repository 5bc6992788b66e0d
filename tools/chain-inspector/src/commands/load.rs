use anyhow::Context;
use ci_01_block_storage::{open_store, OpenMode};
use serde_json::json;
use shared_types::{Block, BlockHeight, GENESIS_PREV_HASH};
use std::path::Path;

/// Seconds between consecutive sample blocks.
const BLOCK_SPACING_SECS: i64 = 10;

/// Build `count` linked blocks starting at `start` (unix seconds).
pub fn sample_chain(count: u64, start: i64) -> Vec<Block> {
    let mut prev = GENESIS_PREV_HASH.to_string();
    (0..count)
        .map(|height| {
            let block = Block::new(
                height,
                prev.clone(),
                format!("Transaction data for block {height}"),
                start + height as i64 * BLOCK_SPACING_SECS,
            );
            prev = block.hash.clone();
            block
        })
        .collect()
}

/// Write a sample chain into the store at `db`, creating it when missing.
///
/// `on_stored` is called after each block lands.
pub fn load_sample_chain(
    db: &Path,
    count: u64,
    start: i64,
    mut on_stored: impl FnMut(BlockHeight),
) -> anyhow::Result<Option<Block>> {
    let mut store = open_store(db, OpenMode::CreateIfMissing)
        .with_context(|| format!("cannot open {}", db.display()))?;

    let mut last = None;
    for block in sample_chain(count, start) {
        store
            .save_block(&block)
            .with_context(|| format!("cannot store block {}", block.height))?;
        on_stored(block.height);
        last = Some(block);
    }
    store.close()?;

    tracing::info!(path = %db.display(), blocks = count, "sample chain loaded");
    Ok(last)
}

pub(super) async fn run(db: &Path, count: u64, json: bool) -> anyhow::Result<()> {
    let path = db.to_path_buf();
    let start = chrono::Utc::now().timestamp();

    let tip = tokio::task::spawn_blocking(move || {
        load_sample_chain(&path, count, start, |height| {
            if !json {
                println!("✔ Block {height} stored");
            }
        })
    })
    .await
    .context("load task panicked")??;

    if json {
        super::print_json(&json!({
            "path": db.display().to_string(),
            "blocksLoaded": count,
            "tipHash": tip.map(|b| b.hash),
        }))?;
    } else {
        println!("\n✅ Loaded {count} blocks into {}", db.display());
    }
    Ok(())
}
