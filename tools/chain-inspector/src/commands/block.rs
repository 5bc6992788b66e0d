use chrono::DateTime;
use ci_02_node_rpc::NodeRpcClient;
use ci_04_diagnostics::{BlockError, ErrorCode};
use shared_types::{Block, BlockHeight, BlockReader};
use std::path::PathBuf;

use crate::cli::DEFAULT_DB;
use crate::sources::NodeSource;

pub(super) async fn run(
    height: BlockHeight,
    db: Option<PathBuf>,
    rpc: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let block = match rpc {
        Some(url) => {
            let client = NodeRpcClient::with_defaults(&url)?;
            client
                .fetch_block(height)
                .await
                .map_err(|e| BlockError::new(height, ErrorCode::BlockFetchFailed, e.to_string()))?
        }
        None => {
            let path = db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB));
            let source = NodeSource::open_local(&path)
                .await
                .map_err(|e| BlockError::new(height, ErrorCode::DbOpenFailed, format!("{e:#}")))?;
            source
                .read_block(height)
                .map_err(|e| BlockError::new(height, ErrorCode::BlockFetchFailed, e.to_string()))?
        }
    };

    if json {
        super::print_json(&block)
    } else {
        print!("{}", render_block(&block));
        Ok(())
    }
}

pub(crate) fn render_block(block: &Block) -> String {
    let when = DateTime::from_timestamp(block.timestamp, 0)
        .map_or_else(|| "invalid".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    format!(
        "\n=== Block {} ===\nHash:      {}\nPrevHash:  {}\nTimestamp: {} ({})\nData:      {}\n",
        block.height, block.hash, block.prev_hash, when, block.timestamp, block.data
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_block() {
        let block = Block::new(1, "abc", "Transaction data for block 1", 0);
        let text = render_block(&block);

        assert!(text.contains("=== Block 1 ===\n"));
        assert!(text.contains(&format!("Hash:      {}\n", block.hash)));
        assert!(text.contains("PrevHash:  abc\n"));
        assert!(text.contains("Timestamp: 1970-01-01 00:00:00 UTC (0)\n"));
        assert!(text.contains("Data:      Transaction data for block 1\n"));
    }
}
