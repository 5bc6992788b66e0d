//! # Remote Chain View
//!
//! A snapshot of a remote node's chain, fetched once and then served
//! synchronously through the shared block source traits.

use crate::client::NodeRpcClient;
use crate::error::RpcError;
use crate::types::HealthResponse;
use futures::stream::{self, StreamExt};
use shared_types::{
    Block, BlockHeight, BlockReader, BlockRef, BlockSource, SourceLookupError, StaticChain,
};
use std::collections::BTreeMap;

/// Prefetch settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Block requests in flight at once (default: 8)
    pub concurrency: usize,
    /// Stop at this height even if the node reports a higher tip
    pub height_limit: Option<BlockHeight>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            height_limit: None,
        }
    }
}

/// Everything fetched from one node.
#[derive(Debug, Clone)]
pub struct RemoteChainView {
    base_url: String,
    health: HealthResponse,
    chain: StaticChain,
    failures: BTreeMap<BlockHeight, String>,
}

impl RemoteChainView {
    /// Read the node's height from `/health`, then fetch blocks `0..=height`.
    ///
    /// A health failure fails the whole fetch. Individual block failures are
    /// logged and recorded as gaps.
    pub async fn fetch(client: &NodeRpcClient, opts: &FetchOptions) -> Result<Self, RpcError> {
        let health = client.fetch_health().await?;
        let tip = match opts.height_limit {
            Some(limit) => health.height.min(limit),
            None => health.height,
        };

        tracing::debug!(
            node = client.base_url(),
            height = tip,
            "[ci-02] prefetching remote chain"
        );

        let results: Vec<(BlockHeight, Result<Block, RpcError>)> = stream::iter(0..=tip)
            .map(|height| async move { (height, client.fetch_block(height).await) })
            .buffer_unordered(opts.concurrency.max(1))
            .collect()
            .await;

        let mut chain = StaticChain::new().with_declared_height(tip);
        let mut failures = BTreeMap::new();
        for (height, result) in results {
            match result {
                Ok(block) => chain.insert_at(height, block),
                Err(e) => {
                    tracing::warn!(
                        node = client.base_url(),
                        height,
                        error = %e,
                        "[ci-02] block unavailable"
                    );
                    failures.insert(height, e.to_string());
                }
            }
        }

        tracing::info!(
            node = client.base_url(),
            fetched = chain.len(),
            failed = failures.len(),
            "[ci-02] remote chain fetched"
        );

        Ok(Self {
            base_url: client.base_url().to_string(),
            health,
            chain,
            failures,
        })
    }

    /// URL the view was fetched from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Health reported at fetch time.
    pub fn health(&self) -> &HealthResponse {
        &self.health
    }

    /// Heights that could not be fetched, with the reason.
    pub fn failures(&self) -> &BTreeMap<BlockHeight, String> {
        &self.failures
    }

    /// Number of blocks held.
    pub fn block_count(&self) -> usize {
        self.chain.len()
    }

    fn lookup_error(&self, height: BlockHeight) -> SourceLookupError {
        match self.failures.get(&height) {
            Some(reason) => SourceLookupError::Unavailable {
                height,
                reason: reason.clone(),
            },
            None => SourceLookupError::NotFound { height },
        }
    }
}

impl BlockReader for RemoteChainView {
    fn max_height(&self) -> Option<BlockHeight> {
        BlockReader::max_height(&self.chain)
    }

    fn read_block(&self, height: BlockHeight) -> Result<Block, SourceLookupError> {
        self.chain
            .read_block(height)
            .map_err(|_| self.lookup_error(height))
    }
}

impl BlockSource for RemoteChainView {
    fn max_height(&self) -> Option<BlockHeight> {
        BlockSource::max_height(&self.chain)
    }

    fn block_at(&self, height: BlockHeight) -> Result<BlockRef, SourceLookupError> {
        self.read_block(height).map(|block| block.to_ref())
    }
}
