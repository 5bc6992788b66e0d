//! # Node RPC (ci-02)
//!
//! Client for the REST surface a chain node exposes:
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/block/{height}` | block JSON |
//! | GET | `/health` | `HealthResponse` |
//!
//! `RemoteChainView` prefetches a node's whole chain so the synchronous
//! consensus engine can read it through `BlockSource`.

pub mod client;
pub mod error;
mod retry;
pub mod types;
pub mod view;

pub use client::NodeRpcClient;
pub use error::RpcError;
pub use types::{HealthResponse, RpcConfig};
pub use view::{FetchOptions, RemoteChainView};
