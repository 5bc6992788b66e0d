//! # ci-03-consensus
//!
//! Consensus & fork analysis engine.
//!
//! ## Architecture
//!
//! Given each node's view of its chain, one analysis call builds a
//! height → hash → nodes map and derives everything else from it:
//!
//! ```text
//! [NodeInfo..] ──→ ConsensusMap ──┬──→ fork points
//!                                 ├──→ canonical chain ──→ node states ──→ recommendations
//!                                 └──→ consensus height                └──→ network health
//! ```
//!
//! The engine is synchronous and pure over already-resolved sources. Remote
//! nodes are prefetched by the caller (see `ci-02-node-rpc`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ci_03_consensus::{ConsensusAnalyzer, NodeInfo};
//!
//! let analyzer = ConsensusAnalyzer::default();
//! let result = analyzer.analyze(&[
//!     NodeInfo::from_source("node1", &store1),
//!     NodeInfo::from_source("node2", &store2),
//! ])?;
//! println!("{}", ci_03_consensus::render_text(&result));
//! ```

pub mod domain;
pub mod ports;
pub mod presenter;
pub mod service;

pub use domain::{
    AnalysisConfig, AnalysisError, AnalysisResult, ConsensusMap, ConsensusResult, ForkPoint,
    NetworkHealth, NodeInfo, NodeState, SyncStatus,
};
pub use ports::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use presenter::{render_json, render_text};
pub use service::ConsensusAnalyzer;
