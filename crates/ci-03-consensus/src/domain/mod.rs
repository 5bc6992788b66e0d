//! Domain layer for consensus analysis.
//!
//! Every function here is pure over a built `ConsensusMap`.

pub mod canonical;
pub mod config;
pub mod consensus_map;
pub mod error;
pub mod fork;
pub mod health;
pub mod height;
pub mod node_state;
pub mod recommend;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use canonical::{chain_scores, select_canonical};
pub use config::AnalysisConfig;
pub use consensus_map::{ConsensusMap, HashGroup, NodeInfo};
pub use error::{AnalysisError, AnalysisResult};
pub use fork::{detect_forks, ForkPoint};
pub use health::{assess_health, sync_percentage, NetworkHealth};
pub use height::find_consensus_height;
pub use node_state::{classify_nodes, NodeState, SyncStatus};
pub use recommend::generate_recommendations;
pub use result::ConsensusResult;
