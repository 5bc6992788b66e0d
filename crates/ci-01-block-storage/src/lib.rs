//! # Block Storage (ci-01)
//!
//! Local persistence for one node's chain. The inspector uses it read-only
//! when analysing a node and read-write when seeding sample chains.
//!
//! ## Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `blk:{height as u64 BE}` | bincode-encoded `Block` |
//! | `meta:max_height` | highest stored height, u64 BE |
//!
//! Every write stores the block and the max-height marker in one atomic batch,
//! so a reader never sees a marker pointing past the last written block.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Errors, key layout and the block codec
//! - `ports/` - The `KeyValueStore` outbound port
//! - `adapters/` - In-memory, single-file and RocksDB key-value stores
//! - `service.rs` - `BlockStore`, which implements the shared block source traits
//!
//! ## Usage
//!
//! ```ignore
//! use ci_01_block_storage::{open_store, OpenMode};
//!
//! let store = open_store("./node1-data", OpenMode::MustExist)?;
//! let tip = store.max_height();
//! let block = store.load_block(0)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::storage::{FileBackedKVStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::storage::{RocksDbConfig, RocksDbStore};
pub use domain::errors::{KVStoreError, StorageError};
pub use domain::keys::KeyPrefix;
pub use ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
pub use service::{open_store, BlockStore, DefaultStore, OpenMode};
