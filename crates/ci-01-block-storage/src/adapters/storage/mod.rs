//! Key-value store adapters.

mod file;
mod memory;
#[cfg(feature = "rocksdb")]
mod rocksdb_store;

pub use file::{FileBackedKVStore, STORE_FILE_NAME};
pub use memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use rocksdb_store::{RocksDbConfig, RocksDbStore};
