//! # RocksDB Storage Adapter
//!
//! `KeyValueStore` over a RocksDB directory, for nodes whose data
//! directories are RocksDB databases.
//!
//! Inspection opens databases read-only so a running node is never disturbed;
//! seeding opens them read-write.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
use parking_lot::RwLock;
use rocksdb::{IteratorMode, Options, WriteBatch, WriteOptions, DB};
use std::path::PathBuf;
use std::sync::Arc;

/// RocksDB configuration.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Open without write access (default: true)
    pub read_only: bool,
    /// Create the database when absent; ignored when read-only
    pub create_if_missing: bool,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Enable fsync after each write
    pub sync_writes: bool,
}

impl RocksDbConfig {
    /// Settings for inspecting an existing database.
    pub fn read_only(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: true,
            create_if_missing: false,
            block_cache_size: 64 * 1024 * 1024,
            sync_writes: false,
        }
    }

    /// Settings for writing (seeding) a database.
    pub fn writable(path: impl Into<PathBuf>) -> Self {
        Self {
            read_only: false,
            create_if_missing: true,
            sync_writes: true,
            ..Self::read_only(path)
        }
    }
}

/// RocksDB-backed key-value store.
pub struct RocksDbStore {
    db: Arc<RwLock<DB>>,
    config: RocksDbConfig,
}

impl RocksDbStore {
    /// Open a database with the given settings.
    pub fn open(config: RocksDbConfig) -> Result<Self, KVStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(config.create_if_missing && !config.read_only);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = if config.read_only {
            DB::open_for_read_only(&opts, &config.path, false)
        } else {
            DB::open(&opts, &config.path)
        }
        .map_err(|e| KVStoreError::IOError {
            message: format!("Failed to open RocksDB at {}: {}", config.path.display(), e),
        })?;

        tracing::debug!(
            path = %config.path.display(),
            read_only = config.read_only,
            "[ci-01] opened RocksDB"
        );

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            config,
        })
    }

    fn ensure_writable(&self) -> Result<(), KVStoreError> {
        if self.config.read_only {
            return Err(KVStoreError::IOError {
                message: "RocksDB opened read-only".to_string(),
            });
        }
        Ok(())
    }

    fn write_options(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        write_opts
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        let db = self.db.read();
        db.get(key).map_err(|e| KVStoreError::IOError {
            message: format!("RocksDB get failed: {}", e),
        })
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.ensure_writable()?;
        let db = self.db.write();
        db.put_opt(key, value, &self.write_options())
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB put failed: {}", e),
            })
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.ensure_writable()?;
        let db = self.db.write();
        db.delete_opt(key, &self.write_options())
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB delete failed: {}", e),
            })
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.ensure_writable()?;
        let db = self.db.write();
        let mut batch = WriteBatch::default();

        for op in operations {
            match op {
                BatchOperation::Put { key, value } => batch.put(&key, &value),
                BatchOperation::Delete { key } => batch.delete(&key),
            }
        }

        db.write_opt(batch, &self.write_options())
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB batch write failed: {}", e),
            })
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        let db = self.db.read();
        db.get_pinned(key)
            .map(|v| v.is_some())
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB exists check failed: {}", e),
            })
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let db = self.db.read();
        let mut results = Vec::new();

        for item in db.iterator(IteratorMode::From(prefix, rocksdb::Direction::Forward)) {
            let (key, value) = item.map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB scan failed: {}", e),
            })?;
            if !key.starts_with(prefix) {
                break;
            }
            results.push((key.to_vec(), value.to_vec()));
        }

        Ok(results)
    }

    fn flush(&mut self) -> Result<(), KVStoreError> {
        if self.config.read_only {
            return Ok(());
        }
        let db = self.db.read();
        db.flush().map_err(|e| KVStoreError::IOError {
            message: format!("RocksDB flush failed: {}", e),
        })
    }
}
