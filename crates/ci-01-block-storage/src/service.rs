//! # Block Store Service
//!
//! Height-indexed block persistence on top of any `KeyValueStore`.

use crate::adapters::storage::{FileBackedKVStore, STORE_FILE_NAME};
use crate::domain::codec::{decode_block, decode_height, encode_block, encode_height};
use crate::domain::errors::StorageError;
use crate::domain::keys::{block_key, height_from_key, max_height_key, KeyPrefix};
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use shared_types::{Block, BlockHeight, BlockReader, BlockRef, BlockSource, SourceLookupError};
use std::path::{Path, PathBuf};

/// How `open` treats a path with no store behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Create the data directory and an empty store.
    CreateIfMissing,
    /// Fail with `StorageError::NotFound`. Used for inspection so a typo in a
    /// path is reported instead of silently analysed as an empty chain.
    MustExist,
}

/// A node's blocks, keyed by height.
pub struct BlockStore<S: KeyValueStore> {
    kv: S,
    location: PathBuf,
}

impl<S: KeyValueStore> BlockStore<S> {
    /// Wrap an already-open key-value store.
    pub fn with_store(kv: S, location: impl Into<PathBuf>) -> Self {
        Self {
            kv,
            location: location.into(),
        }
    }

    /// Where this store lives (the node's data directory).
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Persist a block at its own height.
    ///
    /// The block and the max-height marker are written in one atomic batch.
    /// Overwriting an existing height is allowed.
    pub fn save_block(&mut self, block: &Block) -> Result<(), StorageError> {
        let value = encode_block(block)?;
        let max = match self.max_height()? {
            Some(current) if current > block.height => current,
            _ => block.height,
        };

        let operations = vec![
            BatchOperation::put(block_key(block.height), value),
            BatchOperation::put(max_height_key(), encode_height(max)),
        ];
        self.kv.atomic_batch_write(operations)?;

        tracing::trace!(height = block.height, hash = %block.hash, "[ci-01] block saved");
        Ok(())
    }

    /// Load the block stored at `height`.
    pub fn load_block(&self, height: BlockHeight) -> Result<Block, StorageError> {
        let bytes = self
            .kv
            .get(&block_key(height))?
            .ok_or(StorageError::HeightNotFound { height })?;
        decode_block(&bytes)
    }

    /// Highest stored height, `None` for an empty store.
    ///
    /// Reads the metadata marker; stores written without one fall back to a
    /// scan of the block keys.
    pub fn max_height(&self) -> Result<Option<BlockHeight>, StorageError> {
        if let Some(bytes) = self.kv.get(&max_height_key())? {
            return decode_height(&bytes).map(Some);
        }

        let scanned = self
            .kv
            .prefix_scan(KeyPrefix::BlockByHeight.as_bytes())?
            .iter()
            .filter_map(|(key, _)| height_from_key(key))
            .max();
        Ok(scanned)
    }

    /// Number of stored blocks.
    pub fn block_count(&self) -> Result<usize, StorageError> {
        Ok(self
            .kv
            .prefix_scan(KeyPrefix::BlockByHeight.as_bytes())?
            .len())
    }

    /// Flush and release the store.
    pub fn close(mut self) -> Result<(), StorageError> {
        self.kv.flush()?;
        tracing::debug!(location = %self.location.display(), "[ci-01] store closed");
        Ok(())
    }
}

impl BlockStore<FileBackedKVStore> {
    /// Open the file-backed store in the data directory `path`.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self, StorageError> {
        let dir = path.as_ref();
        let file = dir.join(STORE_FILE_NAME);

        match mode {
            OpenMode::MustExist if !file.is_file() => {
                return Err(StorageError::NotFound {
                    path: dir.to_path_buf(),
                });
            }
            OpenMode::CreateIfMissing => {
                std::fs::create_dir_all(dir).map_err(|e| StorageError::Database {
                    message: format!("{}: {}", dir.display(), e),
                })?;
            }
            OpenMode::MustExist => {}
        }

        let kv = FileBackedKVStore::open(&file)?;
        Ok(Self::with_store(kv, dir))
    }
}

#[cfg(feature = "rocksdb")]
impl BlockStore<crate::adapters::storage::RocksDbStore> {
    /// Open a RocksDB data directory. `MustExist` opens read-only.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self, StorageError> {
        use crate::adapters::storage::{RocksDbConfig, RocksDbStore};

        let dir = path.as_ref();
        let config = match mode {
            OpenMode::MustExist => {
                if !dir.join("CURRENT").is_file() {
                    return Err(StorageError::NotFound {
                        path: dir.to_path_buf(),
                    });
                }
                RocksDbConfig::read_only(dir)
            }
            OpenMode::CreateIfMissing => RocksDbConfig::writable(dir),
        };

        let kv = RocksDbStore::open(config)?;
        Ok(Self::with_store(kv, dir))
    }
}

/// The backend selected at build time.
#[cfg(not(feature = "rocksdb"))]
pub type DefaultStore = BlockStore<FileBackedKVStore>;

/// The backend selected at build time.
#[cfg(feature = "rocksdb")]
pub type DefaultStore = BlockStore<crate::adapters::storage::RocksDbStore>;

/// Open a node data directory with the build's default backend.
pub fn open_store(path: impl AsRef<Path>, mode: OpenMode) -> Result<DefaultStore, StorageError> {
    DefaultStore::open(path, mode)
}

impl<S: KeyValueStore> BlockReader for BlockStore<S> {
    fn max_height(&self) -> Option<BlockHeight> {
        self.max_height().unwrap_or_else(|e| {
            tracing::warn!(location = %self.location.display(), error = %e, "[ci-01] max height unreadable");
            None
        })
    }

    fn read_block(&self, height: BlockHeight) -> Result<Block, SourceLookupError> {
        self.load_block(height).map_err(|e| e.into_lookup(height))
    }
}

impl<S: KeyValueStore> BlockSource for BlockStore<S> {
    fn max_height(&self) -> Option<BlockHeight> {
        BlockReader::max_height(self)
    }

    fn block_at(&self, height: BlockHeight) -> Result<BlockRef, SourceLookupError> {
        self.read_block(height).map(BlockRef::from)
    }
}
