//! # Adapters Module
//!
//! Key-value store implementations behind the `KeyValueStore` port.

pub mod storage;
