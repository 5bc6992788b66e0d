//! # Shared Types Crate
//!
//! Block entities and the read-side contracts that every chain view in the
//! inspector implements, whether it is backed by a local store or a remote
//! node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Block` and the hash function are defined here
//!   so the loader, the scanner and the RPC client agree on one format.
//! - **Read-only views**: `BlockSource` and `BlockReader` expose lookups only;
//!   nothing downstream of a view can mutate the chain behind it.

pub mod entities;
pub mod errors;
pub mod source;

pub use entities::*;
pub use errors::*;
pub use source::*;
