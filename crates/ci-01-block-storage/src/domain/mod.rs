//! Domain layer for block storage.

pub mod codec;
pub mod errors;
pub mod keys;
