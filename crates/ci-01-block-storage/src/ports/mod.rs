//! Port definitions for block storage.

pub mod outbound;
