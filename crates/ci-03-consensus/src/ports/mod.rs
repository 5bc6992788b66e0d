//! Ports for the consensus engine.

pub mod outbound;

pub use outbound::{FixedTimeSource, SystemTimeSource, TimeSource};
