//! # Outbound Ports
//!
//! The engine reads blocks through `shared_types::BlockSource`; the only other
//! dependency is the clock that stamps each result.

use chrono::{Local, NaiveDateTime};

/// Clock abstraction for testability.
pub trait TimeSource: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Default time source using the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub NaiveDateTime);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
