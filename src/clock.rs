use chrono::{DateTime, Utc};
use std::fmt;

/// Source of "now" for timestamps assigned by the store.
///
/// Production code uses [`SystemClock`]; tests inject [`FixedClock`] or their
/// own implementation for reproducible ordering.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub at: DateTime<Utc>,
}

impl FixedClock {
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
