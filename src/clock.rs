//! The source of "now" for commands that stamp or filter by the current date.

use chrono::{DateTime, FixedOffset, Local};

/// Provides the current moment. Commands take a `Clock` so that tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
