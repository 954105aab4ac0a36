//! Wall-clock source for timestamping handlers

use std::cell::Cell;

/// Source of the current Unix time
pub trait Clock {
    /// Seconds since the Unix epoch, truncated to whole seconds
    fn unix_seconds(&self) -> i64;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock pinned to a settable instant
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    /// Create a clock that reports `unix_seconds`
    pub fn new(unix_seconds: i64) -> Self {
        Self {
            now: Cell::new(unix_seconds),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_seconds(&self) -> i64 {
        (**self).unix_seconds()
    }
}
