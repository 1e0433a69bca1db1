//! Driven (output) ports.
//!
//! The only thing validation needs from outside is the time. Both
//! implementations live here because they are trivial.

use chrono::{DateTime, Utc};

/// Port for reading the current instant.
///
/// Implemented by:
/// - [`SystemClock`] (production)
/// - [`FixedClock`] (tests, and `--now` on the command line)
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
