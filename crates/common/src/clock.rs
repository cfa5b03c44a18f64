//! Clock abstraction for timestamping responses
//!
//! Business logic takes the clock as a capability instead of reading the
//! ambient system time, so tests can control time deterministically.

use chrono::{DateTime, Utc};

/// Time source capability
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
