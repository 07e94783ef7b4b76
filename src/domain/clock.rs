//! Injectable time source for timestamp defaults

use std::fmt::Debug;

use chrono::Utc;

/// Source of "now" in integer epoch seconds.
///
/// Record timestamps (`created_at`, `last_updated`, `last_used`) are stamped
/// through this trait so tests can pin time to a fixed value.
pub trait Clock: Send + Sync + Debug {
    fn now_epoch_secs(&self) -> i64;
}

/// Wall-clock implementation used in production
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock pinned to a fixed instant, for tests and reproducible runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: i64,
}

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now_epoch_secs(&self) -> i64 {
        self.now
    }
}
