//! Injectable timestamp source. Production code reads the wall clock;
//! tests inject a fixed or steppable clock so S1-S6-style scenarios
//! reproduce bit-exactly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of nanosecond timestamps. Need not be monotonic on its own —
/// `MatchingEngine` clamps the sequence to be strictly increasing.
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

/// Reads `SystemTime::now()`. The default production clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// Always returns the same instant. Useful for scenario tests that don't
/// care about ordering beyond what the engine's own clamp provides.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ns(&self) -> u64 {
        self.0
    }
}

/// Advances by one on every read, starting from a configurable base.
/// Useful for scenario tests that need distinguishable, ordered timestamps
/// without relying on the engine's collision clamp.
#[derive(Debug)]
pub struct StepClock(AtomicU64);

impl StepClock {
    pub fn new(start: u64) -> Self {
        StepClock(AtomicU64::new(start))
    }
}

impl Clock for StepClock {
    fn now_ns(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}
