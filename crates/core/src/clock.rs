//! Time sources for the fixed-timestep physics gate.
//!
//! The game never samples wall-clock time itself. The frame loop reads a
//! [`Clock`] once per frame and hands the reading to `GameState::tick`, so tests
//! can drive minutes of play with a [`ManualClock`] and no sleeping.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now_ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
