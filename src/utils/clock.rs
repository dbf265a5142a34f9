//! Wall-clock source for timed calls.
//!
//! The engine reads the clock exactly twice per timed call and trusts it to be
//! monotonic. Readings are offsets from an arbitrary origin fixed by the clock.

use std::time::{Duration, Instant};

/// A monotonic high-resolution clock.
pub trait Clock {
    /// Current reading as an offset from the clock's origin.
    fn now(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`].
#[derive(Clone, Copy, Debug)]
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
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
