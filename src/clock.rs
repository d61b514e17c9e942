//! Monotonic time source for the display busy/ready timing.
//!
//! Time is measured in ticks of 100 ns. The display delay after a character
//! write is a small number of these ticks, so on real hardware the busy window
//! is almost never observed; tests drive a [`ManualClock`] to see it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Number of clock ticks per second (one tick = 100 ns).
pub const TICKS_PER_SECOND: u64 = 10_000_000;

const NANOS_PER_TICK: u64 = 1_000_000_000 / TICKS_PER_SECOND;

/// A monotonic tick counter.
pub trait Clock {
    /// Current time in 100 ns ticks. Must never go backwards.
    fn now(&self) -> u64;
}

/// Wall clock backed by [`Instant`], counting from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let elapsed = self.origin.elapsed();
        elapsed.as_secs() * TICKS_PER_SECOND
            + u64::from(elapsed.subsec_nanos()) / NANOS_PER_TICK
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Clones share the same counter, so a test can keep one handle and give the
/// other to the machine.
///
/// ```
/// use apple1::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(17);
/// assert_eq!(clock.now(), 17);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get().saturating_add(ticks));
    }

    pub fn set(&self, ticks: u64) {
        self.ticks.set(ticks);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.ticks.get()
    }
}
