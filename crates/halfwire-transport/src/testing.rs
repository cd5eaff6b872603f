//! Test doubles for the transport capabilities.

use std::cell::Cell;
use std::time::Duration;

use crate::clock::Clock;

/// Hand-driven clock for deterministic timeout tests.
///
/// Time only moves when the test says so: explicitly via
/// [`advance`](ManualClock::advance), on every `sleep`, and optionally by a
/// fixed tick on each `now()` poll so busy-wait loops make progress without
/// wall-clock delays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that advances by `tick` every time it is polled.
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            tick: Cell::new(tick),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.tick.get());
        now
    }

    fn sleep(&self, dur: Duration) {
        self.advance(dur);
    }
}
