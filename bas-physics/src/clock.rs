//! # Clocks
//!
//! Where frame time comes from when the caller doesn't pass `dt` in directly. Timestamps are nanosecond-resolution [Duration]s since some fixed origin; only differences between them mean anything.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Real time, measured from when the clock was made.
///
/// Steps driven by this are frame-rate dependent: two machines running the same scene won't land in the same place.
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
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Used for deterministic stepping and in tests.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Seconds elapsed between two timestamps, as the integrator wants them.
pub(crate) fn seconds_between(earlier: Duration, later: Duration) -> f32 {
    later.saturating_sub(earlier).as_nanos() as f32 / 1_000_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(32));
        clock.set(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn seconds_between_uses_nanos() {
        let dt = seconds_between(Duration::from_millis(500), Duration::from_millis(1000));
        assert!((dt - 0.5).abs() < 1e-6);
        assert_eq!(seconds_between(Duration::from_secs(1), Duration::ZERO), 0.0);
    }
}
