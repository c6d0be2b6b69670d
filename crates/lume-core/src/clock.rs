//! Monotonic time reads and blocking sleep.

use std::time::{Duration, Instant};

/// Monotonic clock anchored at its creation.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock started, with sub-millisecond precision.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}

/// Converts host seconds into a sleep duration. Negative, NaN, and
/// out-of-range values become zero.
#[must_use]
pub fn sleep_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

/// Blocks the calling thread for `seconds`.
///
/// This is a full-thread block. Never call it from inside an event drain.
pub fn sleep(seconds: f64) {
    let duration = sleep_duration(seconds);
    tracing::trace!(?duration, "sleeping");
    std::thread::sleep(duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let clock = Clock::start();
        let first = clock.now();
        let second = clock.now();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn sleep_duration_converts_fractional_seconds() {
        assert_eq!(sleep_duration(0.25), Duration::from_millis(250));
        assert_eq!(sleep_duration(2.0), Duration::from_secs(2));
    }

    #[test]
    fn sleep_duration_clamps_invalid_input() {
        assert_eq!(sleep_duration(-1.0), Duration::ZERO);
        assert_eq!(sleep_duration(f64::NAN), Duration::ZERO);
        assert_eq!(sleep_duration(f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn sleep_blocks_at_least_requested_time() {
        let clock = Clock::start();
        sleep(0.01);
        assert!(clock.now() >= 0.01);
    }
}
