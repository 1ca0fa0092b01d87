//! Timestamp sources for the animation loop.

use std::time;

/// Source of animation timestamps.
///
/// Timestamps are measured in milliseconds since an arbitrary epoch and
/// are expected to never decrease between frames. The animation code
/// only ever looks at differences between two timestamps.
pub trait Clock {
    /// Current timestamp in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Clock counting from the moment of its creation, backed by
/// `std::time::Instant` and therefore monotonic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    start: time::Instant,
}

impl Timer {
    /// Create new timer based on current system time.
    pub fn new() -> Self {
        Timer { start: time::Instant::now() }
    }

    /// Reset time of creation to current time.
    pub fn reset(&mut self) {
        self.start = time::Instant::now();
    }
}

impl Clock for Timer {
    fn now_ms(&self) -> f64 {
        let dt = self.start.elapsed();
        dt.as_secs() as f64 * 1.0e3 + dt.subsec_nanos() as f64 * 1.0e-6
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, Timer};

    #[test]
    fn timer_never_goes_backward() {
        let timer = Timer::new();
        let a = timer.now_ms();
        let b = timer.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn reset_rewinds_the_epoch() {
        let mut timer = Timer::new();
        let before = timer.now_ms();
        timer.reset();
        assert!(timer.now_ms() <= before + 1.0e3);
    }
}
