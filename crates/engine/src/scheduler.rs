//! Fixed-timestep scheduling: the gravity divisor and tick pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Counts loop iterations and fires once every `speed` of them.
#[derive(Debug, Clone)]
pub struct GravityClock {
    speed: u32,
    count: u32,
}

impl GravityClock {
    /// `speed` is the number of iterations per gravity step (minimum 1)
    pub fn new(speed: u32) -> Self {
        Self {
            speed: speed.max(1),
            count: 0,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Advance one iteration. Returns true when gravity is due.
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.speed {
            self.count = 0;
            return true;
        }
        false
    }
}

/// Suspends the loop between units of work.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps until `duration` after the previous wake-up, so the work done in
/// between is absorbed into the interval instead of added to it.
#[derive(Debug, Default)]
pub struct ThreadPacer {
    last_wake: Option<Instant>,
}

impl ThreadPacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        let remaining = match self.last_wake {
            Some(at) => duration.saturating_sub(at.elapsed()),
            None => duration,
        };
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_wake = Some(Instant::now());
    }
}
