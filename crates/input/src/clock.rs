//! Monotonic tick counter, one tick per millisecond.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    start: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created, wrapping at `u32::MAX`.
    pub fn now_tick(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
