//! Constant frame rate pacing.
//!
//! The deadline advances by exactly one interval per frame, so a slow frame
//! is made up by shorter sleeps afterwards instead of drifting.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_millis(1000 / u64::from(fps.max(1))))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait at `now` before the next frame, advancing the
    /// deadline by one interval.
    pub fn delay(&mut self, now: Instant) -> Duration {
        let next = *self.next.get_or_insert(now + self.interval);
        self.next = Some(next + self.interval);
        next.saturating_duration_since(now)
    }

    /// Sleep until the next frame is due.
    pub fn pace(&mut self) {
        let wait = self.delay(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_frame_waits_one_interval() {
        let mut pacer = FramePacer::new(40 * MS);
        let t0 = Instant::now();
        assert_eq!(pacer.delay(t0), 40 * MS);
    }

    #[test]
    fn deadline_advances_by_interval() {
        let mut pacer = FramePacer::new(40 * MS);
        let t0 = Instant::now();
        pacer.delay(t0);
        // Frame took 10ms after the first deadline.
        assert_eq!(pacer.delay(t0 + 50 * MS), 30 * MS);
        assert_eq!(pacer.delay(t0 + 80 * MS), 40 * MS);
    }

    #[test]
    fn late_frames_do_not_sleep() {
        let mut pacer = FramePacer::new(40 * MS);
        let t0 = Instant::now();
        pacer.delay(t0);
        assert_eq!(pacer.delay(t0 + 200 * MS), Duration::ZERO);
        // Catching up: the deadline is still behind.
        assert_eq!(pacer.delay(t0 + 201 * MS), Duration::ZERO);
    }

    #[test]
    fn from_fps_uses_whole_milliseconds() {
        assert_eq!(FramePacer::from_fps(25).interval(), 40 * MS);
        assert_eq!(FramePacer::from_fps(0).interval(), 1000 * MS);
    }
}
