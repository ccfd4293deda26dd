//! Fixed rate frame pacing

use std::time::{Duration, Instant};

/// Blocks the loop until the next frame boundary
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
    /// Frames that started late
    pub missed: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            next: now + frame,
            missed: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// How long to wait at `now`, and move the boundary on by one frame.
    ///
    /// A frame that is already late waits zero and the schedule restarts from
    /// `now` rather than trying to catch up.
    pub fn advance(&mut self, now: Instant) -> Duration {
        if now >= self.next {
            self.missed += 1;
            self.next = now + self.frame;
            return Duration::ZERO;
        }
        let wait = self.next - now;
        self.next += self.frame;
        wait
    }

    /// Sleep until the next frame boundary
    pub fn tick(&mut self) {
        let wait = self.advance(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}
