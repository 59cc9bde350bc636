//! Frame pacing

use std::time::{Duration, Instant};

use super::FramePacer;

/// Sleeps so ticks run at a fixed rate. A frame that overruns its budget is
/// not made up for; the next budget starts from when the wait returned.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    frame_duration: Duration,
    last_frame: Instant,
}

impl FixedRatePacer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / frame_rate.max(1),
            last_frame: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_for_next_frame(&mut self) {
        let deadline = self.last_frame + self.frame_duration;
        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        self.last_frame = Instant::now();
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        self.last_frame = Instant::now();
    }
}

/// Never blocks. Records what it was asked to do, for tests and fast-forward runs.
#[derive(Debug, Clone, Default)]
pub struct NullPacer {
    pub frames_waited: u64,
    pub sleeps: Vec<Duration>,
}

impl FramePacer for NullPacer {
    fn wait_for_next_frame(&mut self) {
        self.frames_waited += 1;
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
