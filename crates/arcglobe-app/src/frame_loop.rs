//! Wall-clock frame loop that feeds elapsed time to the pipeline.

use std::time::{Duration, Instant};

use tracing::warn;

/// Target sleep between frames (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Longest frame time passed on to the update function. Longer stalls are
/// clamped so a suspended process does not fire a burst of ring ticks.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

/// Measures frame deltas and tracks total run time.
pub struct FrameLoop {
    previous_time: Instant,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Measure the time since the previous frame and run one frame with it.
    pub fn tick(&mut self, update_fn: impl FnOnce(Duration)) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time);
        self.previous_time = now;
        self.tick_with(frame_time, update_fn);
    }

    /// Run one frame with an explicit frame time.
    pub fn tick_with(&mut self, mut frame_time: Duration, update_fn: impl FnOnce(Duration)) {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time.as_secs_f64() * 1000.0,
                MAX_FRAME_TIME.as_secs_f64() * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        update_fn(frame_time);
        self.elapsed += frame_time;
        self.frame_count += 1;
    }

    /// Total frame time fed to updates so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_frame_time_through() {
        let mut frames = FrameLoop::new();
        let mut seen = Duration::ZERO;
        frames.tick_with(Duration::from_millis(16), |dt| seen = dt);
        assert_eq!(seen, Duration::from_millis(16));
        assert_eq!(frames.frame_count(), 1);
        assert_eq!(frames.elapsed(), Duration::from_millis(16));
    }

    #[test]
    fn test_clamps_long_frames() {
        let mut frames = FrameLoop::new();
        let mut seen = Duration::ZERO;
        frames.tick_with(Duration::from_secs(5), |dt| seen = dt);
        assert_eq!(seen, MAX_FRAME_TIME);
        assert_eq!(frames.elapsed(), MAX_FRAME_TIME);
    }

    #[test]
    fn test_elapsed_accumulates() {
        let mut frames = FrameLoop::new();
        for _ in 0..10 {
            frames.tick_with(Duration::from_millis(100), |_| {});
        }
        assert_eq!(frames.elapsed(), Duration::from_secs(1));
        assert_eq!(frames.frame_count(), 10);
    }

    #[test]
    fn test_wall_clock_tick_runs_update() {
        let mut frames = FrameLoop::new();
        let mut called = false;
        frames.tick(|dt| {
            called = true;
            assert!(dt <= MAX_FRAME_TIME);
        });
        assert!(called);
    }
}
