//! Timer-driven random ring selection.

use std::time::Duration;

use arcglobe_points::DerivedPoint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::{RingSelection, RingTimer, ring_count, sample_distinct_indices};

/// Default interval between ring re-samples.
pub const DEFAULT_RING_INTERVAL: Duration = Duration::from_millis(2000);

/// Re-samples a random subset of points every timer period.
///
/// Idle until [`start`](Self::start); each tick while active produces a new
/// [`RingSelection`] that does not depend on the previous one.
pub struct RingScheduler {
    timer: RingTimer,
    rng: ChaCha8Rng,
    tick: u64,
}

impl RingScheduler {
    /// Create an idle scheduler. With `seed`, selections are reproducible;
    /// otherwise the RNG is seeded from OS entropy.
    pub fn new(interval: Duration, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            timer: RingTimer::new(interval),
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
        }
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.timer.period()
    }

    /// Returns true while the timer is running.
    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Number of ticks fired since creation.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Start ticking. Restarts the period if already running.
    pub fn start(&mut self) {
        self.timer.start();
    }

    /// Stop ticking. No-op when already idle.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Draw one selection without touching the timer.
    ///
    /// `floor(arc_count * 4 / 5)` indices are drawn from the point index range;
    /// the count is clamped when there are fewer points than that.
    pub fn sample(&mut self, points: &[DerivedPoint], arc_count: usize) -> RingSelection {
        let indices =
            sample_distinct_indices(&mut self.rng, 0, points.len(), ring_count(arc_count));
        RingSelection::from_indices(self.tick, indices, points)
    }

    /// Advance the timer by `dt`, calling `publish` once per fired tick with a
    /// freshly sampled selection. Returns the number of ticks fired.
    pub fn advance(
        &mut self,
        dt: Duration,
        points: &[DerivedPoint],
        arc_count: usize,
        mut publish: impl FnMut(RingSelection),
    ) -> u32 {
        let fired = self.timer.advance(dt);
        for _ in 0..fired {
            self.tick += 1;
            let selection = self.sample(points, arc_count);
            trace!(
                tick = selection.tick,
                rings = selection.len(),
                "Ring selection resampled"
            );
            publish(selection);
        }
        fired
    }
}
