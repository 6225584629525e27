//! Repeating interval timer driven by explicit elapsed time.
//!
//! The timer never reads the wall clock; the owner feeds it frame deltas via
//! [`RingTimer::advance`]. While idle, deltas are discarded, so a stopped timer
//! cannot fire late.

use std::time::Duration;

use tracing::warn;

/// Upper bound on ticks reported by a single [`RingTimer::advance`] call.
/// Longer stalls are collapsed to this many ticks.
pub const MAX_TICKS_PER_ADVANCE: u32 = 16;

/// Smallest accepted period; shorter periods are raised to this.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Lifecycle state of a [`RingTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// No timer running.
    Idle,
    /// Running; `elapsed` is time accumulated since the last tick.
    Active { elapsed: Duration },
}

/// A fixed-period repeating timer.
#[derive(Clone, Debug)]
pub struct RingTimer {
    period: Duration,
    state: TimerState,
}

impl RingTimer {
    /// Create an idle timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            state: TimerState::Idle,
        }
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns true while the timer is running.
    pub fn is_active(&self) -> bool {
        matches!(self.state, TimerState::Active { .. })
    }

    /// Start the timer, replacing any running one. The first tick fires one
    /// full period from now.
    pub fn start(&mut self) {
        self.state = TimerState::Active {
            elapsed: Duration::ZERO,
        };
    }

    /// Cancel the timer. Time accumulated toward the next tick is discarded.
    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Feed `dt` of elapsed time and return how many ticks fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let TimerState::Active { elapsed } = self.state else {
            return 0;
        };

        let total = elapsed.saturating_add(dt).as_nanos();
        let period = self.period.as_nanos();
        let fired = total / period;
        let remainder = nanos_to_duration(total % period);
        self.state = TimerState::Active { elapsed: remainder };

        if fired > u128::from(MAX_TICKS_PER_ADVANCE) {
            warn!(
                "Ring timer fell {fired} ticks behind, collapsing to {MAX_TICKS_PER_ADVANCE}"
            );
            MAX_TICKS_PER_ADVANCE
        } else {
            fired as u32
        }
    }
}

/// `Duration` from a nanosecond count that may exceed `u64::MAX`.
fn nanos_to_duration(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
