//! Periodic "pulse ring" selection.
//!
//! A [`RingScheduler`] owns a [`RingTimer`] and a seeded RNG. Each time the
//! timer fires it draws a fresh random subset of the derived points as a
//! [`RingSelection`]. Nothing carries over from one tick to the next, and the
//! scheduler never talks to a renderer itself: callers decide where each
//! selection is published.

mod sample;
mod scheduler;
mod selection;
mod timer;

pub use sample::{RING_RATIO, ring_count, sample_distinct_indices};
pub use scheduler::{DEFAULT_RING_INTERVAL, RingScheduler};
pub use selection::RingSelection;
pub use timer::{MAX_TICKS_PER_ADVANCE, RingTimer, TimerState};
