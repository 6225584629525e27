//! The [`RingSelection`] value published on each tick.

use arcglobe_points::DerivedPoint;
use serde::Serialize;

/// The subset of derived points pulsing after a given tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RingSelection {
    /// Scheduler tick that produced this selection; `0` before the first tick.
    pub tick: u64,
    /// Selected point indices, ascending.
    pub indices: Vec<usize>,
    /// Selected points, in derived-point order.
    pub points: Vec<DerivedPoint>,
}

impl RingSelection {
    /// Build a selection from sampled indices.
    ///
    /// Points are picked by membership, so their order follows `points`
    /// rather than the order the indices were drawn in. Indices past the end
    /// of `points` select nothing.
    pub fn from_indices(tick: u64, mut indices: Vec<usize>, points: &[DerivedPoint]) -> Self {
        indices.sort_unstable();
        indices.dedup();
        indices.retain(|&i| i < points.len());
        let selected = indices.iter().map(|&i| points[i].clone()).collect();
        Self {
            tick,
            indices,
            points: selected,
        }
    }

    /// Number of pulsing points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing is pulsing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
