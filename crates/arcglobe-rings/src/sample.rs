//! Distinct random index sampling.

use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Fraction of arcs that pulse on each tick, as `(numerator, denominator)`.
pub const RING_RATIO: (usize, usize) = (4, 5);

/// Number of rings requested for `arc_count` arcs: `floor(arc_count * 4 / 5)`.
pub fn ring_count(arc_count: usize) -> usize {
    arc_count * RING_RATIO.0 / RING_RATIO.1
}

/// Draw `count` distinct integers uniformly from `[min, max)`.
///
/// Values are drawn one at a time and redrawn on collision, so the result is
/// in draw order. A `count` larger than the range is clamped to the range
/// size, and an empty or inverted range yields no indices.
pub fn sample_distinct_indices<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
    count: usize,
) -> Vec<usize> {
    let available = max.saturating_sub(min);
    let count = if count > available {
        debug!(requested = count, available, "Clamping ring sample count");
        available
    } else {
        count
    };

    let mut seen = FxHashSet::default();
    let mut indices = Vec::with_capacity(count);
    while indices.len() < count {
        let candidate = rng.random_range(min..max);
        if seen.insert(candidate) {
            indices.push(candidate);
        }
    }
    indices
}
