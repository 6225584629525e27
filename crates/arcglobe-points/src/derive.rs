//! Arc → point expansion and coordinate deduplication.

use arcglobe_color::{FadeColor, hex_to_rgb};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{DerivedPoint, Endpoint, GlobeArc, PointError};

/// Result of deriving points from an arc list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointDerivation {
    /// Deduplicated points in first-occurrence order.
    pub points: Vec<DerivedPoint>,
    /// Arcs that were excluded, in input order.
    pub rejected: Vec<PointError>,
}

/// Expand each valid arc into its start and end points, without deduplication.
///
/// Arcs with an unparseable color or a non-finite coordinate contribute no
/// points and are returned as errors instead.
pub fn expand_endpoints(
    arcs: &[GlobeArc],
    point_size: f64,
) -> (Vec<DerivedPoint>, Vec<PointError>) {
    let mut points = Vec::with_capacity(arcs.len() * 2);
    let mut rejected = Vec::new();

    for (index, arc) in arcs.iter().enumerate() {
        let Some(rgb) = hex_to_rgb(&arc.color) else {
            rejected.push(PointError::InvalidColorFormat {
                index,
                order: arc.order,
                color: arc.color.clone(),
            });
            continue;
        };
        if !arc.has_finite_coordinates() {
            rejected.push(PointError::InvalidCoordinate {
                index,
                order: arc.order,
            });
            continue;
        }

        let color = FadeColor::new(rgb);
        for (endpoint, (lat, lng)) in [(Endpoint::Start, arc.start()), (Endpoint::End, arc.end())]
        {
            points.push(DerivedPoint {
                size: point_size,
                order: arc.order,
                color,
                lat,
                lng,
                endpoint,
            });
        }
    }

    (points, rejected)
}

/// Keep the first point at each exact `(lat, lng)` and drop later ones.
///
/// Equality is exact with no tolerance; `-0.0` and `0.0` count as the same
/// coordinate. Surviving points keep their relative order.
pub fn dedup_by_coordinate(points: Vec<DerivedPoint>) -> Vec<DerivedPoint> {
    let mut seen = FxHashSet::default();
    points
        .into_iter()
        .filter(|p| seen.insert(coordinate_key(p.lat, p.lng)))
        .collect()
}

/// Derive the deduplicated point set for an arc list.
///
/// Rejected arcs are logged and reported; the remaining arcs still produce
/// points.
pub fn derive_points(arcs: &[GlobeArc], point_size: f64) -> PointDerivation {
    let (expanded, rejected) = expand_endpoints(arcs, point_size);
    for err in &rejected {
        warn!("Excluding arc from point set: {err}");
    }

    let expanded_len = expanded.len();
    let points = dedup_by_coordinate(expanded);
    debug!(
        arcs = arcs.len(),
        expanded = expanded_len,
        kept = points.len(),
        rejected = rejected.len(),
        "Derived globe points"
    );

    PointDerivation { points, rejected }
}

fn coordinate_key(lat: f64, lng: f64) -> (u64, u64) {
    // Finite inputs only; -0.0 folds onto 0.0 so they compare equal.
    let canon = |v: f64| if v == 0.0 { 0.0f64 } else { v };
    (canon(lat).to_bits(), canon(lng).to_bits())
}
