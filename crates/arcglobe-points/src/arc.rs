//! The [`GlobeArc`] input record.

use serde::{Deserialize, Serialize};

/// One directed start → end connection drawn over the globe.
///
/// Field names follow the camelCase JSON datasets the arcs are loaded from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeArc {
    /// Animation ordering; also the arc's initial dash gap.
    pub order: u32,
    /// Start latitude in degrees.
    pub start_lat: f64,
    /// Start longitude in degrees.
    pub start_lng: f64,
    /// End latitude in degrees.
    pub end_lat: f64,
    /// End longitude in degrees.
    pub end_lng: f64,
    /// Peak altitude of the arc, as a fraction of the globe radius.
    pub arc_alt: f64,
    /// Hex color string, e.g. `"#06b6d4"`.
    pub color: String,
}

impl GlobeArc {
    /// `(lat, lng)` of the start endpoint.
    pub fn start(&self) -> (f64, f64) {
        (self.start_lat, self.start_lng)
    }

    /// `(lat, lng)` of the end endpoint.
    pub fn end(&self) -> (f64, f64) {
        (self.end_lat, self.end_lng)
    }

    /// True if all four endpoint coordinates are finite numbers.
    pub fn has_finite_coordinates(&self) -> bool {
        [self.start_lat, self.start_lng, self.end_lat, self.end_lng]
            .iter()
            .all(|c| c.is_finite())
    }
}
