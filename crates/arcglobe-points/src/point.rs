//! The [`DerivedPoint`] output record.

use arcglobe_color::FadeColor;
use serde::Serialize;

/// Which end of its arc a point came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    Start,
    End,
}

/// One arc endpoint, carrying a fade color captured at derivation time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedPoint {
    /// Marker size, taken from `GlobeConfig::point_size`.
    pub size: f64,
    /// `order` of the arc this point was derived from.
    pub order: u32,
    /// Fade color built from the arc's hex color.
    pub color: FadeColor,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip)]
    pub endpoint: Endpoint,
}

impl DerivedPoint {
    /// The point's coordinate pair.
    pub fn coordinate(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
