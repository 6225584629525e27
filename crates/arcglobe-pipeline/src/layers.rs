//! Layer values handed to the renderer.
//!
//! Each struct is a complete snapshot of one layer's data and parameters; the
//! renderer always receives whole layers, never partial updates.

use std::sync::Arc;
use std::time::Duration;

use arcglobe_color::{Rgb, hex_to_rgb};
use arcglobe_config::GlobeConfig;
use arcglobe_points::{DerivedPoint, GlobeArc};
use arcglobe_rings::RingSelection;
use rand::Rng;

use crate::{CountryFeatureCollection, PipelineError};

// ---------------------------------------------------------------------------
// Fixed layer parameters
// ---------------------------------------------------------------------------

/// H3 resolution of the country hex polygons.
pub const HEX_POLYGON_RESOLUTION: u8 = 3;
/// Gap between neighbouring hexes, as a fraction of hex size.
pub const HEX_POLYGON_MARGIN: f64 = 0.7;
/// Gap between arc dashes, in dash lengths.
pub const ARC_DASH_GAP: f64 = 15.0;
/// Stroke widths an arc may be drawn with.
pub const ARC_STROKES: [f64; 3] = [0.32, 0.28, 0.3];
pub const POINT_ALTITUDE: f64 = 0.0;
pub const POINT_RADIUS: f64 = 2.0;
/// Ring growth rate in degrees per second.
pub const RING_PROPAGATION_SPEED: f64 = 3.0;

/// Choose a stroke width from [`ARC_STROKES`] at index `round(u * 2)`, `u`
/// uniform in `[0, 1)`. The middle width is twice as likely as either end.
pub fn pick_arc_stroke<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    let idx = (u * 2.0).round() as usize;
    ARC_STROKES[idx.min(ARC_STROKES.len() - 1)]
}

// ---------------------------------------------------------------------------
// HexPolygonLayer
// ---------------------------------------------------------------------------

/// Country hex polygons plus atmosphere settings.
#[derive(Clone, Debug, PartialEq)]
pub struct HexPolygonLayer {
    /// Country boundaries, unmodified.
    pub countries: Arc<CountryFeatureCollection>,
    pub resolution: u8,
    pub margin: f64,
    /// CSS color of every polygon.
    pub color: String,
    pub show_atmosphere: bool,
    pub atmosphere_color: String,
    pub atmosphere_altitude: f64,
}

impl HexPolygonLayer {
    pub fn new(countries: Arc<CountryFeatureCollection>, config: &GlobeConfig) -> Self {
        Self {
            countries,
            resolution: HEX_POLYGON_RESOLUTION,
            margin: HEX_POLYGON_MARGIN,
            color: config.polygon_color.clone(),
            show_atmosphere: config.show_atmosphere,
            atmosphere_color: config.atmosphere_color.clone(),
            atmosphere_altitude: config.atmosphere_altitude,
        }
    }
}

// ---------------------------------------------------------------------------
// ArcLayer
// ---------------------------------------------------------------------------

/// The raw arc list with its dash animation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLayer {
    pub arcs: Arc<[GlobeArc]>,
    /// Stroke width per arc, parallel to `arcs`.
    pub strokes: Vec<f64>,
    pub dash_length: f64,
    pub dash_gap: f64,
    pub dash_animate_time: Duration,
}

impl ArcLayer {
    pub fn new(arcs: Arc<[GlobeArc]>, strokes: Vec<f64>, config: &GlobeConfig) -> Self {
        Self {
            arcs,
            strokes,
            dash_length: config.arc_length,
            dash_gap: ARC_DASH_GAP,
            dash_animate_time: config.arc_time(),
        }
    }

    /// Initial dash gap of arc `i`: its `order`, so arcs start staggered.
    pub fn dash_initial_gap(&self, i: usize) -> Option<f64> {
        self.arcs.get(i).map(|arc| f64::from(arc.order))
    }

    /// Altitude of arc `i`.
    pub fn altitude(&self, i: usize) -> Option<f64> {
        self.arcs.get(i).map(|arc| arc.arc_alt)
    }

    /// Color string of arc `i`.
    pub fn color(&self, i: usize) -> Option<&str> {
        self.arcs.get(i).map(|arc| arc.color.as_str())
    }
}

// ---------------------------------------------------------------------------
// PointLayer
// ---------------------------------------------------------------------------

/// Deduplicated endpoint markers.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayer {
    pub points: Arc<[DerivedPoint]>,
    /// Merge all point meshes into one draw call.
    pub merge: bool,
    pub altitude: f64,
    pub radius: f64,
}

impl PointLayer {
    pub fn new(points: Arc<[DerivedPoint]>) -> Self {
        Self {
            points,
            merge: true,
            altitude: POINT_ALTITUDE,
            radius: POINT_RADIUS,
        }
    }

    /// Color of point `i` at fade progress `t`.
    pub fn color(&self, i: usize, t: f64) -> Option<String> {
        self.points.get(i).map(|p| p.color.at(t))
    }
}

// ---------------------------------------------------------------------------
// RingLayer
// ---------------------------------------------------------------------------

/// Currently pulsing points and ring animation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct RingLayer {
    pub selection: RingSelection,
    pub max_radius: f64,
    pub propagation_speed: f64,
    pub repeat_period_ms: f64,
}

impl RingLayer {
    pub fn new(selection: RingSelection, config: &GlobeConfig) -> Self {
        Self {
            selection,
            max_radius: f64::from(config.max_rings),
            propagation_speed: RING_PROPAGATION_SPEED,
            repeat_period_ms: config.ring_repeat_period_ms(),
        }
    }

    /// Ring color for selected point `i` at progress `t`, using the point's
    /// own fade.
    pub fn color(&self, i: usize, t: f64) -> Option<String> {
        self.selection.points.get(i).map(|p| p.color.at(t))
    }
}

// ---------------------------------------------------------------------------
// SurfaceMaterial / OrbitControls
// ---------------------------------------------------------------------------

/// Globe surface material, set once after initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMaterial {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f64,
    pub shininess: f64,
}

impl SurfaceMaterial {
    /// Build the material from config, rejecting non-hex colors.
    pub fn from_config(config: &GlobeConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            color: parse_material_color("globe_color", &config.globe_color)?,
            emissive: parse_material_color("emissive", &config.emissive)?,
            emissive_intensity: config.emissive_intensity,
            shininess: config.shininess,
        })
    }
}

fn parse_material_color(field: &'static str, value: &str) -> Result<Rgb, PipelineError> {
    hex_to_rgb(value).ok_or_else(|| PipelineError::InvalidMaterialColor {
        field,
        source: arcglobe_color::ColorError::InvalidFormat(value.to_string()),
    })
}

/// Auto-rotation settings for the orbit controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

impl OrbitControls {
    pub fn from_config(config: &GlobeConfig) -> Self {
        Self {
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn arc(order: u32) -> GlobeArc {
        GlobeArc {
            order,
            start_lat: 0.0,
            start_lng: 0.0,
            end_lat: 1.0,
            end_lng: 1.0,
            arc_alt: 0.25,
            color: "#06b6d4".to_string(),
        }
    }

    #[test]
    fn test_stroke_distribution_favours_middle() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            let stroke = pick_arc_stroke(&mut rng);
            let idx = ARC_STROKES.iter().position(|&s| s == stroke).unwrap();
            counts[idx] += 1;
        }
        assert!(counts[1] > counts[0]);
        assert!(counts[1] > counts[2]);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_arc_layer_accessors() {
        let arcs: Arc<[GlobeArc]> = vec![arc(0), arc(4)].into();
        let layer = ArcLayer::new(arcs, vec![0.3, 0.28], &GlobeConfig::default());
        assert_eq!(layer.dash_initial_gap(1), Some(4.0));
        assert_eq!(layer.altitude(0), Some(0.25));
        assert_eq!(layer.color(0), Some("#06b6d4"));
        assert_eq!(layer.color(5), None);
        assert_eq!(layer.dash_length, 0.9);
        assert_eq!(layer.dash_gap, ARC_DASH_GAP);
        assert_eq!(layer.dash_animate_time, Duration::from_millis(2000));
    }

    #[test]
    fn test_hex_layer_copies_config() {
        let config = GlobeConfig {
            show_atmosphere: false,
            ..GlobeConfig::default()
        };
        let countries = Arc::new(CountryFeatureCollection::new(Vec::new()));
        let layer = HexPolygonLayer::new(Arc::clone(&countries), &config);
        assert!(Arc::ptr_eq(&layer.countries, &countries));
        assert_eq!(layer.resolution, 3);
        assert_eq!(layer.margin, 0.7);
        assert_eq!(layer.color, "rgba(255,255,255,0.7)");
        assert!(!layer.show_atmosphere);
    }

    #[test]
    fn test_ring_layer_parameters() {
        let layer = RingLayer::new(RingSelection::default(), &GlobeConfig::default());
        assert_eq!(layer.max_radius, 3.0);
        assert_eq!(layer.propagation_speed, 3.0);
        assert!((layer.repeat_period_ms - 1800.0).abs() < 1e-9);
        assert_eq!(layer.color(0, 0.0), None);
    }

    #[test]
    fn test_material_from_defaults() {
        let material = SurfaceMaterial::from_config(&GlobeConfig::default()).unwrap();
        assert_eq!(material.color, Rgb::new(0x1d, 0x07, 0x2e));
        assert_eq!(material.emissive, Rgb::BLACK);
        assert_eq!(material.emissive_intensity, 0.1);
        assert_eq!(material.shininess, 0.9);
    }

    #[test]
    fn test_material_rejects_non_hex() {
        let config = GlobeConfig {
            emissive: "black".to_string(),
            ..GlobeConfig::default()
        };
        let err = SurfaceMaterial::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidMaterialColor {
                field: "emissive",
                ..
            }
        ));
    }
}
