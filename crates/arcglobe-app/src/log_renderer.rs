//! A headless [`GlobeRenderer`] that reports every layer update to the log.

use arcglobe_pipeline::{
    ArcLayer, GlobeRenderer, HexPolygonLayer, OrbitControls, PointLayer, RingLayer,
    SurfaceMaterial,
};
use tracing::{debug, info};

/// Logs layer publications and counts them.
#[derive(Debug, Default)]
pub struct LogRenderer {
    layer_updates: u64,
    ring_updates: u64,
}

impl LogRenderer {
    /// Non-ring layer publications received.
    pub fn layer_updates(&self) -> u64 {
        self.layer_updates
    }

    /// Ring layer publications received.
    pub fn ring_updates(&self) -> u64 {
        self.ring_updates
    }
}

impl GlobeRenderer for LogRenderer {
    fn set_surface_material(&mut self, material: &SurfaceMaterial) {
        self.layer_updates += 1;
        info!(
            color = %material.color,
            emissive = %material.emissive,
            emissive_intensity = material.emissive_intensity,
            shininess = material.shininess,
            "Surface material set"
        );
    }

    fn set_orbit_controls(&mut self, controls: &OrbitControls) {
        self.layer_updates += 1;
        info!(
            auto_rotate = controls.auto_rotate,
            speed = controls.auto_rotate_speed,
            "Orbit controls set"
        );
    }

    fn set_hex_polygons(&mut self, layer: &HexPolygonLayer) {
        self.layer_updates += 1;
        info!(
            features = layer.countries.len(),
            resolution = layer.resolution,
            margin = layer.margin,
            atmosphere = layer.show_atmosphere,
            "Hex polygon layer set"
        );
    }

    fn set_arcs(&mut self, layer: &ArcLayer) {
        self.layer_updates += 1;
        info!(
            arcs = layer.arcs.len(),
            dash_length = layer.dash_length,
            animate_ms = layer.dash_animate_time.as_millis() as u64,
            "Arc layer set"
        );
    }

    fn set_points(&mut self, layer: &PointLayer) {
        self.layer_updates += 1;
        info!(points = layer.points.len(), "Point layer set");
    }

    fn set_rings(&mut self, layer: &RingLayer) {
        self.ring_updates += 1;
        debug!(
            tick = layer.selection.tick,
            rings = layer.selection.len(),
            "Ring layer set"
        );
        for point in &layer.selection.points {
            debug!(lat = point.lat, lng = point.lng, order = point.order, "Ring");
        }
    }
}
