//! The rendering collaborator boundary.

use crate::{ArcLayer, HexPolygonLayer, OrbitControls, PointLayer, RingLayer, SurfaceMaterial};

/// Setter-style bindings of the external globe renderer.
///
/// Each call replaces the whole layer; implementations keep only the latest
/// value they were given. The surface material and orbit controls are set
/// once at initialization and again only when a reconfiguration changes
/// them.
pub trait GlobeRenderer {
    fn set_surface_material(&mut self, material: &SurfaceMaterial);
    fn set_orbit_controls(&mut self, controls: &OrbitControls);
    fn set_hex_polygons(&mut self, layer: &HexPolygonLayer);
    fn set_arcs(&mut self, layer: &ArcLayer);
    fn set_points(&mut self, layer: &PointLayer);
    fn set_rings(&mut self, layer: &RingLayer);
}

/// One binding call captured by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    SurfaceMaterial(SurfaceMaterial),
    OrbitControls(OrbitControls),
    HexPolygons(HexPolygonLayer),
    Arcs(ArcLayer),
    Points(PointLayer),
    Rings(RingLayer),
}

/// A headless renderer that records every binding call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RecordedCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ring layer publications so far.
    pub fn ring_publications(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Rings(_)))
            .count()
    }

    /// Most recent ring layer, if any.
    pub fn last_rings(&self) -> Option<&RingLayer> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::Rings(layer) => Some(layer),
            _ => None,
        })
    }

    /// Most recent point layer, if any.
    pub fn last_points(&self) -> Option<&PointLayer> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::Points(layer) => Some(layer),
            _ => None,
        })
    }

    /// Most recent arc layer, if any.
    pub fn last_arcs(&self) -> Option<&ArcLayer> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::Arcs(layer) => Some(layer),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl GlobeRenderer for RecordingRenderer {
    fn set_surface_material(&mut self, material: &SurfaceMaterial) {
        self.calls.push(RecordedCall::SurfaceMaterial(*material));
    }

    fn set_orbit_controls(&mut self, controls: &OrbitControls) {
        self.calls.push(RecordedCall::OrbitControls(*controls));
    }

    fn set_hex_polygons(&mut self, layer: &HexPolygonLayer) {
        self.calls.push(RecordedCall::HexPolygons(layer.clone()));
    }

    fn set_arcs(&mut self, layer: &ArcLayer) {
        self.calls.push(RecordedCall::Arcs(layer.clone()));
    }

    fn set_points(&mut self, layer: &PointLayer) {
        self.calls.push(RecordedCall::Points(layer.clone()));
    }

    fn set_rings(&mut self, layer: &RingLayer) {
        self.calls.push(RecordedCall::Rings(layer.clone()));
    }
}
