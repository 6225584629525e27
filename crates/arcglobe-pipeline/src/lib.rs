//! Globe data pipeline: arcs in, renderer layer bindings out.
//!
//! [`GlobeDataPipeline`] derives the point set from the current arc list,
//! drives the ring scheduler, and pushes the hex-polygon, arc, point and ring
//! layers to a [`GlobeRenderer`]. Scene construction, cameras and meshes live
//! behind that trait and are not part of this crate.

mod dataset;
mod error;
mod layers;
mod pipeline;
mod renderer;

pub use dataset::{
    CountryData, CountryFeatureCollection, DatasetError, load_arcs, load_countries, parse_arcs,
    parse_countries,
};
pub use error::PipelineError;
pub use layers::{
    ARC_DASH_GAP, ARC_STROKES, ArcLayer, HEX_POLYGON_MARGIN, HEX_POLYGON_RESOLUTION,
    HexPolygonLayer, OrbitControls, POINT_ALTITUDE, POINT_RADIUS, PointLayer,
    RING_PROPAGATION_SPEED, RingLayer, SurfaceMaterial, pick_arc_stroke,
};
pub use pipeline::{GlobeDataPipeline, InitStatus, MissingInput};
pub use renderer::{GlobeRenderer, RecordedCall, RecordingRenderer};
