//! [`GlobeDataPipeline`]: orchestration of point derivation, ring scheduling
//! and renderer publication.

use std::sync::Arc;
use std::time::Duration;

use arcglobe_config::{GlobeConfig, SchedulerConfig};
use arcglobe_points::{DerivedPoint, GlobeArc, PointError, derive_points};
use arcglobe_rings::{RingScheduler, RingSelection};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    ArcLayer, CountryData, CountryFeatureCollection, GlobeRenderer, HexPolygonLayer,
    OrbitControls, PipelineError, PointLayer, RingLayer, SurfaceMaterial, pick_arc_stroke,
};

/// ChaCha stream used for arc strokes, kept apart from the ring stream.
const STROKE_STREAM: u64 = 1;

/// An input that initialization is still waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingInput {
    Renderer,
    Countries,
}

/// Outcome of [`GlobeDataPipeline::initialize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitStatus {
    /// All layers were published and the ring scheduler started.
    Ready,
    /// Initialization already ran; nothing was done.
    AlreadyInitialized,
    /// Required inputs are not available yet; nothing was done.
    Deferred { missing: Vec<MissingInput> },
}

/// Owns the arc list, the derived points and the current ring selection,
/// and publishes them to a [`GlobeRenderer`].
///
/// Lifecycle:
/// 1. [`new`](Self::new) with the globe and scheduler config.
/// 2. Supply arcs ([`on_arcs_changed`](Self::on_arcs_changed)), countries
///    ([`set_countries`](Self::set_countries)) and a renderer
///    ([`attach_renderer`](Self::attach_renderer)) in any order.
/// 3. [`initialize`](Self::initialize) publishes every layer and starts the
///    ring timer; it defers until both renderer and countries are present.
/// 4. Call [`advance`](Self::advance) each frame with the elapsed time.
/// 5. [`teardown`](Self::teardown) cancels the timer.
pub struct GlobeDataPipeline<R> {
    config: GlobeConfig,
    material: SurfaceMaterial,
    countries: CountryData,
    renderer: Option<R>,
    arcs: Arc<[GlobeArc]>,
    strokes: Vec<f64>,
    points: Arc<[DerivedPoint]>,
    rejected: Vec<PointError>,
    scheduler: RingScheduler,
    stroke_rng: ChaCha8Rng,
    selection: RingSelection,
    initialized: bool,
}

impl<R: GlobeRenderer> GlobeDataPipeline<R> {
    /// Create an empty pipeline with no arcs, countries or renderer.
    pub fn new(config: GlobeConfig, scheduler: &SchedulerConfig) -> Result<Self, PipelineError> {
        let material = SurfaceMaterial::from_config(&config)?;
        let mut stroke_rng = ChaCha8Rng::seed_from_u64(scheduler.seed.unwrap_or_else(rand::random));
        stroke_rng.set_stream(STROKE_STREAM);

        Ok(Self {
            config,
            material,
            countries: CountryData::NotLoaded,
            renderer: None,
            arcs: Arc::from(Vec::new()),
            strokes: Vec::new(),
            points: Arc::from(Vec::new()),
            rejected: Vec::new(),
            scheduler: RingScheduler::new(scheduler.ring_interval(), scheduler.seed),
            stroke_rng,
            selection: RingSelection::default(),
            initialized: false,
        })
    }

    // --- Inputs ---

    /// Replace the globe config and return it.
    ///
    /// Points are re-derived when `point_size` changes. When initialized, the
    /// hex-polygon, arc, point and ring layers are republished; the surface
    /// material and orbit controls only when their values changed.
    pub fn configure(&mut self, config: GlobeConfig) -> Result<&GlobeConfig, PipelineError> {
        let material = SurfaceMaterial::from_config(&config)?;
        let material_changed = material != self.material;
        let controls_changed =
            OrbitControls::from_config(&config) != OrbitControls::from_config(&self.config);
        let resize_points = config.point_size != self.config.point_size;
        self.material = material;
        self.config = config;

        if resize_points {
            self.rederive_points();
        }
        if self.initialized {
            self.publish_layers(material_changed, controls_changed);
        }
        Ok(&self.config)
    }

    /// Supply the country boundary dataset.
    pub fn set_countries(&mut self, countries: CountryFeatureCollection) {
        let countries = Arc::new(countries);
        self.countries = CountryData::Loaded(Arc::clone(&countries));
        if self.initialized
            && let Some(renderer) = self.renderer.as_mut()
        {
            renderer.set_hex_polygons(&HexPolygonLayer::new(countries, &self.config));
        }
    }

    /// Attach the renderer, returning any previous one. The ring timer stops;
    /// a new renderer must be initialized again before it receives layers.
    pub fn attach_renderer(&mut self, renderer: R) -> Option<R> {
        self.teardown();
        self.renderer.replace(renderer)
    }

    /// Detach the renderer and stop the ring timer.
    pub fn detach_renderer(&mut self) -> Option<R> {
        self.teardown();
        self.renderer.take()
    }

    /// Replace the arc list and re-derive points.
    ///
    /// Always recomputes in full and clears the ring selection. When
    /// initialized, the arc, point and ring layers are republished. A running
    /// ring timer restarts its period.
    pub fn on_arcs_changed(&mut self, arcs: impl Into<Arc<[GlobeArc]>>) -> &[DerivedPoint] {
        self.arcs = arcs.into();
        self.strokes = self
            .arcs
            .iter()
            .map(|_| pick_arc_stroke(&mut self.stroke_rng))
            .collect();
        self.rederive_points();

        if self.initialized {
            let arc_layer = self.arc_layer();
            let point_layer = self.point_layer();
            let ring_layer = self.ring_layer();
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.set_arcs(&arc_layer);
                renderer.set_points(&point_layer);
                renderer.set_rings(&ring_layer);
            }
        }
        if self.scheduler.is_active() {
            self.scheduler.start();
        }
        &self.points
    }

    /// Recompute points from the current arcs. The previous selection indexes
    /// the old point set, so it is cleared until the next tick.
    fn rederive_points(&mut self) {
        let derivation = derive_points(&self.arcs, self.config.point_size);
        self.points = derivation.points.into();
        self.rejected = derivation.rejected;
        self.selection = RingSelection::default();
    }

    // --- Lifecycle ---

    /// Publish every layer and start the ring timer once a renderer and the
    /// country dataset are both available.
    pub fn initialize(&mut self) -> InitStatus {
        if self.initialized {
            return InitStatus::AlreadyInitialized;
        }

        let mut missing = Vec::new();
        if self.renderer.is_none() {
            missing.push(MissingInput::Renderer);
        }
        if !self.countries.is_loaded() {
            missing.push(MissingInput::Countries);
        }
        if !missing.is_empty() {
            debug!(?missing, "Deferring globe initialization");
            return InitStatus::Deferred { missing };
        }

        self.initialized = true;
        self.publish_layers(true, true);
        self.scheduler.start();
        info!(
            arcs = self.arcs.len(),
            points = self.points.len(),
            rejected = self.rejected.len(),
            "Globe pipeline initialized"
        );
        InitStatus::Ready
    }

    /// Start the ring timer, restarting its period if already running.
    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Stop the ring timer. No-op when already stopped.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Stop the ring timer and mark the pipeline uninitialized. Later
    /// [`advance`](Self::advance) calls publish nothing until re-initialized.
    pub fn teardown(&mut self) {
        self.scheduler.stop();
        if self.initialized {
            debug!("Globe pipeline torn down");
        }
        self.initialized = false;
    }

    /// Returns true while the ring timer is running.
    pub fn is_active(&self) -> bool {
        self.scheduler.is_active()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Feed elapsed time to the ring timer. Every fired tick replaces the
    /// current selection and, when initialized, republishes the ring layer.
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Self {
            scheduler,
            points,
            arcs,
            selection,
            renderer,
            config,
            initialized,
            ..
        } = self;

        scheduler.advance(dt, points, arcs.len(), |next| {
            *selection = next;
            if *initialized && let Some(renderer) = renderer.as_mut() {
                renderer.set_rings(&RingLayer::new(selection.clone(), config));
            }
        })
    }

    fn publish_layers(&mut self, material: bool, controls: bool) {
        let hex_layer = self.hex_polygon_layer();
        let arc_layer = self.arc_layer();
        let point_layer = self.point_layer();
        let ring_layer = self.ring_layer();
        let orbit_controls = OrbitControls::from_config(&self.config);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if material {
            renderer.set_surface_material(&self.material);
        }
        if controls {
            renderer.set_orbit_controls(&orbit_controls);
        }
        if let Some(hex_layer) = hex_layer {
            renderer.set_hex_polygons(&hex_layer);
        }
        renderer.set_arcs(&arc_layer);
        renderer.set_points(&point_layer);
        renderer.set_rings(&ring_layer);
    }

    // --- Read channels ---

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    pub fn countries(&self) -> &CountryData {
        &self.countries
    }

    pub fn arcs(&self) -> &[GlobeArc] {
        &self.arcs
    }

    /// Derived points for the current arcs.
    pub fn points(&self) -> &[DerivedPoint] {
        &self.points
    }

    /// Arcs excluded from the current point set.
    pub fn rejected_arcs(&self) -> &[PointError] {
        &self.rejected
    }

    /// The latest ring selection; empty before the first tick.
    pub fn ring_selection(&self) -> &RingSelection {
        &self.selection
    }

    /// Hex-polygon layer; `None` until the countries are loaded.
    pub fn hex_polygon_layer(&self) -> Option<HexPolygonLayer> {
        self.countries
            .get()
            .map(|countries| HexPolygonLayer::new(Arc::clone(countries), &self.config))
    }

    pub fn arc_layer(&self) -> ArcLayer {
        ArcLayer::new(Arc::clone(&self.arcs), self.strokes.clone(), &self.config)
    }

    pub fn point_layer(&self) -> PointLayer {
        PointLayer::new(Arc::clone(&self.points))
    }

    pub fn ring_layer(&self) -> RingLayer {
        RingLayer::new(self.selection.clone(), &self.config)
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }
}
