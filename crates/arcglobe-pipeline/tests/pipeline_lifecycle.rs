use std::time::Duration;

use arcglobe_config::{GlobeConfig, SchedulerConfig};
use arcglobe_pipeline::{
    CountryFeatureCollection, GlobeDataPipeline, InitStatus, MissingInput, RecordedCall,
    RecordingRenderer, parse_arcs, parse_countries,
};
use arcglobe_points::{GlobeArc, PointError};

const INTERVAL: Duration = Duration::from_millis(2000);

fn arc(order: u32, start: (f64, f64), end: (f64, f64), color: &str) -> GlobeArc {
    GlobeArc {
        order,
        start_lat: start.0,
        start_lng: start.1,
        end_lat: end.0,
        end_lng: end.1,
        arc_alt: 0.1,
        color: color.to_string(),
    }
}

fn grid_arcs(n: u32) -> Vec<GlobeArc> {
    (0..n)
        .map(|i| {
            let f = f64::from(i);
            arc(i, (f, f), (-f - 1.0, f + 100.0), "#06b6d4")
        })
        .collect()
}

fn ready_pipeline(arcs: Vec<GlobeArc>, seed: u64) -> GlobeDataPipeline<RecordingRenderer> {
    let scheduler = SchedulerConfig {
        seed: Some(seed),
        ..SchedulerConfig::default()
    };
    let mut pipeline = GlobeDataPipeline::new(GlobeConfig::default(), &scheduler).unwrap();
    pipeline.on_arcs_changed(arcs);
    pipeline.set_countries(CountryFeatureCollection::new(Vec::new()));
    pipeline.attach_renderer(RecordingRenderer::new());
    assert_eq!(pipeline.initialize(), InitStatus::Ready);
    pipeline
}

fn renderer(pipeline: &GlobeDataPipeline<RecordingRenderer>) -> &RecordingRenderer {
    pipeline.renderer().unwrap()
}

#[test]
fn shared_endpoint_collapses_to_three_points() {
    let arcs = vec![
        arc(0, (0.0, 0.0), (10.0, 10.0), "#ff0000"),
        arc(1, (0.0, 0.0), (20.0, 20.0), "#00ff00"),
    ];
    let pipeline = ready_pipeline(arcs, 1);

    let points = pipeline.points();
    assert_eq!(points.len(), 3);
    assert_eq!((points[0].lat, points[0].lng), (0.0, 0.0));
    assert_eq!(points[0].order, 0);
    assert_eq!(points[0].color.at(0.0), "rgba(255,0,0,1)");
    assert_eq!((points[1].lat, points[1].lng), (10.0, 10.0));
    assert_eq!((points[2].lat, points[2].lng), (20.0, 20.0));
    assert_eq!(points[2].color.at(1.0), "rgba(0,255,0,0)");

    let published = renderer(&pipeline).last_points().unwrap();
    assert_eq!(&*published.points, points);
    assert!(published.merge);
}

#[test]
fn deferred_until_countries_arrive() {
    let mut pipeline =
        GlobeDataPipeline::new(GlobeConfig::default(), &SchedulerConfig::default()).unwrap();
    pipeline.on_arcs_changed(grid_arcs(5));
    pipeline.attach_renderer(RecordingRenderer::new());

    assert_eq!(
        pipeline.initialize(),
        InitStatus::Deferred {
            missing: vec![MissingInput::Countries]
        }
    );
    pipeline.advance(INTERVAL * 3);
    assert!(renderer(&pipeline).calls.is_empty());

    let countries = parse_countries(
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{},"geometry":null}]}"#,
    )
    .unwrap();
    pipeline.set_countries(countries);
    assert_eq!(pipeline.initialize(), InitStatus::Ready);

    let hex = pipeline.hex_polygon_layer().unwrap();
    assert_eq!(hex.countries.len(), 1);
    assert!(
        renderer(&pipeline)
            .calls
            .iter()
            .any(|c| matches!(c, RecordedCall::HexPolygons(layer) if layer.countries.len() == 1))
    );
}

#[test]
fn ring_selection_size_and_order() {
    let mut pipeline = ready_pipeline(grid_arcs(10), 7);
    assert_eq!(pipeline.points().len(), 20);

    assert_eq!(pipeline.advance(INTERVAL), 1);
    let selection = pipeline.ring_selection().clone();
    assert_eq!(selection.tick, 1);
    assert_eq!(selection.len(), 8);
    assert!(selection.indices.windows(2).all(|w| w[0] < w[1]));
    for (idx, point) in selection.indices.iter().zip(&selection.points) {
        assert_eq!(&pipeline.points()[*idx], point);
    }

    let rings = renderer(&pipeline).last_rings().unwrap();
    assert_eq!(rings.selection, selection);
    assert_eq!(rings.max_radius, 3.0);
}

#[test]
fn partial_interval_fires_nothing() {
    let mut pipeline = ready_pipeline(grid_arcs(4), 3);
    let before = renderer(&pipeline).ring_publications();
    assert_eq!(pipeline.advance(INTERVAL - Duration::from_millis(1)), 0);
    assert_eq!(renderer(&pipeline).ring_publications(), before);
    assert_eq!(pipeline.advance(Duration::from_millis(1)), 1);
    assert_eq!(renderer(&pipeline).ring_publications(), before + 1);
}

#[test]
fn stop_prevents_further_ticks() {
    let mut pipeline = ready_pipeline(grid_arcs(6), 11);
    pipeline.advance(INTERVAL);
    pipeline.stop();
    assert!(!pipeline.is_active());

    let published = renderer(&pipeline).ring_publications();
    assert_eq!(pipeline.advance(INTERVAL * 10), 0);
    assert_eq!(renderer(&pipeline).ring_publications(), published);

    pipeline.start();
    assert_eq!(pipeline.advance(INTERVAL), 1);
    assert_eq!(renderer(&pipeline).ring_publications(), published + 1);
}

#[test]
fn teardown_cancels_timer() {
    let mut pipeline = ready_pipeline(grid_arcs(6), 12);
    pipeline.teardown();
    let published = renderer(&pipeline).ring_publications();
    assert_eq!(pipeline.advance(INTERVAL * 4), 0);
    assert_eq!(renderer(&pipeline).ring_publications(), published);
    assert!(!pipeline.is_initialized());
}

#[test]
fn invalid_arc_is_excluded_without_failing_others() {
    let arcs = vec![
        arc(1, (0.0, 0.0), (1.0, 1.0), "#ffffff"),
        arc(2, (5.0, 5.0), (6.0, 6.0), "cyan"),
        arc(3, (7.0, 7.0), (8.0, 8.0), "#123"),
    ];
    let pipeline = ready_pipeline(arcs, 5);

    assert_eq!(pipeline.points().len(), 4);
    assert!(pipeline.points().iter().all(|p| p.order != 2));
    assert!(matches!(
        pipeline.rejected_arcs(),
        [PointError::InvalidColorFormat { index: 1, order: 2, .. }]
    ));
    // The arc layer still carries every arc.
    assert_eq!(pipeline.arc_layer().arcs.len(), 3);
}

#[test]
fn arcs_change_republishes_and_restarts_period() {
    let mut pipeline = ready_pipeline(grid_arcs(5), 21);
    pipeline.advance(Duration::from_millis(1500));
    pipeline.renderer_mut().unwrap().clear();

    let points = pipeline.on_arcs_changed(grid_arcs(8)).len();
    assert_eq!(points, 16);
    let r = renderer(&pipeline);
    assert_eq!(r.last_arcs().unwrap().arcs.len(), 8);
    assert_eq!(r.last_arcs().unwrap().strokes.len(), 8);
    assert_eq!(r.last_points().unwrap().points.len(), 16);

    // The 1500ms already accumulated was discarded by the restart.
    assert_eq!(pipeline.advance(Duration::from_millis(1000)), 0);
    assert_eq!(pipeline.advance(Duration::from_millis(1000)), 1);
    assert_eq!(pipeline.ring_selection().len(), 6);
}

#[test]
fn shrinking_arcs_keeps_selection_within_points() {
    let mut pipeline = ready_pipeline(grid_arcs(10), 9);
    pipeline.advance(INTERVAL);
    assert_eq!(pipeline.ring_selection().len(), 8);

    pipeline.on_arcs_changed(grid_arcs(1));
    let points = pipeline.points();
    assert_eq!(points.len(), 2);
    let selection = pipeline.ring_selection();
    assert!(selection.indices.iter().all(|&i| i < points.len()));
    assert!(selection.points.iter().all(|p| points.contains(p)));
    assert_eq!(
        renderer(&pipeline).last_rings().unwrap().selection,
        *selection
    );

    // The next tick samples the new point set.
    pipeline.advance(INTERVAL);
    let selection = pipeline.ring_selection();
    assert!(selection.indices.iter().all(|&i| i < pipeline.points().len()));
}

#[test]
fn empty_arcs_publish_empty_layers() {
    let mut pipeline = ready_pipeline(Vec::new(), 2);
    assert!(pipeline.points().is_empty());
    assert_eq!(pipeline.advance(INTERVAL), 1);
    assert!(pipeline.ring_selection().is_empty());
    assert!(renderer(&pipeline).last_rings().unwrap().selection.is_empty());
}

#[test]
fn seeded_pipelines_are_reproducible() {
    let json = r##"[
        {"order": 1, "startLat": 10, "startLng": 20, "endLat": 30, "endLng": 40, "arcAlt": 0.3, "color": "#3b82f6"},
        {"order": 2, "startLat": 11, "startLng": 21, "endLat": 31, "endLng": 41, "arcAlt": 0.2, "color": "#06b6d4"},
        {"order": 3, "startLat": 12, "startLng": 22, "endLat": 32, "endLng": 42, "arcAlt": 0.1, "color": "#6366f1"}
    ]"##;
    let mut a = ready_pipeline(parse_arcs(json).unwrap(), 77);
    let mut b = ready_pipeline(parse_arcs(json).unwrap(), 77);
    assert_eq!(a.arc_layer().strokes, b.arc_layer().strokes);

    for _ in 0..5 {
        a.advance(INTERVAL);
        b.advance(INTERVAL);
        assert_eq!(a.ring_selection(), b.ring_selection());
    }
}
