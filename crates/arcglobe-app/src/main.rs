//! Headless arcglobe runner: loads the datasets, drives the ring scheduler in
//! real time and logs every layer the renderer would receive.

mod frame_loop;
mod log_renderer;
mod platform;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use arcglobe_config::{CliArgs, Config, ConfigError};
use arcglobe_pipeline::{
    DatasetError, GlobeDataPipeline, InitStatus, PipelineError, load_arcs, load_countries,
};
use clap::Parser;
use tracing::{error, info, warn};

use crate::frame_loop::{FRAME_INTERVAL, FrameLoop};
use crate::log_renderer::LogRenderer;
use crate::platform::{PlatformDirs, PlatformError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("--run-seconds must be a non-negative number, got {0}")]
    InvalidRunTime(f64),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match prepare_dirs(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    arcglobe_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config, args.run_seconds) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the config and log directories and create them on disk.
fn prepare_dirs(config_override: Option<&Path>) -> Result<PlatformDirs, AppError> {
    let dirs = PlatformDirs::resolve(config_override)?;
    dirs.ensure_exists()?;
    Ok(dirs)
}

fn run(config: &Config, run_seconds: Option<f64>) -> Result<(), AppError> {
    config.validate()?;
    let limit = run_seconds
        .map(|s| Duration::try_from_secs_f64(s).map_err(|_| AppError::InvalidRunTime(s)))
        .transpose()?;

    let mut pipeline = build_pipeline(config)?;
    match pipeline.initialize() {
        InitStatus::Ready | InitStatus::AlreadyInitialized => {}
        InitStatus::Deferred { missing } => {
            warn!(?missing, "Globe not initialized, nothing to animate");
            return Ok(());
        }
    }

    let mut frames = FrameLoop::new();
    let mut ticks = 0u64;
    loop {
        frames.tick(|dt| ticks += u64::from(pipeline.advance(dt)));
        if limit.is_some_and(|limit| frames.elapsed() >= limit) {
            break;
        }
        std::thread::sleep(FRAME_INTERVAL);
    }
    pipeline.teardown();

    let (layer_updates, ring_updates) = pipeline
        .renderer()
        .map_or((0, 0), |r| (r.layer_updates(), r.ring_updates()));
    info!(
        frames = frames.frame_count(),
        ring_ticks = ticks,
        layer_updates,
        ring_updates,
        "Run finished after {:.1}s",
        frames.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Create the pipeline and feed it every configured input.
fn build_pipeline(config: &Config) -> Result<GlobeDataPipeline<LogRenderer>, AppError> {
    let mut pipeline = GlobeDataPipeline::new(config.globe.clone(), &config.scheduler)?;
    pipeline.attach_renderer(LogRenderer::default());

    match &config.data.arcs_path {
        Some(path) => {
            pipeline.on_arcs_changed(load_arcs(path)?);
        }
        None => warn!("No arcs file configured, the globe starts empty"),
    }
    if let Some(path) = &config.data.countries_path {
        pipeline.set_countries(load_countries(path)?);
    }
    Ok(pipeline)
}
