//! Command-line argument parsing for arcglobe.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// arcglobe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "arcglobe", about = "Animated arc globe data pipeline")]
pub struct CliArgs {
    /// JSON file with the arc list.
    #[arg(long)]
    pub arcs: Option<PathBuf>,

    /// GeoJSON file with country boundaries.
    #[arg(long)]
    pub countries: Option<PathBuf>,

    /// Size of each derived point.
    #[arg(long)]
    pub point_size: Option<f64>,

    /// Milliseconds between ring re-samples.
    #[arg(long)]
    pub ring_interval_ms: Option<u64>,

    /// Seed for reproducible ring selections.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many seconds (runs until interrupted otherwise).
    #[arg(long)]
    pub run_seconds: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.arcs {
            self.data.arcs_path = Some(path.clone());
        }
        if let Some(ref path) = args.countries {
            self.data.countries_path = Some(path.clone());
        }
        if let Some(size) = args.point_size {
            self.globe.point_size = size;
        }
        if let Some(ms) = args.ring_interval_ms {
            self.scheduler.ring_interval_ms = ms;
        }
        if let Some(seed) = args.seed {
            self.scheduler.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
