//! Configuration structs with documented defaults and RON persistence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe appearance and animation settings.
    pub globe: GlobeConfig,
    /// Ring re-sampling settings.
    pub scheduler: SchedulerConfig,
    /// Input dataset locations.
    pub data: DataConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Appearance and animation parameters consumed by the renderer.
///
/// Only `point_size` feeds the point derivation itself; everything else is
/// forwarded to the rendering bindings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Size assigned to every derived point.
    pub point_size: f64,
    /// Atmosphere glow color.
    pub atmosphere_color: String,
    /// Draw the atmosphere glow.
    pub show_atmosphere: bool,
    /// Atmosphere thickness as a fraction of the globe radius.
    pub atmosphere_altitude: f64,
    /// Fill color of the country hex polygons (any CSS color).
    pub polygon_color: String,
    /// Base color of the globe surface material.
    pub globe_color: String,
    /// Emissive color of the globe surface material.
    pub emissive: String,
    pub emissive_intensity: f64,
    pub shininess: f64,
    /// Arc dash animation duration in milliseconds.
    pub arc_time_ms: u64,
    /// Arc dash length, as a fraction of the arc.
    pub arc_length: f64,
    /// Rings emitted per ring repeat period.
    pub rings: u32,
    /// Maximum ring radius, in degrees.
    pub max_rings: u32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

/// Ring scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Interval between ring re-samples in milliseconds.
    pub ring_interval_ms: u64,
    /// Fixed RNG seed for reproducible ring selections and arc strokes.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Locations of the arc and country datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// JSON array of arcs.
    pub arcs_path: Option<PathBuf>,
    /// GeoJSON feature collection of country boundaries.
    pub countries_path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "arcglobe_rings=trace").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            point_size: 1.0,
            atmosphere_color: "#ffffff".to_string(),
            show_atmosphere: true,
            atmosphere_altitude: 0.1,
            polygon_color: "rgba(255,255,255,0.7)".to_string(),
            globe_color: "#1d072e".to_string(),
            emissive: "#000000".to_string(),
            emissive_intensity: 0.1,
            shininess: 0.9,
            arc_time_ms: 2000,
            arc_length: 0.9,
            rings: 1,
            max_rings: 3,
            auto_rotate: true,
            auto_rotate_speed: 1.0,
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            ring_interval_ms: 2000,
            seed: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Derived values ---

impl GlobeConfig {
    /// Arc dash animation duration.
    pub fn arc_time(&self) -> Duration {
        Duration::from_millis(self.arc_time_ms)
    }

    /// Time between successive rings at one point, in milliseconds:
    /// `arc_time * arc_length / rings`.
    pub fn ring_repeat_period_ms(&self) -> f64 {
        self.arc_time_ms as f64 * self.arc_length / f64::from(self.rings.max(1))
    }
}

impl SchedulerConfig {
    /// Interval between ring re-samples.
    pub fn ring_interval(&self) -> Duration {
        Duration::from_millis(self.ring_interval_ms)
    }
}

// --- Validation ---

impl Config {
    /// Reject values that parse but cannot drive the globe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.globe;
        if !(g.point_size.is_finite() && g.point_size >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "globe.point_size",
                reason: "must be a finite, non-negative number",
            });
        }
        if !(0.0..=1.0).contains(&g.arc_length) {
            return Err(ConfigError::InvalidValue {
                field: "globe.arc_length",
                reason: "must be within [0, 1]",
            });
        }
        if g.rings == 0 {
            return Err(ConfigError::InvalidValue {
                field: "globe.rings",
                reason: "must be at least 1",
            });
        }
        if self.scheduler.ring_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scheduler.ring_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
