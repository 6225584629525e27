//! Configuration system for arcglobe.
//!
//! Provides globe appearance, ring scheduling, dataset and debug settings that
//! persist to disk as RON files. Supports CLI overrides via clap, hot-reload
//! detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DataConfig, DebugConfig, GlobeConfig, SchedulerConfig};
pub use error::ConfigError;
