//! Directory resolution for config and log files.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while resolving or creating directories.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

const APP_NAME: &str = "arcglobe";

/// Where arcglobe keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// JSON log files (debug builds).
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories without creating them. `config_override` replaces
    /// the OS config location; logs always live under the config directory.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PlatformError::NoConfigDir)?
                .join(APP_NAME),
        };
        let log_dir = config_dir.join("logs");
        Ok(Self {
            config_dir,
            log_dir,
        })
    }

    /// Create every directory that does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), PlatformError> {
        for dir in [&self.config_dir, &self.log_dir] {
            std::fs::create_dir_all(dir).map_err(|source| PlatformError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
