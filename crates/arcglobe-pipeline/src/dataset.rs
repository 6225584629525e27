//! Arc and country dataset loading.
//!
//! Arcs come from a JSON array of camelCase arc objects. Countries come from a
//! GeoJSON `FeatureCollection`; features are kept as raw JSON and handed to
//! the renderer untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arcglobe_points::GlobeArc;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Errors returned while loading datasets.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON of the expected shape.
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The GeoJSON root is not a `FeatureCollection`.
    #[error("expected a GeoJSON FeatureCollection, found {0:?}")]
    NotFeatureCollection(String),
}

/// A GeoJSON feature collection of country boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    /// Polygon features, passed through as-is.
    pub features: Vec<serde_json::Value>,
}

impl CountryFeatureCollection {
    /// Wrap a list of features in a `FeatureCollection`.
    pub fn new(features: Vec<serde_json::Value>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Load state of the country dataset.
#[derive(Debug, Clone, Default)]
pub enum CountryData {
    /// Not supplied yet; initialization waits for it.
    #[default]
    NotLoaded,
    Loaded(Arc<CountryFeatureCollection>),
}

impl CountryData {
    /// The loaded dataset, if any.
    pub fn get(&self) -> Option<&Arc<CountryFeatureCollection>> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(fc) => Some(fc),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Parse a JSON array of arcs.
pub fn parse_arcs(json: &str) -> Result<Vec<GlobeArc>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        what: "arcs",
        source,
    })
}

/// Parse a GeoJSON feature collection.
pub fn parse_countries(json: &str) -> Result<CountryFeatureCollection, DatasetError> {
    let fc: CountryFeatureCollection =
        serde_json::from_str(json).map_err(|source| DatasetError::Parse {
            what: "countries",
            source,
        })?;
    if fc.kind != "FeatureCollection" {
        return Err(DatasetError::NotFeatureCollection(fc.kind));
    }
    Ok(fc)
}

/// Read and parse an arcs file.
pub fn load_arcs(path: &Path) -> Result<Vec<GlobeArc>, DatasetError> {
    let arcs = parse_arcs(&read(path)?)?;
    info!("Loaded {} arcs from {}", arcs.len(), path.display());
    Ok(arcs)
}

/// Read and parse a countries GeoJSON file.
pub fn load_countries(path: &Path) -> Result<CountryFeatureCollection, DatasetError> {
    let fc = parse_countries(&read(path)?)?;
    info!("Loaded {} country features from {}", fc.len(), path.display());
    Ok(fc)
}

fn read(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}
