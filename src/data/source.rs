use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;

use crate::data::geojson;
use crate::domain::{Point, ZoneFeature};

/// Failure fetching zone candidates. The engine never swallows these; they
/// surface as an indeterminate status and are retried by the next cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("zone service failure: {0}")]
    Service(String),
    #[error("zone service request timed out")]
    Timeout,
    #[error("malformed zone payload: {0}")]
    Decode(String),
}

/// Abstract interface for the candidate-feature source.
/// Given a point, returns every zone feature whose geometry covers it.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch_candidates(&self, point: Point) -> Result<Vec<ZoneFeature>, FetchError>;
}

/// In-memory source backed by a GeoJSON FeatureCollection on disk.
/// Loads the collection once; containment queries are answered locally.
/// Stands in for the WFS endpoint in deployments without a live service.
pub struct GeoJsonFileSource {
    features: Vec<ZoneFeature>,
}

impl GeoJsonFileSource {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading zone file {}", path.display()))?;
        let features = geojson::parse_feature_collection(&raw)
            .with_context(|| format!("decoding zone file {}", path.display()))?;
        log::info!(
            "Loaded {} zone features from {}",
            features.len(),
            path.display()
        );
        Ok(GeoJsonFileSource { features })
    }

    pub fn from_features(features: Vec<ZoneFeature>) -> Self {
        GeoJsonFileSource { features }
    }
}

#[async_trait]
impl CandidateSource for GeoJsonFileSource {
    async fn fetch_candidates(&self, point: Point) -> Result<Vec<ZoneFeature>, FetchError> {
        Ok(self
            .features
            .iter()
            .filter(|f| f.geometry.contains(point))
            .cloned()
            .collect())
    }
}
