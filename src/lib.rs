#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod geometry;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::RulesConfig;
pub use data::{CandidateSource, FetchError, FixedLocation, GeoJsonFileSource, LocationSource};
pub use domain::{Category, Point, RestrictionVerdict, ZoneFeature};
pub use engine::{LogObserver, MonitorStatus, WardenEngine};
pub use utils::{Clock, SystemClock};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GeoJSON FeatureCollection with the zone polygons to monitor
    #[arg(long, default_value = "demos/zones.geojson")]
    pub zones: PathBuf,

    /// Longitude of the monitored position (WGS84 degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Latitude of the monitored position (WGS84 degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Optional zone rules JSON (categories, windows, gated category);
    /// built-in defaults apply when omitted
    #[arg(long)]
    pub rules: Option<PathBuf>,
}
