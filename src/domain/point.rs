use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
/// Created per query and treated as planar for geometry tests (local-area deployment).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Point { lon, lat }
    }

    /// Malformed coordinates come in from external query results; callers
    /// check this instead of trusting the source.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}
