use serde_json::{Map, Value};

use super::{Category, Point};
use crate::geometry;

/// One polygon of a zone: an outer ring plus any number of holes.
/// Rings are ordered vertex sequences; closure (first == last) is not required.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePolygon {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl ZonePolygon {
    pub fn new(outer: Vec<Point>) -> Self {
        ZonePolygon {
            outer,
            holes: Vec::new(),
        }
    }
}

/// The full geometry of a zone. The upstream store keeps zones as
/// `MultiPolygon`, so a single feature may carry several disjoint polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGeometry {
    pub polygons: Vec<ZonePolygon>,
}

impl ZoneGeometry {
    pub fn single(polygon: ZonePolygon) -> Self {
        ZoneGeometry {
            polygons: vec![polygon],
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.polygons
            .iter()
            .any(|p| geometry::point_in_polygon(point, p))
    }

    /// Planar area in coordinate units, for relative comparison only.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(geometry::polygon_area).sum()
    }
}

/// A regulated zone as returned by the candidate-feature source.
/// Owned by the caller, never mutated or cached by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFeature {
    pub geometry: ZoneGeometry,
    pub category: Category,
    /// Raw feature properties (name, detailed_info, ...), passed through to
    /// whatever presents the zone.
    pub properties: Map<String, Value>,
}

impl ZoneFeature {
    pub fn new(geometry: ZoneGeometry, category: Category) -> Self {
        ZoneFeature {
            geometry,
            category,
            properties: Map::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}
