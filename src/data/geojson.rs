//! Minimal GeoJSON decoding for zone feature collections.
//!
//! Only the shapes the zone store actually emits are handled: a
//! `FeatureCollection` of `Polygon` / `MultiPolygon` features. The category
//! lives in the `category` property, with `sub_type` accepted as the legacy
//! spelling used by the merged-buffer layers. Features that cannot be
//! decoded are skipped with a warning rather than failing the whole
//! collection; a monitoring check should survive one bad row.

use serde_json::{Map, Value};

use super::FetchError;
use crate::domain::{Category, Point, ZoneFeature, ZoneGeometry, ZonePolygon};

pub fn parse_feature_collection(raw: &str) -> Result<Vec<ZoneFeature>, FetchError> {
    let root: Value =
        serde_json::from_str(raw).map_err(|e| FetchError::Decode(e.to_string()))?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Decode("missing \"features\" array".into()))?;

    let mut out = Vec::with_capacity(features.len());
    for feature in features {
        match parse_feature(feature) {
            Some(f) => out.push(f),
            None => log::warn!("Skipping undecodable zone feature: {feature}"),
        }
    }
    Ok(out)
}

fn parse_feature(feature: &Value) -> Option<ZoneFeature> {
    let properties = feature
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(Map::new);

    let category = category_from(&properties)?;
    let geometry = geometry_from(feature.get("geometry")?)?;

    Some(ZoneFeature {
        geometry,
        category,
        properties,
    })
}

fn category_from(properties: &Map<String, Value>) -> Option<Category> {
    properties
        .get("category")
        .or_else(|| properties.get("sub_type"))
        .and_then(Value::as_str)
        .map(Category::new)
}

fn geometry_from(geometry: &Value) -> Option<ZoneGeometry> {
    let coords = geometry.get("coordinates")?;
    match geometry.get("type").and_then(Value::as_str)? {
        "Polygon" => Some(ZoneGeometry::single(polygon_from(coords)?)),
        "MultiPolygon" => {
            let polygons: Option<Vec<ZonePolygon>> =
                coords.as_array()?.iter().map(polygon_from).collect();
            Some(ZoneGeometry {
                polygons: polygons?,
            })
        }
        other => {
            log::warn!("Unsupported zone geometry type: {other}");
            None
        }
    }
}

/// GeoJSON polygon rings: first ring is the boundary, the rest are holes.
fn polygon_from(rings: &Value) -> Option<ZonePolygon> {
    let mut rings = rings.as_array()?.iter();
    let outer = ring_from(rings.next()?)?;
    let holes: Option<Vec<Vec<Point>>> = rings.map(ring_from).collect();
    Some(ZonePolygon {
        outer,
        holes: holes?,
    })
}

fn ring_from(ring: &Value) -> Option<Vec<Point>> {
    ring.as_array()?
        .iter()
        .map(|pos| {
            let pos = pos.as_array()?;
            Some(Point::new(pos.first()?.as_f64()?, pos.get(1)?.as_f64()?))
        })
        .collect()
}
