//! Interactive click path: pick the single most relevant zone under a point.

use std::cmp::Ordering;

use crate::domain::{Point, ZoneFeature};
use crate::engine::CategoryRegistry;

/// Resolve the best zone for an interactive query.
///
/// Survivors must geometrically contain the point AND belong to a currently
/// active category. Among survivors the smallest area wins, so a nested
/// zone beats the larger one enclosing it. Exact area ties resolve to the
/// first candidate in input order — defined behavior (`min_by` keeps the
/// first minimal element), not sort-stability luck.
///
/// `None` means nothing actionable here; the caller clears any highlight.
pub fn resolve<'a>(
    point: Point,
    candidates: &'a [ZoneFeature],
    registry: &CategoryRegistry,
) -> Option<&'a ZoneFeature> {
    candidates
        .iter()
        .filter(|c| registry.is_active(&c.category) && c.geometry.contains(point))
        .min_by(|a, b| {
            a.geometry
                .area()
                .partial_cmp(&b.geometry.area())
                .unwrap_or(Ordering::Equal)
        })
}
