//! Point-in-polygon and area predicates over single zone polygons.
//!
//! Coordinates are treated as planar degrees; at neighbourhood scale the
//! distortion is irrelevant for containment and for the relative area
//! comparison the resolver needs. Candidate geometry arrives from an
//! external query, so nothing here ever fails: degenerate or non-finite
//! input degrades to `false` / `0.0`.

use crate::domain::{Point, ZonePolygon};

/// Ray-casting test against one ring. Fewer than 3 vertices is not a ring.
fn ring_contains(point: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 || !point.is_finite() {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let intersect_lon = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < intersect_lon {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area of one ring. Positive regardless of winding order;
/// degenerate or non-finite rings count as zero.
fn ring_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].lon * ring[j].lat;
        area -= ring[j].lon * ring[i].lat;
    }
    let area = area.abs() / 2.0;
    if area.is_finite() { area } else { 0.0 }
}

/// Is the point inside the polygon's outer ring but outside all holes?
pub fn point_in_polygon(point: Point, polygon: &ZonePolygon) -> bool {
    if !ring_contains(point, &polygon.outer) {
        return false;
    }
    !polygon.holes.iter().any(|hole| ring_contains(point, hole))
}

/// Planar area of the polygon: outer ring minus holes, floored at zero.
/// Only ever used to rank overlapping candidates, never shown to the user.
pub fn polygon_area(polygon: &ZonePolygon) -> f64 {
    let holes: f64 = polygon.holes.iter().map(|h| ring_area(h)).sum();
    (ring_area(&polygon.outer) - holes).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ]
    }

    #[test]
    fn test_point_inside_square() {
        let poly = ZonePolygon::new(square(0.0, 0.0, 2.0));
        assert!(point_in_polygon(Point::new(1.0, 1.0), &poly));
        assert!(!point_in_polygon(Point::new(3.0, 1.0), &poly));
        assert!(!point_in_polygon(Point::new(-0.5, 1.0), &poly));
    }

    #[test]
    fn test_point_in_hole_is_outside() {
        let mut poly = ZonePolygon::new(square(0.0, 0.0, 4.0));
        poly.holes.push(square(1.0, 1.0, 2.0));
        assert!(point_in_polygon(Point::new(0.5, 0.5), &poly));
        assert!(!point_in_polygon(Point::new(2.0, 2.0), &poly));
    }

    #[test]
    fn test_degenerate_ring_is_never_hit() {
        let line = ZonePolygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(!point_in_polygon(Point::new(0.5, 0.5), &line));
        assert_eq!(polygon_area(&line), 0.0);

        let empty = ZonePolygon::new(vec![]);
        assert!(!point_in_polygon(Point::new(0.0, 0.0), &empty));
        assert_eq!(polygon_area(&empty), 0.0);
    }

    #[test]
    fn test_nan_input_degrades_to_false_and_zero() {
        let poly = ZonePolygon::new(square(0.0, 0.0, 2.0));
        assert!(!point_in_polygon(Point::new(f64::NAN, 1.0), &poly));

        let broken = ZonePolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(polygon_area(&broken), 0.0);
    }

    #[test]
    fn test_shoelace_area() {
        let poly = ZonePolygon::new(square(0.0, 0.0, 2.0));
        assert_relative_eq!(polygon_area(&poly), 4.0);

        // Winding order must not matter
        let mut reversed = poly.outer.clone();
        reversed.reverse();
        assert_relative_eq!(polygon_area(&ZonePolygon::new(reversed)), 4.0);
    }

    #[test]
    fn test_area_subtracts_holes() {
        let mut poly = ZonePolygon::new(square(0.0, 0.0, 4.0));
        poly.holes.push(square(1.0, 1.0, 2.0));
        assert_relative_eq!(polygon_area(&poly), 12.0);
    }
}
