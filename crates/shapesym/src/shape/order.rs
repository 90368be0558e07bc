//! Canonical point ordering: polar angle first, distance second.
//!
//! Key: `angle_deg(p) * 1000 + |p|` with `angle_deg` in `[0, 360)`, measured
//! about the origin. Callers are responsible for recentering; display uses raw
//! coordinates, the radial comparison sorts points already shifted to the origin.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::cfg::ANGLE_KEY_WEIGHT;
use crate::point::Point;

/// Signed polar angle of `v` in degrees, in `(-180, 180]`.
#[inline]
pub(crate) fn angle_deg(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Polar angle of `v` in degrees, normalized to `[0, 360)`.
#[inline]
pub(crate) fn angle_deg_normalized(v: Vector2<f64>) -> f64 {
    (angle_deg(v) + 360.0) % 360.0
}

#[inline]
pub fn canonical_key(p: &Point) -> f64 {
    let v = p.vec();
    angle_deg_normalized(v) * ANGLE_KEY_WEIGHT + v.norm()
}

/// Stable sort by `canonical_key`.
pub fn canonical_order(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| {
        canonical_key(a)
            .partial_cmp(&canonical_key(b))
            .unwrap_or(Ordering::Equal)
    });
    out
}

/// `"[" + entries joined by "; " + "]"`.
pub(crate) fn write_bracketed<'a>(
    f: &mut std::fmt::Formatter<'_>,
    points: impl IntoIterator<Item = &'a Point>,
) -> std::fmt::Result {
    f.write_str("[")?;
    for (i, p) in points.into_iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        write!(f, "{p}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_orders_by_angle_then_distance() {
        let pts = vec![
            Point::new("south", 0.0, -1.0),
            Point::new("far_east", 2.0, 0.0),
            Point::new("west", -1.0, 0.0),
            Point::new("east", 1.0, 0.0),
            Point::new("north", 0.0, 1.0),
        ];
        let names: Vec<_> = canonical_order(&pts)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["east", "far_east", "north", "west", "south"]);
    }

    #[test]
    fn normalized_angle_range() {
        assert!((angle_deg_normalized(Vector2::new(0.0, -1.0)) - 270.0).abs() < 1e-12);
        assert_eq!(angle_deg_normalized(Vector2::new(1.0, 0.0)), 0.0);
        assert!((angle_deg(Vector2::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
    }
}
