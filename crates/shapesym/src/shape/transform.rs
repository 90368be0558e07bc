//! Rigid transform math shared by all shape variants.
//!
//! Every produced coordinate is quantized with `round2` immediately; rounding
//! is never deferred across steps.

use nalgebra::{Matrix2, Vector2};

use crate::cfg::round2;
use crate::point::Point;

/// Counter-clockwise rotation matrix for `degrees`.
#[inline]
pub(crate) fn rotation(degrees: i32) -> Matrix2<f64> {
    let th = f64::from(degrees).to_radians();
    let (s, c) = th.sin_cos();
    Matrix2::new(c, -s, s, c)
}

#[inline]
fn quantize(name: &str, v: Vector2<f64>) -> Point {
    Point::new(name, round2(v.x), round2(v.y))
}

/// Rotate every point about `center` by `rot`, keeping names.
pub(crate) fn rotate_points(points: &[Point], center: Vector2<f64>, rot: &Matrix2<f64>) -> Vec<Point> {
    points
        .iter()
        .map(|p| quantize(p.name(), center + rot * (p.vec() - center)))
        .collect()
}

#[inline]
pub(crate) fn translate_point(p: &Point, t: Vector2<f64>) -> Point {
    quantize(p.name(), p.vec() + t)
}

pub(crate) fn translate_points(points: &[Point], t: Vector2<f64>) -> Vec<Point> {
    points.iter().map(|p| translate_point(p, t)).collect()
}
