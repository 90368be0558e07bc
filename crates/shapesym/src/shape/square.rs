//! Four-point closed quadrilateral with equal sides and equal diagonals.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::order::{canonical_order, write_bracketed};
use super::transform::{rotate_points, rotation, translate_points};
use super::Shape;
use crate::cfg::{GeomCfg, SquareCheck};
use crate::error::InvalidShapeError;
use crate::point::Point;

/// Square given by four ordered vertices.
///
/// Invariants:
/// - Sorted pairwise distances: the four smallest are equal (sides), the two
///   largest are equal (diagonals), the side is strictly positive.
/// - `center()` is the midpoint of vertices 0 and 2, derived on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    points: [Point; 4],
    cfg: GeomCfg,
}

impl Square {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Result<Self, InvalidShapeError> {
        Self::with_cfg([a, b, c, d], GeomCfg::default())
    }

    pub fn with_cfg(points: [Point; 4], cfg: GeomCfg) -> Result<Self, InvalidShapeError> {
        validate(&points, cfg)?;
        Ok(Self { points, cfg })
    }

    #[inline]
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Smallest pairwise distance.
    pub fn side(&self) -> f64 {
        sorted_distances(&self.points, self.cfg.square_check)[0]
    }

    fn rebuild(&self, points: Vec<Point>) -> Result<Self, InvalidShapeError> {
        let points: [Point; 4] = points
            .try_into()
            .map_err(|_| InvalidShapeError::new("square needs exactly four points"))?;
        Self::with_cfg(points, self.cfg)
    }
}

impl Shape for Square {
    fn rotate_by(&self, degrees: i32) -> Result<Self, InvalidShapeError> {
        let rotated = rotate_points(&self.points, self.center().vec(), &rotation(degrees));
        self.rebuild(rotated)
    }

    fn translate_by(&self, dx: f64, dy: f64) -> Result<Self, InvalidShapeError> {
        self.rebuild(translate_points(&self.points, Vector2::new(dx, dy)))
    }

    fn center(&self) -> Point {
        let mid = (self.points[0].vec() + self.points[2].vec()) / 2.0;
        Point::from_vec("center", mid)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, &canonical_order(&self.points))
    }
}

fn sorted_distances(points: &[Point; 4], check: SquareCheck) -> [f64; 6] {
    let mut d = [0.0; 6];
    let mut k = 0;
    for i in 0..4 {
        for j in (i + 1)..4 {
            d[k] = match check {
                SquareCheck::AllPairs => points[i].distance(&points[j]),
                SquareCheck::LegacyFixedPair => points[0].distance(&points[1]),
            };
            k += 1;
        }
    }
    d.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    d
}

fn validate(points: &[Point; 4], cfg: GeomCfg) -> Result<(), InvalidShapeError> {
    if points.iter().any(|p| !(p.x().is_finite() && p.y().is_finite())) {
        return Err(InvalidShapeError::new("square vertex has a non-finite coordinate"));
    }
    let d = sorted_distances(points, cfg.square_check);
    if !(d[0] > 0.0) {
        return Err(InvalidShapeError::new("square has coincident vertices"));
    }
    let tol = cfg.tol;
    if !(tol.eq(d[0], d[1]) && tol.eq(d[0], d[2]) && tol.eq(d[0], d[3])) {
        return Err(InvalidShapeError::new(format!(
            "square sides differ: {:?}",
            &d[..4]
        )));
    }
    if !tol.eq(d[4], d[5]) {
        return Err(InvalidShapeError::new(format!(
            "square diagonals differ: {} vs {}",
            d[4], d[5]
        )));
    }
    Ok(())
}
