//! Star-shaped point set: a hub plus equidistant neighbors.

use std::fmt;

use nalgebra::Vector2;

use super::order::{canonical_order, write_bracketed};
use super::transform::{rotate_points, rotation, translate_point, translate_points};
use super::Shape;
use crate::cfg::GeomCfg;
use crate::error::InvalidShapeError;
use crate::point::Point;

/// Center plus neighbors at a common distance.
///
/// Invariants:
/// - Built by `new`/`with_cfg`: at least two neighbors, all at the same
///   distance from `center` (compared with `cfg.tol`).
/// - Built by `single`: the sole neighbor is the center itself. This graph
///   stays single-point under every transform.
/// - Neighbor order is the caller's; display and comparison re-sort.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGraph {
    center: Point,
    neighbors: Vec<Point>,
    cfg: GeomCfg,
}

impl RadialGraph {
    pub fn new(center: Point, neighbors: Vec<Point>) -> Result<Self, InvalidShapeError> {
        Self::with_cfg(center, neighbors, GeomCfg::default())
    }

    pub fn with_cfg(
        center: Point,
        neighbors: Vec<Point>,
        cfg: GeomCfg,
    ) -> Result<Self, InvalidShapeError> {
        validate(&center, &neighbors, cfg)?;
        Ok(Self {
            center,
            neighbors,
            cfg,
        })
    }

    /// Degenerate graph: just the center.
    pub fn single(center: Point) -> Self {
        Self::single_with_cfg(center, GeomCfg::default())
    }

    pub fn single_with_cfg(center: Point, cfg: GeomCfg) -> Self {
        Self {
            neighbors: vec![center.clone()],
            center,
            cfg,
        }
    }

    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }
    #[inline]
    pub fn is_single_point(&self) -> bool {
        self.neighbors.len() == 1
    }

    /// Distance from the center to the first neighbor (0 for a single point).
    pub fn radius(&self) -> f64 {
        self.neighbors
            .first()
            .map_or(0.0, |n| self.center.distance(n))
    }
}

impl Shape for RadialGraph {
    fn rotate_by(&self, degrees: i32) -> Result<Self, InvalidShapeError> {
        if self.is_single_point() {
            return Ok(self.clone());
        }
        let rotated = rotate_points(&self.neighbors, self.center.vec(), &rotation(degrees));
        Self::with_cfg(self.center.clone(), rotated, self.cfg)
    }

    fn translate_by(&self, dx: f64, dy: f64) -> Result<Self, InvalidShapeError> {
        let t = Vector2::new(dx, dy);
        let center = translate_point(&self.center, t);
        if self.is_single_point() {
            return Ok(Self::single_with_cfg(center, self.cfg));
        }
        Self::with_cfg(center, translate_points(&self.neighbors, t), self.cfg)
    }

    fn center(&self) -> Point {
        self.center.clone()
    }
}

impl fmt::Display for RadialGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_point() {
            return write_bracketed(f, [&self.center]);
        }
        let sorted = canonical_order(&self.neighbors);
        write_bracketed(f, std::iter::once(&self.center).chain(&sorted))
    }
}

fn validate(center: &Point, neighbors: &[Point], cfg: GeomCfg) -> Result<(), InvalidShapeError> {
    if neighbors.len() < 2 {
        return Err(InvalidShapeError::new(format!(
            "radial graph needs at least 2 neighbors, got {}",
            neighbors.len()
        )));
    }
    if let Some(p) = std::iter::once(center)
        .chain(neighbors)
        .find(|p| !(p.x().is_finite() && p.y().is_finite()))
    {
        return Err(InvalidShapeError::new(format!(
            "{} has a non-finite coordinate",
            p.name()
        )));
    }
    let r0 = center.distance(&neighbors[0]);
    if let Some(p) = neighbors
        .iter()
        .find(|p| !cfg.tol.eq(center.distance(p), r0))
    {
        return Err(InvalidShapeError::new(format!(
            "edge lengths differ: {} is at {} from {}, expected {}",
            p.name(),
            center.distance(p),
            center.name(),
            r0
        )));
    }
    Ok(())
}
