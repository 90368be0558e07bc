use std::cmp::Ordering;

use super::{centered, Symmetries};
use crate::cfg::GeomCfg;
use crate::error::InvalidShapeError;
use crate::point::Point;
use crate::shape::{angle_deg, canonical_order, RadialGraph, Shape};

/// Rotational-symmetry detector for `RadialGraph`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialGraphSymmetries {
    cfg: GeomCfg,
}

impl RadialGraphSymmetries {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }
}

/// Signed angle (degrees) of `p` seen from `center`, in `(-180, 180]`.
#[inline]
fn angle_from(center: &Point, p: &Point) -> f64 {
    angle_deg(p.vec() - center.vec())
}

/// Cyclic deltas `angle(n[i+1]) - angle(n[i])` over an already sorted list.
fn angular_deltas(center: &Point, sorted: &[Point]) -> Vec<f64> {
    let n = sorted.len();
    (0..n)
        .map(|i| angle_from(center, &sorted[(i + 1) % n]) - angle_from(center, &sorted[i]))
        .collect()
}

/// Neighbors as quantized offsets from the graph's center, names kept.
fn centered_neighbors(g: &RadialGraph) -> Vec<Point> {
    let center = g.center();
    g.neighbors()
        .iter()
        .map(|p| Point::from_vec(p.name(), centered(p, &center)))
        .collect()
}

impl Symmetries<RadialGraph> for RadialGraphSymmetries {
    /// Under `Tolerance::Abs(eps)` the same `eps` bounds coordinate and
    /// radius differences and, in degrees, the angular deltas.
    fn are_symmetric(&self, a: &RadialGraph, b: &RadialGraph) -> bool {
        let tol = self.cfg.tol;
        let (na, nb) = (centered_neighbors(a), centered_neighbors(b));
        if na.len() != nb.len() {
            tracing::trace!(left = na.len(), right = nb.len(), "neighbor counts differ");
            return false;
        }
        let radius = |ns: &[Point]| ns.first().map_or(0.0, |p| p.vec().norm());
        let (ra, rb) = (radius(&na), radius(&nb));
        if !tol.eq(ra, rb) {
            tracing::trace!(left = ra, right = rb, "radii differ");
            return false;
        }
        let anchored = na
            .iter()
            .any(|p| nb.iter().any(|q| p.same_position(q, tol)));
        if !anchored {
            tracing::trace!("no shared neighbor position");
            return false;
        }

        let origin = Point::new("center", 0.0, 0.0);
        let da = angular_deltas(&origin, &canonical_order(&na));
        let db = angular_deltas(&origin, &canonical_order(&nb));
        let same = da.iter().zip(&db).all(|(x, y)| tol.eq(*x, *y));
        tracing::debug!(same, neighbors = na.len(), "angular fingerprints compared");
        same
    }

    /// The graph itself, then one rotation per further neighbor: the turn that
    /// carries the first angularly sorted neighbor onto each later one.
    fn symmetries_of(&self, graph: &RadialGraph) -> Result<Vec<RadialGraph>, InvalidShapeError> {
        let center = graph.center();
        let mut sorted = graph.neighbors().to_vec();
        sorted.sort_by(|p, q| {
            angle_from(&center, p)
                .partial_cmp(&angle_from(&center, q))
                .unwrap_or(Ordering::Equal)
        });

        let mut out = Vec::with_capacity(sorted.len());
        out.push(graph.clone());
        let mut acc = 0.0;
        for pair in sorted.windows(2) {
            acc += angle_from(&center, &pair[1]) - angle_from(&center, &pair[0]);
            out.push(graph.rotate_by(acc.round() as i32)?);
        }
        Ok(out)
    }
}
