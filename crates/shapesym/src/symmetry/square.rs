use nalgebra::Vector2;

use super::{quantize, Symmetries};
use crate::cfg::{GeomCfg, Tolerance};
use crate::error::InvalidShapeError;
use crate::point::Point;
use crate::shape::{Shape, Square};

const IDENTITY: [usize; 4] = [0, 1, 2, 3];

/// Reflections as vertex permutations: vertex `i` of one square pairs with
/// vertex `perm[i]` of the other.
const REFLECTIONS: [(&str, [usize; 4]); 4] = [
    ("vertical", [3, 2, 1, 0]),
    ("horizontal", [1, 0, 3, 2]),
    ("diagonal", [0, 3, 2, 1]),
    ("anti-diagonal", [2, 1, 0, 3]),
];

/// Dihedral-group (order 8) detector for `Square`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareSymmetries {
    cfg: GeomCfg,
}

impl SquareSymmetries {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }
}

/// Exact counter-clockwise rotation of `v` by `90 * k` degrees.
#[inline]
fn quarter_turn(v: Vector2<f64>, k: usize) -> Vector2<f64> {
    match k % 4 {
        0 => v,
        1 => Vector2::new(-v.y, v.x),
        2 => -v,
        _ => Vector2::new(v.y, -v.x),
    }
}

/// Vertex offsets from the square's center. Quantized at twice the offset,
/// `2p - (p0 + p2)`, which stays on the coordinate grid even when the center
/// falls halfway between grid points; halving afterwards is exact.
fn offsets(s: &Square) -> [Vector2<f64>; 4] {
    let pts = s.points();
    let diag = pts[0].vec() + pts[2].vec();
    std::array::from_fn(|i| quantize(pts[i].vec() * 2.0 - diag) / 2.0)
}

fn matches_permuted(
    a: &[Vector2<f64>; 4],
    b: &[Vector2<f64>; 4],
    perm: &[usize; 4],
    tol: Tolerance,
) -> bool {
    a.iter()
        .zip(perm)
        .all(|(p, &j)| tol.eq(p.x, b[j].x) && tol.eq(p.y, b[j].y))
}

/// Vertex names permuted by `perm` over the unchanged coordinates.
fn relabel(square: &Square, perm: &[usize; 4]) -> Result<Square, InvalidShapeError> {
    let pts = square.points();
    let relabeled: [Point; 4] =
        std::array::from_fn(|i| pts[i].with_name(pts[perm[i]].name()));
    Square::with_cfg(relabeled, square.cfg())
}

impl Symmetries<Square> for SquareSymmetries {
    fn are_symmetric(&self, a: &Square, b: &Square) -> bool {
        let tol = self.cfg.tol;
        let a0 = offsets(a);
        let b0 = offsets(b);

        // Quarter turns of the centered original: 90, 180, 270, 360.
        for step in 1..=4 {
            let turned = a0.map(|v| quarter_turn(v, step));
            if matches_permuted(&turned, &b0, &IDENTITY, tol) {
                tracing::debug!(degrees = 90 * step, "squares match by rotation");
                return true;
            }
        }

        for (axis, perm) in &REFLECTIONS {
            if matches_permuted(&a0, &b0, perm, tol) {
                tracing::debug!(axis, "squares match by reflection");
                return true;
            }
        }
        tracing::trace!("no rotation or reflection maps the squares onto each other");
        false
    }

    /// Four rotations (0, 90, 180, 270 degrees), then four reflections built
    /// by relabeling vertex names onto the existing coordinates.
    fn symmetries_of(&self, square: &Square) -> Result<Vec<Square>, InvalidShapeError> {
        let mut out = Vec::with_capacity(8);
        for degrees in [0, 90, 180, 270] {
            out.push(square.rotate_by(degrees)?);
        }
        for (_, perm) in &REFLECTIONS {
            out.push(relabel(square, perm)?);
        }
        Ok(out)
    }
}
