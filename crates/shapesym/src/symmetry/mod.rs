//! Symmetry detection per shape variant.
//!
//! - `SquareSymmetries`: brute-force membership in the dihedral group of
//!   order 8 (four quarter turns, four fixed reflections).
//! - `RadialGraphSymmetries`: radius, anchor, and angular fingerprint match.
//!
//! Both detectors compare in the centered frame: each point is replaced by its
//! offset from the shape's center, quantized to the transform grid. No
//! centered shape is rebuilt, so detection never re-validates and never fails;
//! enumeration builds real shapes and surfaces `InvalidShapeError`.
//! Square offsets are quantized at twice their size (see `square::offsets`).

mod radial;
mod square;

use nalgebra::Vector2;

pub use radial::RadialGraphSymmetries;
pub use square::SquareSymmetries;

use crate::cfg::{round2, GeomCfg};
use crate::error::InvalidShapeError;
use crate::point::Point;
use crate::shape::{AnyShape, Shape};

/// Symmetry detector for one shape variant.
pub trait Symmetries<T: Shape> {
    /// Whether `b` is the image of `a` under a symmetry of the shape class.
    fn are_symmetric(&self, a: &T, b: &T) -> bool;
    /// Every symmetric image of `shape`; not deduplicated.
    fn symmetries_of(&self, shape: &T) -> Result<Vec<T>, InvalidShapeError>;
}

/// Offset of `p` from `center`, quantized like a transform result.
#[inline]
pub(crate) fn centered(p: &Point, center: &Point) -> Vector2<f64> {
    quantize(p.vec() - center.vec())
}

#[inline]
pub(crate) fn quantize(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(round2(v.x), round2(v.y))
}

impl AnyShape {
    /// Symmetric images under the detector matching this variant.
    pub fn symmetries(&self, cfg: GeomCfg) -> Result<Vec<AnyShape>, InvalidShapeError> {
        Ok(match self {
            AnyShape::Square(s) => SquareSymmetries::new(cfg)
                .symmetries_of(s)?
                .into_iter()
                .map(AnyShape::Square)
                .collect(),
            AnyShape::Radial(g) => RadialGraphSymmetries::new(cfg)
                .symmetries_of(g)?
                .into_iter()
                .map(AnyShape::Radial)
                .collect(),
        })
    }

    /// `None` when the variants differ (no symmetry relates them).
    pub fn is_symmetric_to(&self, other: &AnyShape, cfg: GeomCfg) -> Option<bool> {
        match (self, other) {
            (AnyShape::Square(a), AnyShape::Square(b)) => {
                Some(SquareSymmetries::new(cfg).are_symmetric(a, b))
            }
            (AnyShape::Radial(a), AnyShape::Radial(b)) => {
                Some(RadialGraphSymmetries::new(cfg).are_symmetric(a, b))
            }
            _ => None,
        }
    }
}
