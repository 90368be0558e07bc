//! Shapes built from named points.
//!
//! Purpose
//! - `Shape`: the capability every variant provides (rotate, translate,
//!   center, canonical `Display`).
//! - Two variants only: `Square` and `RadialGraph`, gathered in the closed
//!   sum type `AnyShape`.
//!
//! Transforms never mutate; they build a new shape through the validating
//! constructor with the same `GeomCfg`, so a transform can fail with
//! `InvalidShapeError` when quantization breaks an exact-equality invariant.

mod order;
mod radial;
mod square;
mod transform;

use std::fmt;

pub use order::{canonical_key, canonical_order};
pub use radial::RadialGraph;
pub use square::Square;

pub(crate) use order::angle_deg;

use crate::error::InvalidShapeError;
use crate::point::Point;

/// Rigid-transform capability shared by all shape variants.
pub trait Shape: fmt::Display + Clone + Sized {
    /// Rotate counter-clockwise by `degrees` about `center()`.
    fn rotate_by(&self, degrees: i32) -> Result<Self, InvalidShapeError>;
    /// Shift every point, the center included, by `(dx, dy)`.
    fn translate_by(&self, dx: f64, dy: f64) -> Result<Self, InvalidShapeError>;
    fn center(&self) -> Point;
}

/// Either shape variant.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Square(Square),
    Radial(RadialGraph),
}

impl AnyShape {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyShape::Square(_) => "square",
            AnyShape::Radial(_) => "radial",
        }
    }
}

impl Shape for AnyShape {
    fn rotate_by(&self, degrees: i32) -> Result<Self, InvalidShapeError> {
        Ok(match self {
            AnyShape::Square(s) => AnyShape::Square(s.rotate_by(degrees)?),
            AnyShape::Radial(g) => AnyShape::Radial(g.rotate_by(degrees)?),
        })
    }

    fn translate_by(&self, dx: f64, dy: f64) -> Result<Self, InvalidShapeError> {
        Ok(match self {
            AnyShape::Square(s) => AnyShape::Square(s.translate_by(dx, dy)?),
            AnyShape::Radial(g) => AnyShape::Radial(g.translate_by(dx, dy)?),
        })
    }

    fn center(&self) -> Point {
        match self {
            AnyShape::Square(s) => s.center(),
            AnyShape::Radial(g) => g.center(),
        }
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Square(s) => fmt::Display::fmt(s, f),
            AnyShape::Radial(g) => fmt::Display::fmt(g, f),
        }
    }
}

impl From<Square> for AnyShape {
    fn from(s: Square) -> Self {
        AnyShape::Square(s)
    }
}

impl From<RadialGraph> for AnyShape {
    fn from(g: RadialGraph) -> Self {
        AnyShape::Radial(g)
    }
}
