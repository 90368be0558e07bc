//! Planar shapes from named points, rigid transforms, and symmetry detection.
//!
//! Layout
//! - `point`: named coordinates.
//! - `shape`: the `Shape` capability, `Square`, `RadialGraph`, canonical ordering.
//! - `symmetry`: `Symmetries` detectors per variant.
//! - `cfg`: the float comparison primitive and validation switches.
//!
//! Coordinates are quantized to two decimals after every transform, and all
//! equality checks default to exact comparison of those quantized values.

pub mod cfg;
pub mod error;
pub mod point;
pub mod shape;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{GeomCfg, SquareCheck, Tolerance};
pub use error::InvalidShapeError;
pub use point::Point;
pub use shape::{AnyShape, RadialGraph, Shape, Square};
pub use symmetry::{RadialGraphSymmetries, SquareSymmetries, Symmetries};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GeomCfg, SquareCheck, Tolerance};
    pub use crate::error::InvalidShapeError;
    pub use crate::point::Point;
    pub use crate::shape::{canonical_order, AnyShape, RadialGraph, Shape, Square};
    pub use crate::symmetry::{RadialGraphSymmetries, SquareSymmetries, Symmetries};
}
