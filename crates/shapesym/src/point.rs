//! Named 2D points.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::Tolerance;

/// Immutable named coordinate in R².
///
/// Invariants:
/// - `name` is metadata only; geometric comparisons look at `pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    name: String,
    pos: Vector2<f64>,
}

impl Point {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            pos: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn from_vec(name: impl Into<String>, pos: Vector2<f64>) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn vec(&self) -> Vector2<f64> {
        self.pos
    }

    /// Same coordinates under a new name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::from_vec(name, self.pos)
    }

    /// Euclidean distance, `sqrt(dx² + dy²)`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.pos - other.pos).norm()
    }

    /// Coordinate equality under `tol`; names are ignored.
    #[inline]
    pub fn same_position(&self, other: &Point, tol: Tolerance) -> bool {
        tol.eq(self.pos.x, other.pos.x) && tol.eq(self.pos.y, other.pos.y)
    }

    #[inline]
    pub fn is_origin(&self, tol: Tolerance) -> bool {
        tol.eq(self.pos.x, 0.0) && tol.eq(self.pos.y, 0.0)
    }
}

/// `(name, x, y)` with coordinates always shown as doubles (`1.0`, `-0.5`).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}, {:?})", self.name, self.pos.x, self.pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_doubles() {
        assert_eq!(Point::new("east", 1.0, 0.0).to_string(), "(east, 1.0, 0.0)");
        assert_eq!(Point::new("p", -0.5, 0.71).to_string(), "(p, -0.5, 0.71)");
    }

    #[test]
    fn geometry_ignores_names() {
        let a = Point::new("a", 3.0, 4.0);
        let b = a.with_name("b");
        assert_ne!(a, b);
        assert!(a.same_position(&b, Tolerance::Exact));
        assert!((a.distance(&Point::new("o", 0.0, 0.0)) - 5.0).abs() < 1e-12);
        assert!(Point::new("o", 0.0, 0.0).is_origin(Tolerance::Exact));
        assert!(!a.is_origin(Tolerance::Exact));
    }
}
