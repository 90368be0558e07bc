//! Comparison and validation settings shared by shapes and detectors.
//!
//! Policy
//! - Every float equality in validation and symmetry detection goes through
//!   `Tolerance::eq`. The default is exact equality of the computed doubles,
//!   which is numerically fragile; `Tolerance::Abs` swaps in a slack without
//!   touching the algorithms.
//! - Coordinates are quantized to two decimals after every transform step.

/// Quantization scale for transform results (two decimal places).
pub(crate) const ROUND_SCALE: f64 = 100.0;
/// Weight of the polar angle (degrees) in the canonical sort key.
pub(crate) const ANGLE_KEY_WEIGHT: f64 = 1000.0;

/// Float comparison primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Tolerance {
    /// `a == b` on the computed doubles.
    #[default]
    Exact,
    /// `|a - b| <= eps`. Unitless: radial detection applies the same `eps`
    /// to coordinates and to angular deltas in degrees.
    Abs(f64),
}

impl Tolerance {
    #[inline]
    pub fn eq(self, a: f64, b: f64) -> bool {
        match self {
            Tolerance::Exact => a == b,
            Tolerance::Abs(eps) => (a - b).abs() <= eps,
        }
    }
}

/// How `Square` validation gathers its six distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SquareCheck {
    /// All `C(4,2)` distinct point pairs.
    #[default]
    AllPairs,
    /// Legacy behavior: the distance between points 0 and 1, six times.
    /// Accepts any quadrilateral whose first two points differ.
    LegacyFixedPair,
}

/// Geometry configuration carried by every shape and detector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeomCfg {
    pub tol: Tolerance,
    pub square_check: SquareCheck,
}

impl GeomCfg {
    #[inline]
    pub fn with_tolerance(eps: f64) -> Self {
        Self {
            tol: Tolerance::Abs(eps),
            ..Self::default()
        }
    }
}

/// Round half up at the 0.01 scale.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    (v * ROUND_SCALE + 0.5).floor() / ROUND_SCALE
}
