//! Value types for the two-point line computation.
//!
//! - `Slope`: tagged finite/vertical variant (no infinity magic value).
//! - `LineClass`: monotonicity label derived from the slope's sign.
//! - `LineDescriptor`: the per-call derived bundle; never persisted.

use std::fmt;

/// Slope of the line through two points.
///
/// `Vertical` means the points share an x-coordinate and no finite slope
/// exists. It is a valid outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Slope::Vertical)
    }
    /// The finite slope value, if any.
    #[inline]
    pub fn finite(&self) -> Option<f64> {
        match *self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical => None,
        }
    }
}

/// Monotonicity class, a total function of the slope's sign/variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    Increasing,
    Decreasing,
    Horizontal,
    Vertical,
}

impl fmt::Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineClass::Increasing => "increasing",
            LineClass::Decreasing => "decreasing",
            LineClass::Horizontal => "horizontal",
            LineClass::Vertical => "vertical",
        };
        f.write_str(s)
    }
}

/// Derived description of the line through two points.
///
/// Invariants:
/// - `intercept` is `Some` iff `slope` is `Finite`.
/// - `class` equals `classify(slope)`.
/// - `distance >= 0`, zero iff the points coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineDescriptor {
    pub slope: Slope,
    pub intercept: Option<f64>,
    pub class: LineClass,
    pub distance: f64,
}

impl LineDescriptor {
    /// Coincident input points: the vertical variant with a zero-length
    /// segment. Callers should report this case, not a generic vertical line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.slope.is_vertical() && self.distance == 0.0
    }
}
