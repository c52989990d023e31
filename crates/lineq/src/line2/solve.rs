//! Core operations: slope, intercept, classification, distance.
//!
//! All functions are total over finite inputs; the vertical case is encoded
//! in `Slope::Vertical`, so there is no error path. Non-finite inputs are a
//! boundary concern for callers, not handled here.
//!
//! Code cross-refs: `types::{Slope, LineClass, LineDescriptor}`

use nalgebra::Vector2;

use super::types::{LineClass, LineDescriptor, Slope};

/// Slope of the line through `p` and `q`.
///
/// Exact equality on the x-coordinates decides the vertical case; coincident
/// points also land here (zero-length segment with undefined direction).
#[inline]
pub fn slope_through(p: Vector2<f64>, q: Vector2<f64>) -> Slope {
    if q.x == p.x {
        Slope::Vertical
    } else {
        Slope::Finite((q.y - p.y) / (q.x - p.x))
    }
}

/// y-intercept of the line with the given slope through `p`, or `None` for a
/// vertical line. For a finite slope `m`, `b = p.y - m * p.x` reproduces both
/// original points via `y = m*x + b` up to rounding.
#[inline]
pub fn intercept_at(p: Vector2<f64>, slope: Slope) -> Option<f64> {
    match slope {
        Slope::Vertical => None,
        Slope::Finite(m) => Some(p.y - m * p.x),
    }
}

/// Monotonicity class from the slope's sign/variant.
#[inline]
pub fn classify(slope: Slope) -> LineClass {
    match slope {
        Slope::Vertical => LineClass::Vertical,
        Slope::Finite(m) => {
            if m > 0.0 {
                LineClass::Increasing
            } else if m < 0.0 {
                LineClass::Decreasing
            } else {
                LineClass::Horizontal
            }
        }
    }
}

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (q - p).norm()
}

/// Full descriptor of the line through `p` and `q`: slope, intercept,
/// classification, distance. One synchronous computation per call.
pub fn solve_line(p: Vector2<f64>, q: Vector2<f64>) -> LineDescriptor {
    let slope = slope_through(p, q);
    LineDescriptor {
        slope,
        intercept: intercept_at(p, slope),
        class: classify(slope),
        distance: distance(p, q),
    }
}
