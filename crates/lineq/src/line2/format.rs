//! Equation strings for a solved line (presentation only).
//!
//! The sign-aware branching is part of the output contract:
//! `y = {m}x + {b}` for `b >= 0`, `y = {m}x - {|b|}` for `b < 0`, and
//! `x = {x1}` for vertical lines.

use nalgebra::Vector2;

use super::solve::intercept_at;
use super::types::Slope;

/// Default number of decimals in rendered equations.
pub const DEFAULT_PRECISION: usize = 4;

/// Equation of the line with the given slope through `anchor`, rendered at
/// [`DEFAULT_PRECISION`] decimals.
pub fn equation(slope: Slope, anchor: Vector2<f64>) -> String {
    equation_with_precision(slope, anchor, DEFAULT_PRECISION)
}

/// Equation rendered at `precision` decimals (plot legends use 2).
///
/// The intercept is recomputed from `anchor`, so the string is always
/// consistent with the slope it is rendered for.
pub fn equation_with_precision(slope: Slope, anchor: Vector2<f64>, precision: usize) -> String {
    match slope {
        Slope::Vertical => format!("x = {}", anchor.x),
        Slope::Finite(m) => {
            // intercept_at returns Some for every finite slope
            let b = intercept_at(anchor, slope).unwrap_or(anchor.y - m * anchor.x);
            if b >= 0.0 {
                format!("y = {m:.precision$}x + {b:.precision$}")
            } else {
                let b = b.abs();
                format!("y = {m:.precision$}x - {b:.precision$}")
            }
        }
    }
}
