//! Chart samples for a solved line.
//!
//! The chart renderer is an external collaborator that consumes an (x, y)
//! sample sequence; this module produces it. Non-vertical lines are sampled
//! along x across a padded window, vertical lines along y at the shared
//! x-coordinate.

use nalgebra::Vector2;

use super::solve::{intercept_at, slope_through};
use super::types::Slope;

/// Window padding around the two input points, in axis units.
pub const DEFAULT_PAD: f64 = 2.0;

/// Number of samples across the window.
pub const DEFAULT_SAMPLES: usize = 100;

/// Axis-aligned plotting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotWindow {
    /// Window spanning both points with `pad` slack on every side.
    pub fn around(p: Vector2<f64>, q: Vector2<f64>, pad: f64) -> Self {
        Self {
            x_min: p.x.min(q.x) - pad,
            x_max: p.x.max(q.x) + pad,
            y_min: p.y.min(q.y) - pad,
            y_max: p.y.max(q.y) + pad,
        }
    }
}

/// `n` evenly spaced samples of the line through `p` and `q` across `window`.
///
/// Vertical lines (coincident points included) are sampled along y at
/// `x = p.x`. `n` is clamped to at least 2 so both window edges are hit.
pub fn sample_line(
    p: Vector2<f64>,
    q: Vector2<f64>,
    window: &PlotWindow,
    n: usize,
) -> Vec<Vector2<f64>> {
    let n = n.max(2);
    let steps = (n - 1) as f64;
    match slope_through(p, q) {
        Slope::Vertical => (0..n)
            .map(|i| {
                let y = window.y_min + (window.y_max - window.y_min) * (i as f64) / steps;
                Vector2::new(p.x, y)
            })
            .collect(),
        slope @ Slope::Finite(m) => {
            // b exists for every finite slope
            let b = intercept_at(p, slope).unwrap_or(p.y - m * p.x);
            (0..n)
                .map(|i| {
                    let x = window.x_min + (window.x_max - window.x_min) * (i as f64) / steps;
                    Vector2::new(x, m * x + b)
                })
                .collect()
        }
    }
}
