//! Two-point line solver.
//!
//! Given two points in R², derive the line through them: slope (with an
//! explicit vertical variant instead of an infinity sentinel), intercept,
//! monotonicity class, and the Euclidean distance between the points. The
//! presentation layers — equation strings and chart sampling — are stateless
//! functions over the derived descriptor; nothing outlives a single call.

pub mod line2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line2::format::{equation, equation_with_precision};
    pub use crate::line2::plot::{sample_line, PlotWindow, DEFAULT_PAD, DEFAULT_SAMPLES};
    pub use crate::line2::rand::{draw_point_pair, Bounds2, ReplayToken};
    pub use crate::line2::{
        classify, distance, intercept_at, slope_through, solve_line, LineClass, LineDescriptor,
        Slope,
    };
    pub use nalgebra::Vector2 as Vec2;
}
