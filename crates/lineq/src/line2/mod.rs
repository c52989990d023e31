//! Two-point line geometry.
//!
//! Purpose
//! - Derive slope, intercept, monotonicity class, and point distance from two
//!   points, as one synchronous pure computation per call (no caching, no
//!   shared state).
//! - Keep presentation (equation strings, chart samples) in separate
//!   stateless modules consuming the computed descriptor.
//!
//! Code cross-refs: `solve::solve_line`, `types::{Slope, LineDescriptor}`,
//! `format::equation`, `plot::sample_line`.

pub mod format;
pub mod plot;
pub mod rand;
mod solve;
mod types;

pub use solve::{classify, distance, intercept_at, slope_through, solve_line};
pub use types::{LineClass, LineDescriptor, Slope};

#[cfg(test)]
mod tests;
