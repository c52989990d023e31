//! Random point pairs (replay tokens) for batch runs and sampled checks.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so draw `index` under a fixed seed is reproducible in isolation.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned box the points are drawn from, uniform per coordinate.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds2 {
    /// Square box `[-extent, extent]²`.
    pub fn centered(extent: f64) -> Self {
        let e = extent.abs();
        Self {
            x_min: -e,
            x_max: e,
            y_min: -e,
            y_max: e,
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::centered(10.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one point pair, uniform in `bounds`. Coincident or shared-x pairs are
/// possible and valid inputs downstream.
pub fn draw_point_pair(bounds: Bounds2, tok: ReplayToken) -> (Vector2<f64>, Vector2<f64>) {
    let mut rng = tok.to_std_rng();
    let mut coord = |lo: f64, hi: f64| {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        lo + (hi - lo) * rng.gen::<f64>()
    };
    let p = Vector2::new(
        coord(bounds.x_min, bounds.x_max),
        coord(bounds.y_min, bounds.y_max),
    );
    let q = Vector2::new(
        coord(bounds.x_min, bounds.x_max),
        coord(bounds.y_min, bounds.y_max),
    );
    (p, q)
}
