//! Deterministic demo point generators (replay tokens).
//!
//! Model
//! - `(seed, index)` is mixed SplitMix64-style into a single `StdRng`, so a
//!   draw is reproducible and indexable without storing point lists.
//! - Generators may emit duplicate points; the hull pipeline drops them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Rectangle scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub width: i32,
    pub height: i32,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 32,
            width: 1000,
            height: 1000,
        }
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

/// Uniform integer points in the `cfg` rectangle, anchored at the origin.
pub fn scatter(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(1);
    let h = cfg.height.max(1);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(0..w), rng.gen_range(0..h)))
        .collect()
}

/// `count` points rounded onto the circle around `center`, with a random
/// global phase so repeated draws do not stack.
pub fn circle(count: usize, center: Point, radius: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let n = count.max(1) as f64;
    (0..count)
        .map(|k| {
            let theta = phase + std::f64::consts::TAU * (k as f64) / n;
            Point::of(
                (f64::from(center.x) + radius * theta.cos()).round(),
                (f64::from(center.y) + radius * theta.sin()).round(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = ScatterCfg {
            count: 64,
            width: 800,
            height: 600,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(scatter(cfg, tok), scatter(cfg, tok));
        let other = ReplayToken { seed: 42, index: 8 };
        assert_ne!(scatter(cfg, tok), scatter(cfg, other));
    }

    #[test]
    fn scatter_respects_bounds() {
        let cfg = ScatterCfg {
            count: 256,
            width: 50,
            height: 20,
        };
        let tok = ReplayToken { seed: 1, index: 0 };
        for p in scatter(cfg, tok) {
            assert!((0..50).contains(&p.x));
            assert!((0..20).contains(&p.y));
        }
    }

    #[test]
    fn circle_stays_near_radius() {
        let center = Point::new(500, 500);
        let tok = ReplayToken { seed: 3, index: 1 };
        for p in circle(24, center, 400.0, tok) {
            let d = p.distance_to(center);
            assert!((d - 400.0).abs() < 1.0, "distance {d} drifted off radius");
        }
    }
}
