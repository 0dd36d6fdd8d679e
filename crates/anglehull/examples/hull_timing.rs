//! Timing probe for the hull pipeline on a demo point cloud.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does a
//!   hull rebuild and an angle-hull walk take on a few hundred points?"
//!
//! Why this shape
//! - The scatter generator is deterministic via its replay token, so the
//!   numbers are comparable between runs and machines.

use std::time::Instant;

use anglehull::prelude::*;
use anglehull::rand::{scatter, ReplayToken, ScatterCfg};

fn main() {
    let points = scatter(
        ScatterCfg {
            count: 512,
            width: 1600,
            height: 1000,
        },
        ReplayToken { seed: 7, index: 0 },
    );

    let hull_start = Instant::now();
    let hull = build_hull(&points);
    let hull_elapsed = hull_start.elapsed().as_secs_f64() * 1e3;
    let vertices = hull.points();

    let walk_start = Instant::now();
    let angle_hull =
        generate_angle_hull(&hull, Angle::from_deg(90.0)).expect("scatter hull is big enough");
    let walk_elapsed = walk_start.elapsed().as_secs_f64() * 1e3;

    println!(
        "points={} hull_vertices={} arcs={} hull_ms={:.3} angle_hull_ms={:.3}",
        points.len(),
        vertices.len(),
        angle_hull.len(),
        hull_elapsed,
        walk_elapsed
    );
}
