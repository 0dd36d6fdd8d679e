//! Convex hulls and α-angle hulls over integer point sets.
//!
//! The engine is synchronous, single-threaded, and pure: every operation is
//! a function from inputs to a new immutable value, so calls from different
//! threads need no coordination as long as each owns its inputs.
//!
//! Pipeline
//! - points → `convex::SortedPointSet` → two `convex::SweepLine`s →
//!   `convex::Outline` (four region chains) → four `convex::ConvexHullPart`s
//!   → `convex::ConvexHull`.
//! - `angle_hull::generate_angle_hull` walks the reversed hull ring with the
//!   rotating-caterpillar algorithm and emits one arc pair (uncut, cut) per
//!   step.
//!
//! Conventions
//! - Screen orientation throughout: y grows downward, hull vertices come
//!   out clockwise, and a negative determinant is a right turn.

pub mod angle_hull;
pub mod convex;
pub mod geometry;
pub mod rand;
pub mod ring;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Failure kinds surfaced by the engine.
///
/// Preconditions are caller contract violations. Invariants are assumptions
/// the algorithms themselves guarantee; observing one is a bug, and the
/// test suite asserts their absence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("precondition violated: {0}")]
    Precondition(&'static str),
    #[error("invariant violated: {0}")]
    Invariant(&'static str),
}

/// Build an updatable convex hull from a list of points.
///
/// Duplicates are dropped; fewer than four distinct points yield a small
/// hull that keeps the sorted chain verbatim.
#[inline]
pub fn build_hull(points: &[geometry::Point]) -> convex::ConvexHull {
    convex::ConvexHull::setup(points)
}

pub use angle_hull::generate_angle_hull;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle_hull::{generate_angle_hull, AngleHull, Arc, CuttingStrategy};
    pub use crate::convex::{ConvexHull, Region};
    pub use crate::geometry::{Angle, Point};
    pub use crate::{build_hull, Error};
}
