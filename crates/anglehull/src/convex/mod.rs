//! Incremental convex hull pipeline.
//!
//! Purpose
//! - Take integer points through sort/dedup, a double sweep, outline
//!   assembly, and per-region straightening into an updatable convex hull.
//!
//! Data flow
//! - points → `SortedPointSet` → two `SweepLine`s → `Outline` (four region
//!   chains) → four `ConvexHullPart`s → `ConvexHull`.
//!
//! Why four regions
//! - The outline splits at the extreme points, so an update only recomputes
//!   the straightening of regions whose chain changed; the other three are
//!   shared structurally with the previous hull.
//!
//! Code cross-refs: `geometry::determinant` (right-turn tests),
//! `angle_hull` (consumes `ConvexHull::points`).

mod hull;
mod outline;
mod part;
mod sorted;
mod sweep;

pub use hull::{BigHull, ConvexHull};
pub use outline::{Outline, Region};
pub use part::ConvexHullPart;
pub use sorted::{SortedPointSet, SweepOrder};
pub use sweep::SweepLine;
