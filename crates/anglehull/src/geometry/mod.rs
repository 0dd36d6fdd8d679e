//! Elementary geometric value types and predicates.
//!
//! Purpose
//! - Provide the integer `Point`, the radian `Angle`, and the i64
//!   determinant whose sign every hull algorithm in this crate consults.
//! - Keep the float boundary explicit: angles and distances go through
//!   `nalgebra::Vector2<f64>`, coordinates stay i32.
//!
//! Conventions
//! - Screen orientation (y down): negative determinant = right turn.
//!
//! Code cross-refs: `convex::part` (straightening tests),
//! `angle_hull` (wvt and arc construction).

mod types;
mod util;

pub use types::{Angle, Point};
pub use util::{angle_between, determinant, vector_angle};

#[cfg(test)]
mod tests;
