use std::collections::HashSet;

use crate::geometry::Point;

use super::outline::{Outline, Region};
use super::part::ConvexHullPart;
use super::sorted::SortedPointSet;

/// Updatable convex hull of a point set.
///
/// Sets with fewer than four distinct points keep their sorted chain
/// verbatim (`Small`); larger sets carry four straightened region parts
/// plus the outline they came from, so updates can reuse untouched regions
/// (`Big`). Every update returns a new value.
#[derive(Clone, Debug)]
pub enum ConvexHull {
    Small(Vec<Point>),
    Big(BigHull),
}

impl ConvexHull {
    /// Sort, deduplicate, and build. Empty input yields an empty small
    /// hull.
    pub fn setup(points: &[Point]) -> Self {
        ConvexHull::Small(Vec::new()).update(points)
    }

    /// New hull for a changed point list; `Big` states recompute only the
    /// regions whose outline chain actually changed.
    pub fn update(&self, points: &[Point]) -> ConvexHull {
        let sorted = SortedPointSet::of(points);
        match (self, Outline::of(&sorted)) {
            (_, Err(_)) => ConvexHull::Small(sorted.as_vec()),
            (ConvexHull::Big(big), Ok(outline)) => ConvexHull::Big(big.updated(outline)),
            (ConvexHull::Small(_), Ok(outline)) => ConvexHull::Big(BigHull::initial(outline)),
        }
    }

    /// Hull vertices in clockwise screen order, duplicates removed with
    /// first occurrence winning.
    pub fn points(&self) -> Vec<Point> {
        match self {
            ConvexHull::Small(points) => points.clone(),
            ConvexHull::Big(big) => big.points(),
        }
    }
}

/// Hull state for four or more distinct points.
#[derive(Clone, Debug)]
pub struct BigHull {
    outline: Outline,
    parts: [ConvexHullPart; 4],
}

impl BigHull {
    fn initial(outline: Outline) -> Self {
        let parts = Region::ALL.map(|r| ConvexHullPart::calculate(outline.part(r)));
        Self { outline, parts }
    }

    /// Rebuild against a new outline, reusing every region whose chain is
    /// structurally unchanged.
    fn updated(&self, outline: Outline) -> Self {
        let parts = Region::ALL.map(|r| {
            if outline.part(r) == self.outline.part(r) {
                self.parts[r.index()].clone()
            } else {
                ConvexHullPart::calculate(outline.part(r))
            }
        });
        Self { outline, parts }
    }

    fn points(&self) -> Vec<Point> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        for part in &self.parts {
            for &p in part.points() {
                if seen.insert(p) {
                    points.push(p);
                }
            }
        }
        points
    }
}
