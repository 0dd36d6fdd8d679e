use crate::geometry::{determinant, Point};

/// One of the four arcs of a big convex hull: a chain that turns only
/// right.
///
/// Holds the straightening invariant: for every three consecutive points
/// the determinant is strictly negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexHullPart {
    points: Vec<Point>,
}

impl ConvexHullPart {
    /// Straighten an outline chain by repeated advance / walk-back /
    /// splice.
    ///
    /// Collinear interior triples count as left turns and are removed, so a
    /// fully collinear chain collapses to its two endpoints. Every splice
    /// shortens the chain by at least one point, which bounds the loop.
    pub fn calculate(chain: &[Point]) -> Self {
        let mut current = chain.to_vec();
        while let Some(j) = advance(&current) {
            let i = walk_back(&current, j);
            current.drain(i + 1..=j);
        }
        Self { points: current }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Index of the first interior point whose triple turns left or runs
/// collinear, or `None` when the chain is already straight.
fn advance(points: &[Point]) -> Option<usize> {
    (0..points.len().saturating_sub(2))
        .find(|&i| determinant(points[i], points[i + 1], points[i + 2]) >= 0)
        .map(|i| i + 1)
}

/// Largest i ≤ j whose predecessor pair still turns strictly right against
/// the point after `j`; 0 when none does. The triple at i = j fails by
/// construction of `advance`, so the splice always removes something.
fn walk_back(points: &[Point], j: usize) -> usize {
    let successor = points[j + 1];
    (1..=j)
        .rev()
        .find(|&i| determinant(points[i - 1], points[i], successor) < 0)
        .unwrap_or(0)
}
