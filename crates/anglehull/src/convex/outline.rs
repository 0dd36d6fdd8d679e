use crate::geometry::Point;
use crate::Error;

use super::sorted::{SortedPointSet, SweepOrder};
use super::sweep::SweepLine;

/// The four arcs of an outline or convex hull between its extreme points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// left to top extreme point
    Nw,
    /// top to right extreme point
    Ne,
    /// right to bottom extreme point
    Se,
    /// bottom to left extreme point
    Sw,
}

impl Region {
    /// Fixed traversal order used for storage and concatenation.
    pub const ALL: [Region; 4] = [Region::Nw, Region::Ne, Region::Se, Region::Sw];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Region::Nw => 0,
            Region::Ne => 1,
            Region::Se => 2,
            Region::Sw => 3,
        }
    }
}

/// Contour polygon ("Konturpolygon") of a point set with more than three
/// distinct points; an intermediate of the hull algorithm.
///
/// When the extreme points are unique, adjacent region chains share their
/// endpoints: `NW` ends where `NE` begins, and so on around the ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline {
    regions: [Vec<Point>; 4],
}

impl Outline {
    /// Run the left-to-right and right-to-left sweeps and assemble the four
    /// region chains from their monotone halves.
    pub fn of(input: &SortedPointSet) -> Result<Self, Error> {
        if input.len() <= 3 {
            return Err(Error::Precondition(
                "outlines need more than three distinct points",
            ));
        }
        let mut left = SweepLine::new();
        input.apply(&mut left, SweepOrder::LeftToRight);
        let mut right = SweepLine::new();
        input.apply(&mut right, SweepOrder::RightToLeft);

        let nw = left.upper().to_vec();
        let mut ne = right.upper().to_vec();
        ne.reverse();
        let se = right.lower().to_vec();
        let mut sw = left.lower().to_vec();
        sw.reverse();
        Ok(Self {
            regions: [nw, ne, se, sw],
        })
    }

    /// Chain for one region; never empty.
    #[inline]
    pub fn part(&self, region: Region) -> &[Point] {
        &self.regions[region.index()]
    }
}
