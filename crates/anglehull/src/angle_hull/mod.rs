//! α-angle hulls via the rotating-caterpillar walk.
//!
//! Purpose
//! - For an aperture α strictly inside (0°, 180°), produce the closed path
//!   of circular arcs from which a point set subtends exactly α: the locus
//!   of camera positions whose field of view is filled by the set.
//!
//! Model
//! - The walk runs on the reversed hull polygon wrapped in a `ring::Ring`,
//!   so entry navigation is counter-clockwise in screen space. Two contact
//!   entries advance around the ring; every step emits one arc over the
//!   current contact chord, both uncut (overlapping its neighbors) and cut
//!   (trimmed by ρ_s/ρ_e to approximately abut them).
//!
//! Code cross-refs: `convex::ConvexHull` (input), `geometry` (wvt
//! primitives), `ring::Entry` (contact points).

mod arc;

pub use arc::Arc;

use crate::convex::ConvexHull;
use crate::geometry::{angle_between, determinant, vector_angle, Angle, Point};
use crate::ring::{Entry, Ring};
use crate::Error;

/// Chooses which variant of each arc a collection pass yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CuttingStrategy {
    /// Trimmed arcs that approximately abut; double precision may leave
    /// sub-pixel gaps or residual overlap.
    Cut,
    /// Raw arcs that overlap their neighbors.
    Uncut,
}

/// The same arc in both variants.
#[derive(Clone, Copy, Debug)]
struct ArcPair {
    uncut: Arc,
    cut: Arc,
}

/// Closed sequence of arcs forming an α-angle hull.
#[derive(Clone, Debug)]
pub struct AngleHull {
    arcs: Vec<ArcPair>,
}

impl AngleHull {
    /// Number of emitted arc pairs; at least the number of hull points.
    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Lazy pass over the arcs of the chosen variant, in walk order.
    /// Restartable: every call yields a fresh iterator.
    pub fn arcs(&self, strategy: CuttingStrategy) -> impl Iterator<Item = &Arc> {
        self.arcs.iter().map(move |pair| match strategy {
            CuttingStrategy::Cut => &pair.cut,
            CuttingStrategy::Uncut => &pair.uncut,
        })
    }

    /// Map every arc of the chosen variant through `collector`, lazily.
    pub fn map_with<'a, T, F>(
        &'a self,
        collector: F,
        strategy: CuttingStrategy,
    ) -> impl Iterator<Item = T> + 'a
    where
        F: FnMut(&Arc) -> T + 'a,
    {
        self.arcs(strategy).map(collector)
    }
}

/// Generate the α-angle hull of a convex hull.
///
/// `alpha` must lie strictly between 0° and 180°, and the hull must
/// contribute at least four distinct points; anything less leaves the walk
/// without a well-defined contact pair.
pub fn generate_angle_hull(hull: &ConvexHull, alpha: Angle) -> Result<AngleHull, Error> {
    if !(alpha.deg() > 0.0 && alpha.deg() < 180.0) {
        return Err(Error::Precondition(
            "alpha must lie strictly between 0 and 180 degrees",
        ));
    }
    let mut points = hull.points();
    points.reverse();
    if points.len() < 4 {
        return Err(Error::Precondition(
            "angle hulls need at least four distinct hull points",
        ));
    }
    let ring = Ring::new(points)?;

    // Search the first contact pair (ls, rs). While the angle comparison
    // test still passes, ls and rs do not yet carry an arc of the hull and
    // the right contact keeps advancing. ρ_ss seeds the cut of the first
    // emitted arc.
    let ls = ring.first();
    let mut rs = ring.first();
    let mut probes = 0usize;
    while wvt(ls.prev(), ls, rs, rs.next(), alpha) {
        rs = rs.next();
        probes += 1;
        if probes > ring.len() {
            return Err(Error::Invariant("initial contact search did not settle"));
        }
    }
    let rho_ss = if ls.content_eq(&rs) {
        rs = rs.next();
        Angle::ZERO
    } else {
        angle_at(rs, ls, ls.prev()).subtract(alpha).times_two()
    };
    walk(&ring, ls, rs, rho_ss, alpha)
}

/// Advance the left and right contact entries around the ring, emitting one
/// arc pair per step, until both have returned to their starting content.
fn walk(
    ring: &Ring<Point>,
    ls: Entry<'_, Point>,
    rs: Entry<'_, Point>,
    mut rho_ss: Angle,
    alpha: Angle,
) -> Result<AngleHull, Error> {
    let mut ll = ls;
    let mut rr = rs;
    let mut arcs = Vec::new();
    // Convexity guarantees both contacts revisit their start; the cap turns
    // a broken walk into an observable invariant failure instead of a hang.
    let cap = 4 * ring.len() * ring.len();
    loop {
        let l = ll;
        let r = rr;
        let rho_s = rho_ss;
        let rho_e;
        if wvt(l, l.next(), r, r.next(), alpha) {
            if wvt(l, r, r, r.next(), alpha) {
                rho_e = angle_at(r.next(), r, l).subtract(alpha).times_two();
                rho_ss = angle_at(l, r.next(), r).times_two();
            } else {
                rho_e = Angle::ZERO;
                rho_ss = Angle::ZERO;
            }
            rr = r.next();
        } else {
            if l.next().content_eq(&r) {
                rho_e = Angle::ZERO;
                rho_ss = Angle::ZERO;
                rr = r.next();
            } else {
                rho_e = angle_at(l.next(), l, r).times_two();
                rho_ss = angle_at(r, l.next(), l).subtract(alpha).times_two();
            }
            ll = l.next();
        }
        let uncut = Arc::of(*l.get(), *r.get(), alpha);
        arcs.push(ArcPair {
            uncut,
            cut: uncut.cut(rho_s, rho_e),
        });
        if ll.content_eq(&ls) && rr.content_eq(&rs) {
            return Ok(AngleHull { arcs });
        }
        if arcs.len() >= cap {
            return Err(Error::Invariant("caterpillar walk failed to close"));
        }
    }
}

/// Angle comparison test ("Winkelvergleichstest"): do the vectors a→b and
/// c→d cross, enclosing an angle of at least α? Decides which contact
/// advances.
fn wvt(
    a: Entry<'_, Point>,
    b: Entry<'_, Point>,
    c: Entry<'_, Point>,
    d: Entry<'_, Point>,
    alpha: Angle,
) -> bool {
    let (a, b, c, d) = (*a.get(), *b.get(), *c.get(), *d.get());
    let det = determinant(b.subtract(a), d.subtract(c), Point::ORIGIN);
    det > 0 && vector_angle(a, b, c, d).rad() >= alpha.rad()
}

/// `angle_between` lifted to ring entries.
#[inline]
fn angle_at(a: Entry<'_, Point>, b: Entry<'_, Point>, c: Entry<'_, Point>) -> Angle {
    angle_between(*a.get(), *b.get(), *c.get())
}
