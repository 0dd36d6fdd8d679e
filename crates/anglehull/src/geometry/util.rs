use super::types::{Angle, Point};

/// Signed shoelace-style determinant of three points, computed in i64.
///
/// Only the sign is ever consulted. With screen coordinates (y down), a
/// negative value means the path a → b → c turns right; zero means
/// collinear.
#[inline]
pub fn determinant(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    (cx - ax) * (cy + ay) + (bx - cx) * (by + cy) + (ax - bx) * (ay + by)
}

/// Unsigned angle at `b` between the rays toward `a` and `c`, in [0, π].
///
/// NaN when either ray degenerates to a point; callers keep their inputs
/// distinct.
pub fn angle_between(a: Point, b: Point, c: Point) -> Angle {
    let ba = a.to_vector() - b.to_vector();
    let bc = c.to_vector() - b.to_vector();
    Angle::from_rad((ba.dot(&bc) / (ba.norm() * bc.norm())).acos())
}

/// Unsigned angle between the vectors b→a and c→d, both re-anchored at the
/// origin.
#[inline]
pub fn vector_angle(a: Point, b: Point, c: Point, d: Point) -> Angle {
    angle_between(a.subtract(b), Point::ORIGIN, d.subtract(c))
}
