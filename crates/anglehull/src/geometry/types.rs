//! Integer point and radian angle value types.
//!
//! - `Point`: immutable 2D point with i32 coordinates, lexicographic order.
//! - `Angle`: radian magnitude in double precision, no modular reduction.
//!
//! Coordinates follow the screen convention (y grows downward); the sign
//! tests in `convex::part` and `angle_hull` rely on it.

use nalgebra::Vector2;

/// Immutable 2D point with signed 32-bit coordinates.
///
/// The derived `Ord` is lexicographic with x primary and y secondary, which
/// is exactly the traversal order consumed by the sweep passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build from float scalars, truncating toward zero (saturating at the
    /// i32 range).
    #[inline]
    pub fn of(x: f64, y: f64) -> Self {
        Self::new(x as i32, y as i32)
    }

    /// Componentwise sum. Wraps on overflow; the interactive coordinate
    /// domain never approaches the i32 range.
    #[inline]
    pub fn add(self, augend: Point) -> Point {
        Point::new(
            self.x.wrapping_add(augend.x),
            self.y.wrapping_add(augend.y),
        )
    }

    /// Componentwise difference. Wraps on overflow.
    #[inline]
    pub fn subtract(self, subtrahend: Point) -> Point {
        Point::new(
            self.x.wrapping_sub(subtrahend.x),
            self.y.wrapping_sub(subtrahend.y),
        )
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    /// Both components halved, truncated toward zero.
    #[inline]
    pub fn half(self) -> Point {
        Point::of(f64::from(self.x) / 2.0, f64::from(self.y) / 2.0)
    }

    /// Components scaled by `factor`, truncated toward zero.
    #[inline]
    pub fn multiply(self, factor: f64) -> Point {
        Point::of(f64::from(self.x) * factor, f64::from(self.y) * factor)
    }

    /// Midpoint of the segment to `other`, truncated toward zero.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        self.add(other).half()
    }

    /// Strict containment in the rectangle spanned by `(x_min, y_min)` with
    /// the given width and height; boundary points count as outside.
    #[inline]
    pub fn in_bounds(self, x_min: i32, y_min: i32, width: i32, height: i32) -> bool {
        self.x > x_min && self.x < x_min + width && self.y > y_min && self.y < y_min + height
    }

    /// Bridge into float math.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Truncating bridge back from float math.
    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Point {
        Point::of(v.x, v.y)
    }
}

/// An angle carried as a double-precision radian magnitude.
///
/// No modular normalization is applied anywhere; callers that need a
/// canonical range reduce the value themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    #[inline]
    pub const fn from_rad(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_deg(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    #[inline]
    pub fn rad(self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn deg(self) -> f64 {
        self.radians.to_degrees()
    }

    #[inline]
    pub fn times_two(self) -> Angle {
        Angle::from_rad(self.radians * 2.0)
    }

    #[inline]
    pub fn add(self, augend: Angle) -> Angle {
        Angle::from_rad(self.radians + augend.radians)
    }

    #[inline]
    pub fn subtract(self, subtrahend: Angle) -> Angle {
        Angle::from_rad(self.radians - subtrahend.radians)
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Self::Output {
        Angle::add(self, rhs)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Self::Output {
        Angle::subtract(self, rhs)
    }
}
