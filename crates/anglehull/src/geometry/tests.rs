use super::*;

#[test]
fn determinant_sign_convention() {
    // Mathematical left turn is positive; the engine reads negative as a
    // right turn in screen coordinates.
    assert!(determinant(Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)) > 0);
    // Clockwise on screen (y down) turns right.
    assert!(determinant(Point::new(0, 0), Point::new(0, 10), Point::new(10, 10)) < 0);
    assert_eq!(
        determinant(Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)),
        0
    );
}

#[test]
fn determinant_survives_large_coordinates() {
    let a = Point::new(-1_000_000_000, -1_000_000_000);
    let b = Point::new(1_000_000_000, -999_999_999);
    let c = Point::new(1_000_000_000, 1_000_000_000);
    // Sub-products reach ~4e18 and must stay inside i64.
    assert!(determinant(a, b, c) != 0);
    assert_eq!(determinant(a, b, c), -determinant(c, b, a));
}

#[test]
fn angle_between_quadrants() {
    let o = Point::ORIGIN;
    let right = angle_between(Point::new(1, 0), o, Point::new(0, 1));
    assert!((right.rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    let straight = angle_between(Point::new(-1, 0), o, Point::new(1, 0));
    assert!((straight.rad() - std::f64::consts::PI).abs() < 1e-12);
    let zero = angle_between(Point::new(5, 0), o, Point::new(2, 0));
    assert!(zero.rad().abs() < 1e-12);
}

#[test]
fn angle_between_degenerate_is_nan() {
    let p = Point::new(3, 4);
    assert!(angle_between(p, p, Point::new(7, 7)).rad().is_nan());
}

#[test]
fn vector_angle_matches_anchored_form() {
    // b→a = (-1, 0), c→d = (0, 1): a quarter turn apart.
    let got = vector_angle(
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(0, 0),
        Point::new(0, 1),
    );
    assert!((got.rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn point_order_is_lexicographic() {
    let mut pts = vec![
        Point::new(2, 1),
        Point::new(0, 5),
        Point::new(2, -3),
        Point::new(0, 0),
    ];
    pts.sort();
    assert_eq!(
        pts,
        vec![
            Point::new(0, 0),
            Point::new(0, 5),
            Point::new(2, -3),
            Point::new(2, 1),
        ]
    );
}

#[test]
fn point_arithmetic_truncates_toward_zero() {
    assert_eq!(Point::new(-3, 3).half(), Point::new(-1, 1));
    assert_eq!(Point::new(5, -5).half(), Point::new(2, -2));
    assert_eq!(Point::new(10, -10).multiply(0.39), Point::new(3, -3));
    assert_eq!(
        Point::new(0, 0).midpoint(Point::new(5, -5)),
        Point::new(2, -2)
    );
}

#[test]
fn point_add_subtract_roundtrip() {
    let a = Point::new(12, -7);
    let b = Point::new(-30, 44);
    assert_eq!(a.add(b).subtract(b), a);
    assert_eq!(a.subtract(a), Point::ORIGIN);
}

#[test]
fn point_distance() {
    assert!((Point::new(0, 0).distance_to(Point::new(3, 4)) - 5.0).abs() < 1e-12);
}

#[test]
fn in_bounds_is_strict() {
    let p = Point::new(5, 5);
    assert!(p.in_bounds(0, 0, 10, 10));
    assert!(!Point::new(0, 5).in_bounds(0, 0, 10, 10));
    assert!(!Point::new(10, 5).in_bounds(0, 0, 10, 10));
    assert!(!Point::new(5, 0).in_bounds(0, 0, 10, 10));
    assert!(!Point::new(5, 10).in_bounds(0, 0, 10, 10));
}

#[test]
fn angle_conversions_and_ops() {
    let a = Angle::from_deg(180.0);
    assert!((a.rad() - std::f64::consts::PI).abs() < 1e-12);
    assert!((a.deg() - 180.0).abs() < 1e-12);
    let b = Angle::from_deg(45.0);
    assert!((b.times_two().deg() - 90.0).abs() < 1e-12);
    assert!(((a - b).deg() - 135.0).abs() < 1e-12);
    assert!(((b + b).deg() - 90.0).abs() < 1e-12);
    assert!(Angle::ZERO < b);
    assert!(b < a);
}
