use crate::geometry::{angle_between, Angle, Point};

/// Circular arc with center `z`, radius `r`, start angle `rho`, and extent
/// angle `beta`.
///
/// Start angles are absolute radians, zero at the positive x axis, growing
/// toward positive y. `rho + rho_s` is handed onward unreduced; mod-2π
/// normalization is the host arc primitive's business.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    z: Point,
    r: f64,
    rho: Angle,
    beta: Angle,
}

impl Arc {
    /// Arc through the touching points `a` and `b` that subtends the
    /// aperture `alpha` everywhere on it (inscribed-angle construction).
    ///
    /// The center is truncated onto the integer grid, so the touching
    /// points sit on the arc only up to roughly a pixel.
    pub fn of(a: Point, b: Point, alpha: Angle) -> Self {
        let m = a.midpoint(b);
        let d = a.distance_to(b);
        let k = -(d / (2.0 * alpha.rad().tan()));
        let w = Point::new(a.y.wrapping_sub(b.y), b.x.wrapping_sub(a.x)).multiply(k / d);
        let z = m.add(w);
        let r = d / (2.0 * alpha.rad().sin());
        let mut rho = angle_between(Point::new(1, 0), Point::ORIGIN, a.subtract(z));
        if a.y < z.y {
            rho = Angle::from_rad(2.0 * std::f64::consts::PI - rho.rad());
        }
        let beta = Angle::from_rad(2.0 * (std::f64::consts::PI - alpha.rad()));
        Self { z, r, rho, beta }
    }

    /// Trim `rho_s` off the start and `rho_e` off the end.
    #[inline]
    pub fn cut(&self, rho_s: Angle, rho_e: Angle) -> Arc {
        Arc {
            z: self.z,
            r: self.r,
            rho: self.rho.add(rho_s),
            beta: self.beta.subtract(rho_s).subtract(rho_e),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.z
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Start angle ρ.
    #[inline]
    pub fn start(&self) -> Angle {
        self.rho
    }

    /// Extent angle β.
    #[inline]
    pub fn extent(&self) -> Angle {
        self.beta
    }
}
