use crate::constants::{GRS80_F, WGS84_A, WGS84_F};

/// Shape of the reference ellipsoid, with its eccentricities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub(crate) a: f64,
    pub(crate) f: f64,
    pub(crate) e2: f64,
    pub(crate) ep2: f64,
}

/// WGS84 ellipsoid
pub const WGS84: Ellipsoid = Ellipsoid::new(WGS84_A, WGS84_F);
/// GRS80 ellipsoid
pub const GRS80: Ellipsoid = Ellipsoid::new(WGS84_A, GRS80_F);

impl Ellipsoid {
    /// Builds an ellipsoid from its semi-major axis (meters) and flattening.
    /// No range checks are made here; [`TranMerc`](crate::TranMerc) validates
    /// the shape when it is committed.
    ///
    /// ```
    /// use tranmerc::ellipsoid::{Ellipsoid, WGS84};
    ///
    /// let shape = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
    /// assert_eq!(shape, WGS84);
    /// assert!((shape.e2() - 0.006_694_379_990_14).abs() < 1e-14);
    /// ```
    pub const fn new(a: f64, f: f64) -> Ellipsoid {
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);

        Self { a, f, e2, ep2 }
    }

    /// Semi-major axis in meters
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Flattening
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Inverse flattening `1/f`
    pub fn inverse_flattening(&self) -> f64 {
        1.0 / self.f
    }

    /// First eccentricity squared
    #[inline]
    pub fn e2(&self) -> f64 {
        self.e2
    }

    /// Second eccentricity squared
    #[inline]
    pub fn ep2(&self) -> f64 {
        self.ep2
    }

    /// Prime-vertical radius of curvature where the latitude has sine `sin_phi`
    pub(crate) fn prime_vertical_radius(&self, sin_phi: f64) -> f64 {
        self.a / (1.0 - self.e2 * sin_phi.powi(2)).sqrt()
    }

    /// Meridional radius of curvature where the latitude has sine `sin_phi`
    pub(crate) fn meridional_radius(&self, sin_phi: f64) -> f64 {
        self.a * (1.0 - self.e2) / (1.0 - self.e2 * sin_phi.powi(2)).powf(1.5)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}
