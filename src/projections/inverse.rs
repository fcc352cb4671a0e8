use std::f64::consts::FRAC_PI_2;

use log::trace;

use crate::{
    constants::{MAX_DELTA_LONG, MAX_INVERSE_D, MAX_INVERSE_DELTA_LONG, MAX_LAT},
    conversion::Converted,
    ellipsoid::Ellipsoid,
    latlon::LatLon,
    parameters::TranMerc,
    projected::Projected,
    projections::arc_length::ArcLengthSeries,
    utility::{series_coefficients, GeoMath},
    Status,
};

const ORDER: usize = 4;

const FOOTPOINT_COEFF: [f64; 24] = [
    // sin(2mu), polynomial in e1 of order 4
    0., -27., 0., 48., 0., 32.,
    // sin(4mu)
    -55., 0., 42., 0., 0., 32.,
    // sin(6mu)
    0., 151., 0., 0., 0., 96.,
    // sin(8mu)
    1097., 0., 0., 0., 0., 512.,
];  // count = 24

/// Latitude whose meridional arc length is a given distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FootpointSeries {
    // Rectifying radius a * e0
    radius: f64,
    coeff: [f64; 4],
}

impl FootpointSeries {
    pub fn new(ellipsoid: &Ellipsoid, arc: &ArcLengthSeries) -> FootpointSeries {
        let root = (1. - ellipsoid.e2).sqrt();
        let e1 = (1. - root) / (1. + root);

        Self {
            radius: ellipsoid.a * arc.e0(),
            coeff: series_coefficients(&FOOTPOINT_COEFF, ORDER, e1),
        }
    }

    /// Rectifying latitude of the arc length `m`
    pub fn rectifying_latitude(&self, m: f64) -> f64 {
        m / self.radius
    }

    /// Footpoint latitude for the rectifying latitude `mu`
    pub fn footpoint_latitude(&self, mu: f64) -> f64 {
        self.coeff
            .iter()
            .zip(1_i32..)
            .fold(mu, |phi, (c, k)| phi + c * (f64::from(2 * k) * mu).sin())
    }
}

/// Recovers the geographic coordinate of a point on the grid of `tm`.
///
/// The footpoint latitude is found in closed form and corrected by the
/// series in the distance from the central meridian; nothing iterates.
///
/// A footpoint past the 89.99 degree limit of [`forward`](crate::forward)
/// sets [`Status::NORTHING_ERROR`]. A point more than a quarter great circle
/// from the central meridian, or one the longitude series places more than
/// 90 degrees from it, sets [`Status::EASTING_ERROR`]. Either leaves the
/// result empty. Points more than 70 degrees of longitude from the central
/// meridian carry [`Status::LON_WARNING`].
///
/// # Usage
///
/// ```
/// use tranmerc::{inverse, Projected, TranMerc};
///
/// let tm = TranMerc::utm(18, true).unwrap();
/// let grid = Projected::new(585_664.121, 4_511_315.422);
///
/// let coord = inverse(&tm, grid).into_result().unwrap();
///
/// assert!((coord.latitude().to_degrees() - 40.748333).abs() < 1e-6);
/// assert!((coord.longitude().to_degrees() + 73.985278).abs() < 1e-6);
/// ```
pub fn inverse(tm: &TranMerc, value: Projected) -> Converted<LatLon> {
    let mut status = Status::NO_ERROR;
    if !value.easting.is_finite() {
        status |= Status::EASTING_ERROR;
    }
    if !value.northing.is_finite() {
        status |= Status::NORTHING_ERROR;
    }
    if status.is_fatal() {
        trace!("inverse transform of {value} failed: {status}");
        return Converted::failed(status);
    }

    let params = &tm.params;
    let ep2 = tm.ellipsoid.ep2;
    let footpoint = &tm.derived.footpoint;

    let m1 = tm.derived.m0 + (value.northing - params.false_northing) / params.scale_factor;
    let mu1 = footpoint.rectifying_latitude(m1);
    let phi1 = footpoint.footpoint_latitude(mu1);

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    if mu1.abs() >= FRAC_PI_2 || phi1.abs() > MAX_LAT {
        status |= Status::NORTHING_ERROR;
    }

    let nu1 = tm.ellipsoid.prime_vertical_radius(sin_phi1);
    let d = (value.easting - params.false_easting) / (nu1 * params.scale_factor);
    if d.abs() > MAX_INVERSE_D {
        status |= Status::EASTING_ERROR;
    }

    if status.is_fatal() {
        trace!("inverse transform of {value} failed: {status}");
        return Converted::failed(status);
    }

    let tan_phi1 = phi1.tan();
    let t1 = tan_phi1.powi(2);
    let c1 = ep2 * cos_phi1.powi(2);
    let r1 = tm.ellipsoid.meridional_radius(sin_phi1);

    let lat = phi1 - (nu1 * tan_phi1 / r1) * (
        d.powi(2) / 2.
        - (5. + 3. * t1 + 10. * c1 - 4. * c1.powi(2) - 9. * ep2) * d.powi(4) / 24.
        + (61. + 90. * t1 + 298. * c1 + 45. * t1.powi(2) - 252. * ep2 - 3. * c1.powi(2)) * d.powi(6) / 720.
    );

    let dlam = (
        d
        - (1. + 2. * t1 + c1) * d.powi(3) / 6.
        + (5. - 2. * c1 + 28. * t1 - 3. * c1.powi(2) + 8. * ep2 + 24. * t1.powi(2)) * d.powi(5) / 120.
    ) / cos_phi1;

    if lat.is_nan() || lat.abs() > FRAC_PI_2 {
        status |= Status::NORTHING_ERROR;
    }
    // Checked before wrapping, which would hide a diverging series
    if dlam.is_nan() || dlam.abs() > MAX_INVERSE_DELTA_LONG {
        status |= Status::EASTING_ERROR;
    }
    if status.is_fatal() {
        trace!("inverse transform of {value} left the ellipsoid: {status}");
        return Converted::failed(status);
    }

    let lon = (params.central_meridian + dlam).ang_normalize();
    if dlam.abs() > MAX_DELTA_LONG {
        status |= Status::LON_WARNING;
        trace!("inverse transform of {value} is {:.1} degrees off the central meridian", dlam.to_degrees());
    }

    Converted::new(LatLon::new(lat, lon), status)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use approx::assert_relative_eq;

    use super::*;
    use crate::ellipsoid::WGS84;

    #[test]
    fn footpoint_inverts_arc_length() {
        let arc = ArcLengthSeries::new(&WGS84);
        let footpoint = FootpointSeries::new(&WGS84, &arc);

        for i in -8..=8 {
            let phi = f64::from(i) * 10_f64.to_radians();
            let mu = footpoint.rectifying_latitude(arc.arc_length(phi));
            assert_relative_eq!(footpoint.footpoint_latitude(mu), phi, epsilon = 1e-9);
        }
    }

    #[test]
    fn footpoint_exceeds_rectifying_latitude() {
        let arc = ArcLengthSeries::new(&WGS84);
        let footpoint = FootpointSeries::new(&WGS84, &arc);

        assert_eq!(footpoint.footpoint_latitude(0.), 0.);
        assert!(footpoint.footpoint_latitude(FRAC_PI_3) > FRAC_PI_3);
    }
}
