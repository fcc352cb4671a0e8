use std::f64::consts::{PI, TAU};

use log::trace;

use crate::{
    constants::{MAX_DELTA_LONG, MAX_LAT},
    conversion::Converted,
    latlon::LatLon,
    parameters::TranMerc,
    projected::Projected,
    utility::GeoMath,
    Status,
};

/// Projects a geographic coordinate onto the grid of `tm`.
///
/// Latitudes beyond 89.99 degrees set [`Status::LAT_ERROR`] and longitudes
/// outside `[-pi, 2pi]` set [`Status::LON_ERROR`]; either leaves the result
/// empty. A point more than 70 degrees from the central meridian is still
/// projected but carries [`Status::LON_WARNING`], as the series loses accuracy
/// that far out.
///
/// # Usage
///
/// ```
/// use tranmerc::{forward, LatLon, Status, TranMerc};
///
/// let tm = TranMerc::utm(18, true).unwrap();
/// let nyc = LatLon::new(40.748333_f64.to_radians(), (-73.985278_f64).to_radians());
///
/// let converted = forward(&tm, nyc);
/// assert_eq!(converted.status(), Status::NO_ERROR);
///
/// let grid = converted.value().unwrap();
/// assert!((grid.easting() - 585_664.121).abs() < 1e-2);
/// assert!((grid.northing() - 4_511_315.422).abs() < 1e-2);
/// ```
pub fn forward(tm: &TranMerc, value: LatLon) -> Converted<Projected> {
    let lat = value.latitude;
    let lon = value.longitude;

    let mut status = Status::NO_ERROR;
    if !(-MAX_LAT..=MAX_LAT).contains(&lat) {
        status |= Status::LAT_ERROR;
    }
    if !(-PI..=TAU).contains(&lon) {
        status |= Status::LON_ERROR;
    }
    if status.is_fatal() {
        trace!("forward transform of {value} failed: {status}");
        return Converted::failed(status);
    }

    let params = &tm.params;
    let ep2 = tm.ellipsoid.ep2;

    let dlam = (lon - params.central_meridian).ang_normalize();
    if dlam.abs() > MAX_DELTA_LONG {
        status |= Status::LON_WARNING;
        trace!("forward transform of {value} is {:.1} degrees off the central meridian", dlam.to_degrees());
    }

    let (sin_phi, cos_phi) = lat.sin_cos();
    let tan_phi = lat.tan();

    let nu = tm.ellipsoid.prime_vertical_radius(sin_phi);
    let t = tan_phi.powi(2);
    let c = ep2 * cos_phi.powi(2);
    let a = dlam * cos_phi;
    let m = tm.derived.arc.arc_length(lat);

    let x = a
        + (1. - t + c) * a.powi(3) / 6.
        + (5. - 18. * t + t.powi(2) + 72. * c - 58. * ep2) * a.powi(5) / 120.;

    let y = a.powi(2) / 2.
        + (5. - t + 9. * c + 4. * c.powi(2)) * a.powi(4) / 24.
        + (61. - 58. * t + t.powi(2) + 600. * c - 330. * ep2) * a.powi(6) / 720.;

    let easting = params.false_easting + params.scale_factor * nu * x;
    let northing = params.false_northing
        + params.scale_factor * (m - tm.derived.m0 + nu * tan_phi * y);

    Converted::new(Projected::new(easting, northing), status)
}
