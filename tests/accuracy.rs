use approx::assert_relative_eq;
use tranmerc::{LatLon, Parameters, Projected, Status, TranMerc};

const NYC_LAT: f64 = 40.748333;
const NYC_LON: f64 = -73.985278;
// GeographicLib reference for the point above, UTM 18N
const NYC_EASTING: f64 = 585_664.121;
const NYC_NORTHING: f64 = 4_511_315.422;

#[test]
fn utm_reference_point() {
    let tm = TranMerc::utm(18, true).unwrap();
    let coord = LatLon::new(NYC_LAT.to_radians(), NYC_LON.to_radians());

    let converted = tm.forward(coord);
    assert_eq!(converted.status(), Status::NO_ERROR);

    let grid = converted.value().unwrap();
    assert_relative_eq!(grid.easting(), NYC_EASTING, epsilon = 1e-2);
    assert_relative_eq!(grid.northing(), NYC_NORTHING, epsilon = 1e-2);

    let back = tm.inverse(Projected::new(NYC_EASTING, NYC_NORTHING)).into_result().unwrap();
    assert_relative_eq!(back.latitude(), NYC_LAT.to_radians(), epsilon = 1e-8);
    assert_relative_eq!(back.longitude(), NYC_LON.to_radians(), epsilon = 1e-8);
}

#[test]
fn roundtrip_across_zones() {
    for zone in [1, 10, 17, 30, 33, 45, 60] {
        for northp in [true, false] {
            let tm = TranMerc::utm(zone, northp).unwrap();
            let cm = tm.parameters().central_meridian;
            let hemisphere = if northp { 1. } else { -1. };

            for lat_deg in [0., 15., 45., 72., 80.] {
                for offset_deg in [-3., -1.5, 0., 0.7, 3.] {
                    let coord = LatLon::new(
                        hemisphere * f64::to_radians(lat_deg),
                        cm + f64::to_radians(offset_deg),
                    );

                    let grid = tm.forward(coord).into_result().unwrap();
                    let back = tm.inverse(grid).into_result().unwrap();

                    assert_relative_eq!(back.latitude(), coord.latitude(), epsilon = 1e-9);
                    assert_relative_eq!(
                        (back.longitude() - coord.longitude()).sin(),
                        0.,
                        epsilon = 1e-9,
                    );
                }
            }
        }
    }
}

#[test]
fn roundtrip_with_offset_origin() {
    // British National Grid placement on the Airy 1830 ellipsoid
    let tm = TranMerc::create(Parameters {
        a: 6_377_563.396,
        f: 1. / 299.324_964_6,
        origin_latitude: f64::to_radians(49.),
        central_meridian: f64::to_radians(-2.),
        false_easting: 400_000.,
        false_northing: -100_000.,
        scale_factor: 0.999_601_271_7,
    })
    .unwrap();

    // True origin maps onto the false offsets
    let origin = tm
        .forward(LatLon::new(f64::to_radians(49.), f64::to_radians(-2.)))
        .into_result()
        .unwrap();
    assert_relative_eq!(origin.easting(), 400_000., epsilon = 1e-6);
    assert_relative_eq!(origin.northing(), -100_000., epsilon = 1e-6);

    for (lat_deg, lon_deg) in [(50.5, -3.5), (51.5, -0.12), (55.95, -3.19), (58.6, 0.5)] {
        let coord = LatLon::new(f64::to_radians(lat_deg), f64::to_radians(lon_deg));

        let grid = tm.forward(coord).into_result().unwrap();
        assert!(grid.easting() > 0. && grid.northing() > 0., "{grid}");

        let back = tm.inverse(grid).into_result().unwrap();
        assert_relative_eq!(back.latitude(), coord.latitude(), epsilon = 1e-9);
        assert_relative_eq!(back.longitude(), coord.longitude(), epsilon = 1e-9);
    }
}

#[test]
fn southern_hemisphere_northing_positive() {
    let tm = TranMerc::utm(33, false).unwrap();
    let coord = LatLon::new(f64::to_radians(-30.), f64::to_radians(15.));

    let grid = tm.forward(coord).into_result().unwrap();

    assert!(grid.northing() > 0., "{grid}");
    assert!(grid.northing() < 10_000_000.);
    assert_relative_eq!(grid.easting(), 500_000., epsilon = 1e-6);
}
