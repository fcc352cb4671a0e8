use crate::{ellipsoid::Ellipsoid, utility::series_coefficients};

const ORDER: usize = 3;

const ARC_COEFF: [f64; 20] = [
    // e0, polynomial in e2 of order 3
    -5., -12., -64., 256., 256.,
    // e1
    45., 96., 384., 0., 1024.,
    // e2
    45., 60., 0., 0., 1024.,
    // e3
    35., 0., 0., 0., 3072.,
];  // count = 20

/// Meridional arc length, third order in the first eccentricity squared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ArcLengthSeries {
    a: f64,
    e: [f64; 4],
}

impl ArcLengthSeries {
    pub fn new(ellipsoid: &Ellipsoid) -> ArcLengthSeries {
        Self {
            a: ellipsoid.a,
            e: series_coefficients(&ARC_COEFF, ORDER, ellipsoid.e2),
        }
    }

    /// Leading coefficient; `a * e0` is the rectifying radius.
    pub fn e0(&self) -> f64 {
        self.e[0]
    }

    /// Distance from the equator to latitude `phi` along the meridian.
    pub fn arc_length(&self, phi: f64) -> f64 {
        let [e0, e1, e2, e3] = self.e;

        self.a * (
            e0 * phi
            - e1 * (2. * phi).sin()
            + e2 * (4. * phi).sin()
            - e3 * (6. * phi).sin()
        )
    }
}
