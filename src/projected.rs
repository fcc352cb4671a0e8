use std::fmt::Display;

use crate::{conversion::Converted, latlon::LatLon, parameters::TranMerc, projections};

/// Grid coordinate of a Transverse Mercator projection, in meters, false
/// offsets included.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projected {
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub(crate) northing: f64,
}

impl Projected {
    /// Creates an easting/northing pair in meters.
    ///
    /// ```
    /// use tranmerc::Projected;
    ///
    /// let coord = Projected::new(585_664.121, 4_511_315.422);
    ///
    /// assert_eq!(coord.easting(), 585_664.121);
    /// assert_eq!(coord.northing(), 4_511_315.422);
    /// ```
    pub fn new(easting: f64, northing: f64) -> Projected {
        Self {
            easting,
            northing,
        }
    }

    /// Returns the easting.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the northing.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Recovers the geographic coordinate of this point under `tm`.
    ///
    /// # Usage
    ///
    /// ```
    /// use tranmerc::{Projected, TranMerc};
    ///
    /// let tm = TranMerc::utm(33, false).unwrap();
    /// let coord = Projected::new(500_000.0, 10_000_000.0).to_latlon(&tm).value().unwrap();
    ///
    /// assert!(coord.latitude().abs() < 1e-12);
    /// assert!((coord.longitude() - 15_f64.to_radians()).abs() < 1e-12);
    /// ```
    pub fn to_latlon(&self, tm: &TranMerc) -> Converted<LatLon> {
        projections::inverse::inverse(tm, *self)
    }

    /// Projects `value` with `tm`.
    pub fn from_latlon(value: &LatLon, tm: &TranMerc) -> Converted<Projected> {
        projections::forward::forward(tm, *value)
    }
}

impl Display for Projected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{easting} {northing}",
        )
    }
}
