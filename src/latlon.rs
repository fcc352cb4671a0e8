use std::fmt::Display;

use crate::{conversion::Converted, parameters::TranMerc, projected::Projected, projections};

/// Geographic coordinate on the ellipsoid, in radians. Can be projected to a
/// [`Projected`] coordinate by a [`TranMerc`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a latitude/longitude pair in radians. The values are checked
    /// by the transforms, which report out-of-range input through their
    /// [`Status`](crate::Status).
    ///
    /// ```
    /// use tranmerc::LatLon;
    ///
    /// let coord = LatLon::new(0.711190, -1.291288);
    ///
    /// assert_eq!(coord.latitude(), 0.711190);
    /// assert_eq!(coord.longitude(), -1.291288);
    /// ```
    pub fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Returns the latitude value in radians.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value in radians.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Projects this point with `tm`.
    ///
    /// # Usage
    ///
    /// ```
    /// use tranmerc::{LatLon, TranMerc};
    ///
    /// let tm = TranMerc::utm(33, true).unwrap();
    /// let coord = LatLon::new(52_f64.to_radians(), 15_f64.to_radians());
    ///
    /// let grid = coord.to_projected(&tm).value().unwrap();
    ///
    /// // On the central meridian
    /// assert!((grid.easting() - 500_000.0).abs() < 1e-6);
    /// ```
    pub fn to_projected(&self, tm: &TranMerc) -> Converted<Projected> {
        projections::forward::forward(tm, *self)
    }

    /// Recovers the geographic coordinate of `value` under `tm`.
    pub fn from_projected(value: &Projected, tm: &TranMerc) -> Converted<LatLon> {
        projections::inverse::inverse(tm, *value)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
