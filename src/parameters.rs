use std::f64::consts::{FRAC_PI_2, PI};

use lazy_static::lazy_static;
use log::debug;

use crate::{
    constants::{
        MAX_A, MAX_INV_F, MAX_SCALE_FACTOR, MIN_A, MIN_INV_F, MIN_SCALE_FACTOR, UTM_FALSE_EASTING,
        UTM_K0, UTM_SOUTH_FALSE_NORTHING, WGS84_A, WGS84_F,
    },
    conversion::Converted,
    ellipsoid::Ellipsoid,
    latlon::LatLon,
    projected::Projected,
    projections::{arc_length::ArcLengthSeries, forward, inverse, inverse::FootpointSeries},
    utility::GeoMath,
    Error, Status, ThisOrThat,
};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: i32 = 1;
    pub(crate) const MAXUTMZONE: i32 = 60;
}

lazy_static! {
    static ref DEFAULT_TRANMERC: TranMerc = TranMerc::derive(&Parameters::default());
}

/// Ellipsoid shape and projection placement of a Transverse Mercator
/// projection. Angles are in radians, distances in meters.
///
/// The default is the WGS84 ellipsoid with the origin at the intersection of
/// the equator and the Greenwich meridian, no false offsets and unit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Semi-major axis of the ellipsoid
    pub a: f64,
    /// Flattening of the ellipsoid
    pub f: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat0"))]
    pub origin_latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon0"))]
    pub central_meridian: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "k0"))]
    pub scale_factor: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            a: WGS84_A,
            f: WGS84_F,
            origin_latitude: 0.,
            central_meridian: 0.,
            false_easting: 0.,
            false_northing: 0.,
            scale_factor: 1.,
        }
    }
}

impl Parameters {
    /// Checks every parameter against its accepted range. All violations are
    /// reported together.
    ///
    /// ```
    /// use tranmerc::{Parameters, Status};
    ///
    /// let params = Parameters {
    ///     a: -1.0,
    ///     scale_factor: 10.0,
    ///     ..Parameters::default()
    /// };
    ///
    /// assert_eq!(params.validate(), Status::A_ERROR | Status::SCALE_FACTOR_ERROR);
    /// assert!(Parameters::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Status {
        let mut status = Status::NO_ERROR;

        if !(MIN_A..=MAX_A).contains(&self.a) {
            status |= Status::A_ERROR;
        }
        if !(MIN_INV_F..=MAX_INV_F).contains(&(1. / self.f)) {
            status |= Status::INV_F_ERROR;
        }
        // Poles are excluded, the projection has no origin there
        if self.origin_latitude.is_nan() || self.origin_latitude.abs() >= FRAC_PI_2 {
            status |= Status::ORIGIN_LAT_ERROR;
        }
        if !(-PI..=PI).contains(&self.central_meridian) {
            status |= Status::CENT_MER_ERROR;
        }
        if !(MIN_SCALE_FACTOR..=MAX_SCALE_FACTOR).contains(&self.scale_factor) {
            status |= Status::SCALE_FACTOR_ERROR;
        }
        if !self.false_easting.is_finite() {
            status |= Status::EASTING_ERROR;
        }
        if !self.false_northing.is_finite() {
            status |= Status::NORTHING_ERROR;
        }

        status
    }
}

/// Constants derived from [`Parameters`] once per commit and shared by both
/// transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DerivedConstants {
    pub(crate) arc: ArcLengthSeries,
    pub(crate) footpoint: FootpointSeries,
    /// Meridional arc length at the origin latitude
    pub(crate) m0: f64,
}

/// A validated Transverse Mercator projection: the committed [`Parameters`]
/// together with everything derived from them.
///
/// The value is owned by the caller. Transforms borrow it immutably while
/// [`TranMerc::set_parameters`] needs it mutably, so a transform can never
/// observe a partially updated state. Share it across threads by cloning or
/// behind a lock.
///
/// # Usage
///
/// ```
/// use tranmerc::{LatLon, Parameters, TranMerc};
///
/// let tm = TranMerc::create(Parameters {
///     false_easting: 500_000.0,
///     scale_factor: 0.9996,
///     ..Parameters::default()
/// }).unwrap();
///
/// let grid = tm.forward(LatLon::new(0.0, 0.0)).into_result().unwrap();
///
/// assert_eq!(grid.easting(), 500_000.0);
/// assert_eq!(grid.northing(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranMerc {
    pub(crate) ellipsoid: Ellipsoid,
    pub(crate) params: Parameters,
    pub(crate) derived: DerivedConstants,
}

impl Default for TranMerc {
    fn default() -> Self {
        *DEFAULT_TRANMERC
    }
}

impl TranMerc {
    /// Builds the state for already validated parameters.
    fn derive(params: &Parameters) -> TranMerc {
        let ellipsoid = Ellipsoid::new(params.a, params.f);
        let arc = ArcLengthSeries::new(&ellipsoid);
        let footpoint = FootpointSeries::new(&ellipsoid, &arc);
        let m0 = arc.arc_length(params.origin_latitude);

        Self {
            ellipsoid,
            params: Parameters {
                central_meridian: params.central_meridian.ang_normalize(),
                ..*params
            },
            derived: DerivedConstants {
                arc,
                footpoint,
                m0,
            },
        }
    }

    /// Tries to create a projection from its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] carrying every violated
    /// constraint if the parameters are rejected.
    ///
    /// # Usage
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// use tranmerc::{Error, Parameters, Status, TranMerc};
    ///
    /// let params = Parameters {
    ///     origin_latitude: FRAC_PI_2,
    ///     scale_factor: 0.0,
    ///     ..Parameters::default()
    /// };
    ///
    /// match TranMerc::create(params) {
    ///     Err(Error::InvalidParameters(status)) => {
    ///         assert_eq!(status, Status::ORIGIN_LAT_ERROR | Status::SCALE_FACTOR_ERROR);
    ///     }
    ///     _ => panic!("pole origin must be rejected"),
    /// }
    /// ```
    pub fn create(params: Parameters) -> Result<TranMerc, Error> {
        let status = params.validate();

        if status.is_ok() {
            Ok(TranMerc::derive(&params))
        } else {
            Err(Error::InvalidParameters(status))
        }
    }

    /// Creates the WGS84 [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
    /// projection for `zone` in the northern or southern hemisphere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use tranmerc::TranMerc;
    ///
    /// let tm = TranMerc::utm(18, true).unwrap();
    /// let params = tm.parameters();
    ///
    /// assert!((params.central_meridian - (-75_f64).to_radians()).abs() < 1e-12);
    /// assert_eq!(params.false_easting, 500_000.0);
    /// assert_eq!(params.false_northing, 0.0);
    ///
    /// assert_eq!(TranMerc::utm(18, false).unwrap().parameters().false_northing, 10_000_000.0);
    /// assert!(TranMerc::utm(0, true).is_err());
    /// assert!(TranMerc::utm(61, true).is_err());
    /// ```
    pub fn utm(zone: i32, northp: bool) -> Result<TranMerc, Error> {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        TranMerc::create(Parameters {
            a: WGS84_A,
            f: WGS84_F,
            origin_latitude: 0.,
            central_meridian: utm_central_meridian(zone),
            false_easting: UTM_FALSE_EASTING,
            false_northing: northp.ternary(0., UTM_SOUTH_FALSE_NORTHING),
            scale_factor: UTM_K0,
        })
    }

    /// Validates `params` and, if all of them are accepted, replaces the
    /// current state with one derived from them. On any violation the current
    /// state is kept as it was.
    ///
    /// Returns every violated constraint, or [`Status::NO_ERROR`].
    ///
    /// # Usage
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// use tranmerc::{Parameters, Status, TranMerc};
    ///
    /// let mut tm = TranMerc::default();
    /// let before = tm.parameters();
    ///
    /// let status = tm.set_parameters(&Parameters {
    ///     origin_latitude: FRAC_PI_2,
    ///     ..before
    /// });
    ///
    /// assert_eq!(status, Status::ORIGIN_LAT_ERROR);
    /// assert_eq!(tm.parameters(), before);
    ///
    /// let status = tm.set_parameters(&Parameters {
    ///     false_northing: 1_000.0,
    ///     ..before
    /// });
    ///
    /// assert!(status.is_ok());
    /// assert_eq!(tm.parameters().false_northing, 1_000.0);
    /// ```
    pub fn set_parameters(&mut self, params: &Parameters) -> Status {
        let status = params.validate();

        if status.is_ok() {
            *self = TranMerc::derive(params);
            debug!("committed transverse mercator parameters {params:?}");
        } else {
            debug!("rejected transverse mercator parameters {params:?}: {status}");
        }

        status
    }

    /// Returns the committed parameters. The central meridian is reported
    /// normalized into `(-pi, pi]`.
    #[inline]
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Returns the committed ellipsoid.
    #[inline]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Distance in meters along the meridian from the equator to `latitude`.
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// use tranmerc::TranMerc;
    ///
    /// let tm = TranMerc::default();
    ///
    /// assert_eq!(tm.meridional_arc(0.0), 0.0);
    /// assert!((tm.meridional_arc(FRAC_PI_4) - 4_984_944.378).abs() < 1e-2);
    /// ```
    pub fn meridional_arc(&self, latitude: f64) -> f64 {
        self.derived.arc.arc_length(latitude)
    }

    /// Projects a geographic coordinate. See [`forward()`](crate::forward).
    pub fn forward(&self, value: LatLon) -> Converted<Projected> {
        forward::forward(self, value)
    }

    /// Recovers the geographic coordinate of a projected one. See
    /// [`inverse()`](crate::inverse).
    pub fn inverse(&self, value: Projected) -> Converted<LatLon> {
        inverse::inverse(self, value)
    }
}

/// Central meridian of a UTM zone in radians
pub(crate) fn utm_central_meridian(zone: i32) -> f64 {
    (6.0 * f64::from(zone) - 183.).to_radians()
}
