use crate::{latlon::LatLon, projected::Projected, Error, Status};

/// Coordinate types a transform can produce. Decides which [`Error`] a failed
/// transform into this type turns into.
pub trait ConversionTarget: Sized {
    fn conversion_error(status: Status) -> Error;
}

impl ConversionTarget for Projected {
    fn conversion_error(status: Status) -> Error {
        Error::InvalidGeographic(status)
    }
}

impl ConversionTarget for LatLon {
    fn conversion_error(status: Status) -> Error {
        Error::InvalidProjected(status)
    }
}

/// Outcome of a forward or inverse transform: the converted coordinate, if one
/// is defined, and the [`Status`] of the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converted<T> {
    value: Option<T>,
    status: Status,
}

impl<T: ConversionTarget + Copy> Converted<T> {
    pub(crate) fn new(value: T, status: Status) -> Converted<T> {
        Self {
            value: (!status.is_fatal()).then_some(value),
            status,
        }
    }

    pub(crate) fn failed(status: Status) -> Converted<T> {
        Self {
            value: None,
            status,
        }
    }

    /// The converted coordinate, or `None` if any error bit is set. A
    /// coordinate accompanied only by [`Status::LON_WARNING`] is returned.
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Every flag raised while converting.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the conversion raised no flag at all.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Converts into a `Result`, keeping warning-only outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeographic`] for a failed forward transform and
    /// [`Error::InvalidProjected`] for a failed inverse transform.
    ///
    /// # Usage
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// use tranmerc::{Error, LatLon, Status, TranMerc};
    ///
    /// let tm = TranMerc::default();
    ///
    /// match tm.forward(LatLon::new(FRAC_PI_2, 0.0)).into_result() {
    ///     Err(Error::InvalidGeographic(status)) => assert_eq!(status, Status::LAT_ERROR),
    ///     _ => panic!("the pole cannot be projected"),
    /// }
    ///
    /// // Far from the central meridian the result is still usable
    /// assert!(tm.forward(LatLon::new(0.3, 100_f64.to_radians())).into_result().is_ok());
    /// ```
    pub fn into_result(self) -> Result<T, Error> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(T::conversion_error(self.status)),
        }
    }
}
