//! Transverse Mercator projection between geographic coordinates on an
//! ellipsoid and planar grid coordinates.
//!
//! A [`TranMerc`] holds the validated ellipsoid and projection parameters and
//! the constants derived from them. The [`forward()`] and [`inverse()`]
//! transforms borrow it and return a [`Converted`] value: the output
//! coordinate and a [`Status`] bitmask naming every problem found.
//!
//! ```
//! use tranmerc::{LatLon, Parameters, Status, TranMerc};
//!
//! let mut tm = TranMerc::default();
//! let status = tm.set_parameters(&Parameters {
//!     central_meridian: 9_f64.to_radians(),
//!     false_easting: 500_000.0,
//!     scale_factor: 0.9996,
//!     ..Parameters::default()
//! });
//! assert_eq!(status, Status::NO_ERROR);
//!
//! let coord = LatLon::new(48.1_f64.to_radians(), 11.6_f64.to_radians());
//! let grid = tm.forward(coord).into_result().unwrap();
//! let back = tm.inverse(grid).into_result().unwrap();
//!
//! assert!((back.latitude() - coord.latitude()).abs() < 1e-9);
//! assert!((back.longitude() - coord.longitude()).abs() < 1e-9);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod conversion;
pub mod ellipsoid;
pub mod latlon;
pub mod parameters;
pub mod projected;
pub mod status;

pub use conversion::Converted;
pub use ellipsoid::Ellipsoid;
pub use latlon::LatLon;
pub use parameters::{Parameters, TranMerc};
pub use projected::Projected;
pub use projections::{forward::forward, inverse::inverse};
pub use status::Status;

pub mod projections {
    pub(crate) mod arc_length;
    pub mod forward;
    pub mod inverse;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Projection parameters are not valid: {0}")]
    InvalidParameters(Status),
    #[error("UTM zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("Geographic coordinate could not be projected: {0}")]
    InvalidGeographic(Status),
    #[error("Projected coordinate could not be converted to geographic: {0}")]
    InvalidProjected(Status),
}

impl Error {
    /// The status bits behind this error, if it came from a validation pass.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::InvalidParameters(status)
            | Error::InvalidGeographic(status)
            | Error::InvalidProjected(status) => Some(*status),
            Error::InvalidZone(_) => None,
        }
    }
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
