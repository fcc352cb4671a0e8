use std::f64::consts::{FRAC_PI_2, PI};

// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;
// GRS80 flattening, same semi-major axis as WGS84
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
pub(crate) const UTM_SOUTH_FALSE_NORTHING: f64 = 10_000_000.;

// Accepted parameter ranges
pub(crate) const MIN_A: f64 = 6_000_000.;
pub(crate) const MAX_A: f64 = 7_000_000.;
pub(crate) const MIN_INV_F: f64 = 250.;
pub(crate) const MAX_INV_F: f64 = 350.;
pub(crate) const MIN_SCALE_FACTOR: f64 = 0.3;
pub(crate) const MAX_SCALE_FACTOR: f64 = 3.0;

/// Largest latitude accepted by the forward transform (89.99 degrees)
pub(crate) const MAX_LAT: f64 = 89.99 * (PI / 180.);
/// Distance from the central meridian past which results are flagged (70 degrees)
pub(crate) const MAX_DELTA_LONG: f64 = 70. * (PI / 180.);
/// Largest `D` the inverse will evaluate; a quarter great circle
pub(crate) const MAX_INVERSE_D: f64 = FRAC_PI_2;
/// Largest longitude offset the inverse series may produce before it is
/// taken to have broken down
pub(crate) const MAX_INVERSE_DELTA_LONG: f64 = FRAC_PI_2;
