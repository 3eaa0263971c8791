//! Geodetic constants and angle conversions
//!
//! This module defines the Earth model and the degree/radian helpers
//! shared by every distance formula and the bounding box calculation.

use std::f64::consts::PI;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// PI/360, converts a degree sum or difference straight to a half-angle in radians
pub const PI_360: f64 = PI / 360.0;

/// Coordinate limits in degrees
pub mod limits {
    /// Southernmost latitude
    pub const MIN_LAT: f64 = -90.0;

    /// Northernmost latitude
    pub const MAX_LAT: f64 = 90.0;

    /// Westernmost longitude
    pub const MIN_LON: f64 = -180.0;

    /// Easternmost longitude
    pub const MAX_LON: f64 = 180.0;
}

/// Convert degrees to radians
///
/// Computed as `deg * (PI / 180)`, which is the operation order the
/// published reference values were produced with.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees
///
/// Computed as `(180 * rad) / PI`. This is not the same rounding as
/// `f64::to_degrees`, which multiplies by a precomputed ratio.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    (180.0 * rad) / PI
}
