//! Coordinate validation
//!
//! Every distance formula and the bounding box calculation pass their
//! inputs through this gate before doing any arithmetic, so an invalid
//! point can never produce a distance.

use log::trace;

use super::point::GeoPoint;
use crate::constants::limits::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::errors::{CoordinateIssue, GeoError, GeoResult};

/// Returns true only if `num` is a number between `min` and `max`, inclusive
///
/// `(num - min) * (num - max)` is non-positive exactly when `num` lies in
/// the closed interval. NaN fails the comparison and an infinite value
/// makes the product positive, so both are rejected.
#[inline]
pub fn type_and_range_check(num: f64, min: f64, max: f64) -> bool {
    (num - min) * (num - max) <= 0.0
}

/// Check a single point, reporting the first failed check
pub fn check_point(point: &GeoPoint) -> Result<(), CoordinateIssue> {
    if !type_and_range_check(point.lat, MIN_LAT, MAX_LAT) {
        return Err(CoordinateIssue::Latitude(point.lat));
    }
    if !type_and_range_check(point.lon, MIN_LON, MAX_LON) {
        return Err(CoordinateIssue::Longitude(point.lon));
    }
    Ok(())
}

/// Validate one point or a pair of points
///
/// With only `first`, single-point mode is used (bounding box). With both,
/// both must pass. A missing `first` is always an error, even when `second`
/// is supplied.
pub fn check_coordinates(first: Option<&GeoPoint>, second: Option<&GeoPoint>) -> GeoResult<()> {
    let first = first.ok_or(GeoError::InvalidCoordinate(CoordinateIssue::MissingPoint))?;
    check_point(first)?;

    if let Some(second) = second {
        check_point(second)?;
    }

    trace!("Coordinates valid: {} / {:?}", first, second);
    Ok(())
}

/// Boolean form of [`check_coordinates`]
pub fn validate(first: Option<&GeoPoint>, second: Option<&GeoPoint>) -> bool {
    check_coordinates(first, second).is_ok()
}

/// Validate a bounding box radius in kilometers
///
/// The radius must be present, finite and strictly positive.
pub fn check_distance(distance_km: Option<f64>) -> GeoResult<f64> {
    match distance_km {
        Some(d) if d.is_finite() && d > 0.0 => Ok(d),
        other => Err(GeoError::InvalidDistance(other)),
    }
}
