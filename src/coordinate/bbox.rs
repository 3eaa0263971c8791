//! Bounding box around a point and radius

use std::f64::consts::PI;
use std::fmt;

use log::debug;

use super::point::GeoPoint;
use super::validation::{check_coordinates, check_distance};
use crate::constants::{deg_to_rad, rad_to_deg, EARTH_RADIUS_KM};
use crate::constants::limits;
use crate::errors::GeoResult;

/// A latitude/longitude rectangle in degrees
///
/// When the box straddles the antimeridian, `min_lon` is greater than
/// `max_lon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western edge
    pub min_lon: f64,
    /// Southern edge
    pub min_lat: f64,
    /// Eastern edge
    pub max_lon: f64,
    /// Northern edge
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Extent as `[min_lon, min_lat, max_lon, max_lat]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Whether the box wraps across the +/-180 meridian
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Longitude span in degrees
    pub fn width(&self) -> f64 {
        if self.crosses_antimeridian() {
            (limits::MAX_LON - self.min_lon) + (self.max_lon - limits::MIN_LON)
        } else {
            self.max_lon - self.min_lon
        }
    }

    /// Latitude span in degrees
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if point.lat < self.min_lat || point.lat > self.max_lat {
            return false;
        }

        if self.crosses_antimeridian() {
            point.lon >= self.min_lon || point.lon <= self.max_lon
        } else {
            point.lon >= self.min_lon && point.lon <= self.max_lon
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

/// Compute the bounding box enclosing every point within `distance_km` of `center`
///
/// # Arguments
/// * `center` - Center point, validated in single-point mode
/// * `distance_km` - Radius in kilometers, must be finite and greater than zero
///
/// # Returns
/// The enclosing box, or an error if either argument is invalid
///
/// If the radius reaches a pole, the latitude is clamped to that pole and the
/// box spans all longitudes.
pub fn get_bounding_box(center: &GeoPoint, distance_km: f64) -> GeoResult<BoundingBox> {
    check_coordinates(Some(center), None)?;
    let distance_km = check_distance(Some(distance_km))?;

    let min_lat_limit = deg_to_rad(limits::MIN_LAT);
    let max_lat_limit = deg_to_rad(limits::MAX_LAT);
    let min_lon_limit = deg_to_rad(limits::MIN_LON);
    let max_lon_limit = deg_to_rad(limits::MAX_LON);

    // angular distance on a great circle
    let angular_radius = distance_km / EARTH_RADIUS_KM;

    let rad_lat = deg_to_rad(center.lat);
    let rad_lon = deg_to_rad(center.lon);

    let mut min_lat = rad_lat - angular_radius;
    let mut max_lat = rad_lat + angular_radius;
    let mut min_lon;
    let mut max_lon;

    if min_lat > min_lat_limit && max_lat < max_lat_limit {
        let delta_lon = (angular_radius.sin() / rad_lat.cos()).asin();
        min_lon = rad_lon - delta_lon;
        max_lon = rad_lon + delta_lon;

        if min_lon < min_lon_limit {
            min_lon += 2.0 * PI;
        }
        if max_lon > max_lon_limit {
            max_lon -= 2.0 * PI;
        }
    } else {
        debug!("Radius of {} km around {} encloses a pole", distance_km, center);
        min_lat = min_lat.max(min_lat_limit);
        max_lat = max_lat.min(max_lat_limit);
        min_lon = min_lon_limit;
        max_lon = max_lon_limit;
    }

    let bbox = BoundingBox::new(
        rad_to_deg(min_lon),
        rad_to_deg(min_lat),
        rad_to_deg(max_lon),
        rad_to_deg(max_lat),
    );
    debug!("Bounding box for {} km around {}: {}", distance_km, center, bbox);

    Ok(bbox)
}
