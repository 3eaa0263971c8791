//! Point structure for representing geographic coordinates

use std::fmt;

use crate::errors::{GeoError, GeoResult};

/// A point on the Earth's surface in WGS84-style degrees
///
/// Construction never range-checks; every computation validates its
/// points on entry instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180]
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point from latitude and longitude in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Parse a point from a string (format: "lat,lon")
    pub fn from_string(point_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoError::Parse(format!(
                "Point must be in format 'lat,lon', got '{}'", point_str
            )));
        }

        let lat = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoError::Parse(format!("Invalid latitude value: '{}'", parts[0].trim())))?;
        let lon = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoError::Parse(format!("Invalid longitude value: '{}'", parts[1].trim())))?;

        Ok(GeoPoint::new(lat, lon))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
