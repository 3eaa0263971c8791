//! Custom error types for distance and bounding box computations

use std::fmt;
use std::io;

/// Requirements reported with every coordinate error
const COORDINATE_REQUIREMENTS: &str =
    "both points are required; latitude must be a number between -90 and 90; \
     longitude must be a number between -180 and 180";

/// Which coordinate check failed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateIssue {
    /// A required point was not supplied
    MissingPoint,
    /// Latitude is non-finite or outside [-90, 90]
    Latitude(f64),
    /// Longitude is non-finite or outside [-180, 180]
    Longitude(f64),
}

impl fmt::Display for CoordinateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateIssue::MissingPoint => write!(f, "missing point"),
            CoordinateIssue::Latitude(v) => write!(f, "latitude {} out of range", v),
            CoordinateIssue::Longitude(v) => write!(f, "longitude {} out of range", v),
        }
    }
}

/// Geodistance error types
#[derive(Debug)]
pub enum GeoError {
    /// A point is missing, non-numeric or out of range
    InvalidCoordinate(CoordinateIssue),
    /// Bounding box radius is missing, non-numeric, zero or negative
    InvalidDistance(Option<f64>),
    /// Text could not be parsed into a value
    Parse(String),
    /// No distance formula with this name
    UnknownFormula(String),
    /// No place with this name in the catalog
    UnknownPlace(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidCoordinate(issue) => {
                write!(f, "Invalid coordinates ({}): {}", issue, COORDINATE_REQUIREMENTS)
            },
            GeoError::InvalidDistance(Some(d)) => {
                write!(f, "Invalid distance {}: distance is required and must be greater than zero", d)
            },
            GeoError::InvalidDistance(None) => {
                write!(f, "Invalid distance: distance is required and must be greater than zero")
            },
            GeoError::Parse(msg) => write!(f, "Parse error: {}", msg),
            GeoError::UnknownFormula(name) => write!(f, "Unknown distance formula: {}", name),
            GeoError::UnknownPlace(name) => write!(f, "Unknown place: {}", name),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<CoordinateIssue> for GeoError {
    fn from(issue: CoordinateIssue) -> Self {
        GeoError::InvalidCoordinate(issue)
    }
}

/// Result type for geodistance operations
pub type GeoResult<T> = Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_names_failed_check() {
        let err = GeoError::from(CoordinateIssue::Latitude(91.0));
        let msg = err.to_string();
        assert!(msg.contains("latitude 91 out of range"));
        assert!(msg.contains("between -90 and 90"));
        assert!(msg.contains("between -180 and 180"));
    }

    #[test]
    fn test_distance_error_message() {
        let msg = GeoError::InvalidDistance(Some(-5.0)).to_string();
        assert!(msg.contains("-5"));
        assert!(msg.contains("must be greater than zero"));

        let msg = GeoError::InvalidDistance(None).to_string();
        assert!(msg.contains("distance is required"));
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let err: GeoError = io::Error::new(io::ErrorKind::NotFound, "places.toml").into();
        assert!(matches!(err, GeoError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
