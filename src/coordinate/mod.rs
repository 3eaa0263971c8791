//! Coordinate handling for geographic points
//!
//! This module provides the point and bounding box types, the validation
//! gate every computation passes through, and the radius bounding box
//! calculation.

mod bbox;
mod point;
mod validation;
mod tests;

// Re-export key types
pub use self::bbox::{get_bounding_box, BoundingBox};
pub use self::point::GeoPoint;
pub use self::validation::{
    check_coordinates, check_distance, check_point, type_and_range_check, validate,
};
