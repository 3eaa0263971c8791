pub mod constants;
pub mod errors;
pub mod coordinate;
pub mod distance;
pub mod places;
pub mod utils;
pub mod cli;
pub mod commands;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{CoordinateIssue, GeoError, GeoResult};
pub use coordinate::{get_bounding_box, validate, BoundingBox, GeoPoint};
pub use distance::{equirectangular, haversine, spherical_cosines, DistanceFormula, FormulaFactory};
pub use places::PlaceCatalog;
