//! Distance formula trait definition

use crate::coordinate::{check_coordinates, GeoPoint};
use crate::errors::GeoResult;

/// Strategy trait for great-circle distance approximations
pub trait DistanceFormula: Send + Sync {
    /// Distance in kilometers between two points already known to be valid
    fn compute(&self, a: &GeoPoint, b: &GeoPoint) -> f64;

    /// Get the name of this formula
    fn name(&self) -> &'static str;

    /// Short description of accuracy and cost
    fn description(&self) -> &'static str;

    /// Validate both points, then compute the distance in kilometers
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> GeoResult<f64> {
        check_coordinates(Some(a), Some(b))?;
        Ok(self.compute(a, b))
    }
}
