//! Great-circle distance formulas
//!
//! Three interchangeable approximations of the distance between two points
//! on a spherical Earth. Each validates its points before computing and
//! returns the distance in kilometers.

mod formula;
mod haversine;
mod spherical_cosines;
mod equirectangular;
mod factory;
mod tests;

pub use formula::DistanceFormula;
pub use haversine::Haversine;
pub use spherical_cosines::SphericalCosines;
pub use equirectangular::Equirectangular;
pub use factory::FormulaFactory;

use log::debug;

use crate::coordinate::{check_coordinates, GeoPoint};
use crate::errors::GeoResult;

/// Haversine distance in kilometers
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> GeoResult<f64> {
    Haversine.distance(a, b)
}

/// Spherical law of cosines distance in kilometers
pub fn spherical_cosines(a: &GeoPoint, b: &GeoPoint) -> GeoResult<f64> {
    SphericalCosines.distance(a, b)
}

/// Equirectangular distance in kilometers
pub fn equirectangular(a: &GeoPoint, b: &GeoPoint) -> GeoResult<f64> {
    Equirectangular.distance(a, b)
}

/// Run every formula on one pair of points
///
/// The pair is validated once up front.
///
/// # Returns
/// `(formula name, distance in km)` for each formula, in factory order
pub fn compare_all(a: &GeoPoint, b: &GeoPoint) -> GeoResult<Vec<(&'static str, f64)>> {
    check_coordinates(Some(a), Some(b))?;

    let results: Vec<(&'static str, f64)> = FormulaFactory::all()
        .iter()
        .map(|formula| (formula.name(), formula.compute(a, b)))
        .collect();

    debug!("Compared {} formulas for {} -> {}: {:?}", results.len(), a, b, results);
    Ok(results)
}
