//! Factory for creating distance formulas

use crate::errors::{GeoError, GeoResult};
use super::formula::DistanceFormula;
use super::haversine::Haversine;
use super::spherical_cosines::SphericalCosines;
use super::equirectangular::Equirectangular;

/// Factory for creating distance formulas
pub struct FormulaFactory;

impl FormulaFactory {
    /// Get a formula by name
    pub fn create(name: &str) -> GeoResult<Box<dyn DistanceFormula>> {
        match name.trim().to_lowercase().as_str() {
            "haversine" => Ok(Box::new(Haversine)),
            "cosines" | "spherical-cosines" | "spherical_cosines" | "slc" => Ok(Box::new(SphericalCosines)),
            "equirectangular" | "equirect" | "flat" => Ok(Box::new(Equirectangular)),
            _ => Err(GeoError::UnknownFormula(name.to_string())),
        }
    }

    /// Get all available formulas
    pub fn all() -> Vec<Box<dyn DistanceFormula>> {
        vec![
            Box::new(Haversine),
            Box::new(SphericalCosines),
            Box::new(Equirectangular),
        ]
    }
}
