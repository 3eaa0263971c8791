//! Tests for the formula factory

extern crate std;

use std::collections::BTreeSet;

use crate::coordinate::GeoPoint;
use crate::distance::{DistanceFormula, FormulaFactory, Haversine};
use crate::errors::GeoError;

#[test]
fn test_create_by_name_and_alias() {
    std::assert_eq!(FormulaFactory::create("haversine").unwrap().name(), "haversine");
    std::assert_eq!(FormulaFactory::create("HAVERSINE").unwrap().name(), "haversine");
    std::assert_eq!(FormulaFactory::create("cosines").unwrap().name(), "spherical-cosines");
    std::assert_eq!(FormulaFactory::create("slc").unwrap().name(), "spherical-cosines");
    std::assert_eq!(FormulaFactory::create(" equirect ").unwrap().name(), "equirectangular");
}

#[test]
fn test_create_unknown_formula() {
    match FormulaFactory::create("vincenty") {
        Err(GeoError::UnknownFormula(name)) => std::assert_eq!(name, "vincenty"),
        Err(e) => std::panic!("unexpected error: {}", e),
        Ok(f) => std::panic!("unexpected formula: {}", f.name()),
    }
}

#[test]
fn test_all_formulas_have_distinct_names() {
    let formulas = FormulaFactory::all();
    std::assert_eq!(formulas.len(), 3);
    let names: BTreeSet<&str> = formulas.iter().map(|f| f.name()).collect();
    std::assert_eq!(names.len(), 3);
    std::assert!(formulas.iter().all(|f| !f.description().is_empty()));
}

#[test]
fn test_trait_distance_validates_but_compute_does_not() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 190.0);
    std::assert!(Haversine.distance(&a, &b).is_err());
    std::assert!(Haversine.compute(&a, &b).is_finite());
}
