//! Named reference places
//!
//! A small catalog of named points loaded from TOML. The built-in catalog
//! is embedded from `places.toml` at compile time; callers can load their
//! own file with the same layout:
//!
//! ```toml
//! [places.new_york]
//! lat = 40.6971
//! lon = -74.2598
//! ```

use std::collections::BTreeMap;
use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::coordinate::GeoPoint;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the built-in catalog once
    static ref BUILTIN_PLACES: PlaceCatalog = {
        let content = include_str!("../places.toml");
        PlaceCatalog::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in places: {}", e);
            PlaceCatalog::default()
        })
    };
}

/// Catalog of named points
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    // Maps normalized names to points
    places: BTreeMap<String, GeoPoint>,
}

impl PlaceCatalog {
    /// The catalog compiled into the crate
    pub fn builtin() -> &'static PlaceCatalog {
        &BUILTIN_PLACES
    }

    /// Parse a catalog from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GeoError::Parse(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value.get("places")
            .and_then(|v| v.as_table())
            .ok_or_else(|| GeoError::Parse("Missing [places] table".to_string()))?;

        let mut catalog = PlaceCatalog::default();
        for (name, entry) in table {
            match (Self::read_degrees(entry, "lat"), Self::read_degrees(entry, "lon")) {
                (Some(lat), Some(lon)) => catalog.insert(name, GeoPoint::new(lat, lon)),
                _ => warn!("Skipping place '{}': needs numeric lat and lon", name),
            }
        }

        debug!("Loaded {} places", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    // Integers are accepted so `lat = 90` works as well as `lat = 90.0`
    fn read_degrees(entry: &toml::Value, key: &str) -> Option<f64> {
        match entry.get(key)? {
            toml::Value::Float(v) => Some(*v),
            toml::Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase().replace([' ', '-'], "_")
    }

    /// Add or replace a place
    pub fn insert(&mut self, name: &str, point: GeoPoint) {
        self.places.insert(Self::normalize(name), point);
    }

    /// Look up a place by name
    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.places.get(&Self::normalize(name)).copied()
    }

    /// All place names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.places.keys().map(String::as_str).collect()
    }

    /// Number of places in the catalog
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog has no places
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Resolve either a `lat,lon` literal or a place name to a point
    pub fn resolve(&self, input: &str) -> GeoResult<GeoPoint> {
        if input.contains(',') {
            return GeoPoint::from_string(input);
        }

        self.get(input)
            .ok_or_else(|| GeoError::UnknownPlace(input.trim().to_string()))
    }
}
