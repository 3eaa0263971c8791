//! Bounding box command
//!
//! Computes the box enclosing every point within a radius of a center.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_point;
use crate::coordinate::{check_coordinates, check_distance, get_bounding_box, GeoPoint};
use crate::errors::{CoordinateIssue, GeoError, GeoResult};
use crate::places::PlaceCatalog;

/// Command for computing a radius bounding box
pub struct BoundingBoxCommand {
    /// Center point, if given
    center: Option<GeoPoint>,
    /// Radius in kilometers, if given
    radius_km: Option<f64>,
}

impl BoundingBoxCommand {
    /// Create a new bounding box command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `catalog` - Places used to resolve point names
    ///
    /// # Returns
    /// A new BoundingBoxCommand instance or an error
    pub fn new(args: &ArgMatches, catalog: &PlaceCatalog) -> GeoResult<Self> {
        let center = resolve_point(args, "from", catalog)?;

        let radius_km = match args.get_one::<String>("radius") {
            Some(value) => Some(value.trim().parse::<f64>()
                .map_err(|_| GeoError::Parse(format!("Invalid radius: '{}'", value)))?),
            None => None,
        };
        info!("Bounding box of {:?} km around {:?}", radius_km, center);

        Ok(BoundingBoxCommand { center, radius_km })
    }
}

impl Command for BoundingBoxCommand {
    fn render(&self) -> GeoResult<String> {
        check_coordinates(self.center.as_ref(), None)?;
        let radius_km = check_distance(self.radius_km)?;
        let center = self.center
            .ok_or(GeoError::InvalidCoordinate(CoordinateIssue::MissingPoint))?;

        let bbox = get_bounding_box(&center, radius_km)?;
        Ok(bbox.to_string())
    }
}
