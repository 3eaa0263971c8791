//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod distance_command;
pub mod bbox_command;
pub mod list_places_command;

pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use bbox_command::BoundingBoxCommand;
pub use list_places_command::ListPlacesCommand;

use clap::ArgMatches;
use crate::coordinate::GeoPoint;
use crate::errors::GeoResult;
use crate::places::PlaceCatalog;

/// Resolve an optional point argument against the catalog
pub(crate) fn resolve_point(args: &ArgMatches, id: &str, catalog: &PlaceCatalog) -> GeoResult<Option<GeoPoint>> {
    args.get_one::<String>(id)
        .map(|input| catalog.resolve(input))
        .transpose()
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeodistanceCommandFactory;

impl GeodistanceCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeodistanceCommandFactory
    }
}

impl Default for GeodistanceCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeodistanceCommandFactory {
    fn create_command(&self, args: &ArgMatches, catalog: &'a PlaceCatalog) -> GeoResult<Box<dyn Command + 'a>> {
        if args.get_flag("list-places") {
            Ok(Box::new(ListPlacesCommand::new(catalog)))
        } else if args.get_flag("bbox") {
            Ok(Box::new(BoundingBoxCommand::new(args, catalog)?))
        } else {
            // Default to distance command
            Ok(Box::new(DistanceCommand::new(args, catalog)?))
        }
    }
}
