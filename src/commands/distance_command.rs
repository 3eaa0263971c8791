//! Distance command
//!
//! Computes the distance between two points with one formula or all of them.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::resolve_point;
use crate::coordinate::{check_coordinates, GeoPoint};
use crate::distance::{compare_all, FormulaFactory};
use crate::errors::{CoordinateIssue, GeoError, GeoResult};
use crate::places::PlaceCatalog;

/// Formula name selecting every formula
const ALL_FORMULAS: &str = "all";

/// Command for computing the distance between two points
pub struct DistanceCommand {
    /// Start point, if given
    from: Option<GeoPoint>,
    /// End point, if given
    to: Option<GeoPoint>,
    /// Formula name or "all"
    formula: String,
}

impl DistanceCommand {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `catalog` - Places used to resolve point names
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, catalog: &PlaceCatalog) -> GeoResult<Self> {
        let from = resolve_point(args, "from", catalog)?;
        let to = resolve_point(args, "to", catalog)?;

        let formula = args.get_one::<String>("formula")
            .cloned()
            .unwrap_or_else(|| "haversine".to_string());
        info!("Distance from {:?} to {:?} using {}", from, to, formula);

        Ok(DistanceCommand { from, to, formula })
    }
}

impl Command for DistanceCommand {
    fn render(&self) -> GeoResult<String> {
        check_coordinates(self.from.as_ref(), self.to.as_ref())?;
        let (from, to) = match (self.from, self.to) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(GeoError::InvalidCoordinate(CoordinateIssue::MissingPoint)),
        };

        if self.formula.eq_ignore_ascii_case(ALL_FORMULAS) {
            let lines: Vec<String> = compare_all(&from, &to)?
                .into_iter()
                .map(|(name, km)| format!("{}: {}", name, km))
                .collect();
            return Ok(lines.join("\n"));
        }

        let formula = FormulaFactory::create(&self.formula)?;
        let km = formula.distance(&from, &to)?;
        debug!("{} distance: {} km", formula.name(), km);
        Ok(km.to_string())
    }
}
