//! Place listing command

use crate::commands::command_traits::Command;
use crate::errors::GeoResult;
use crate::places::PlaceCatalog;

/// Command listing the catalog as `name: lat,lon` lines
pub struct ListPlacesCommand<'a> {
    catalog: &'a PlaceCatalog,
}

impl<'a> ListPlacesCommand<'a> {
    /// Create a new listing command
    pub fn new(catalog: &'a PlaceCatalog) -> Self {
        ListPlacesCommand { catalog }
    }
}

impl<'a> Command for ListPlacesCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        let lines: Vec<String> = self.catalog.names()
            .into_iter()
            .filter_map(|name| self.catalog.get(name).map(|point| format!("{}: {}", name, point)))
            .collect();
        Ok(lines.join("\n"))
    }
}
