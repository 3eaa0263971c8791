//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::errors::GeoResult;
use crate::places::PlaceCatalog;

/// Represents an executable command in the application
pub trait Command {
    /// Produce the command's output text
    fn render(&self) -> GeoResult<String>;

    /// Execute the command, printing its output to stdout
    fn execute(&self) -> GeoResult<()> {
        let output = self.render()?;
        println!("{}", output);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `catalog` - Places used to resolve point names
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, catalog: &'a PlaceCatalog) -> GeoResult<Box<dyn Command + 'a>>;
}
