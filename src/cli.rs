//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Default log file written by the binary
pub const DEFAULT_LOG_FILE: &str = "geodistance.log";

/// Build the clap command for the `geodistance` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geodistance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Great-circle distances and radius bounding boxes")
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Start point as 'lat,lon' or a place name")
                .value_name("POINT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("End point as 'lat,lon' or a place name")
                .value_name("POINT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("formula")
                .long("formula")
                .help("Distance formula (haversine, cosines, equirectangular, all)")
                .value_name("NAME")
                .default_value("haversine")
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .short('b')
                .long("bbox")
                .help("Print the bounding box of --radius km around --from")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .help("Bounding box radius in kilometers")
                .value_name("KM")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("places")
                .long("places")
                .help("TOML catalog of named places to use instead of the built-in one")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("list-places")
                .long("list-places")
                .help("List the named places in the catalog")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
