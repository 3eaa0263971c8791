use std::process;
use log::{error, LevelFilter};

use geodistance::cli::build_cli;
use geodistance::commands::{CommandFactory, GeodistanceCommandFactory};
use geodistance::places::PlaceCatalog;
use geodistance::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or(geodistance::cli::DEFAULT_LOG_FILE);

    if let Err(e) = Logger::init_global_logger(log_file, level, verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let loaded_catalog;
    let catalog = match matches.get_one::<String>("places") {
        Some(path) => match PlaceCatalog::from_file(path) {
            Ok(c) => {
                loaded_catalog = c;
                &loaded_catalog
            },
            Err(e) => {
                error!("Failed to load places from {}: {}", path, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => PlaceCatalog::builtin(),
    };

    let factory = GeodistanceCommandFactory::new();

    let command_result = factory.create_command(&matches, catalog);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
