use std::process;
use log::{error, info, Level};

use planekit::utils::logger::Logger;
use planekit::commands::{build_cli, CommandFactory, PlanekitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let level = if verbose { Level::Debug } else { Level::Info };

    // Command summaries always go to planekit.log
    let logger = match Logger::new("planekit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .format_target(false)
            .format_timestamp(None)
            .parse_default_env()
            .init();
    }

    let factory = PlanekitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            info!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
