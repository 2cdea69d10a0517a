//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod cli;
pub mod plane_args;
pub mod extract_command;
pub mod axes_command;
pub mod tile_command;
pub mod tiles_command;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use extract_command::ExtractCommand;
pub use axes_command::AxesCommand;
pub use tile_command::TileCommand;
pub use tiles_command::TilesCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::plane::{PlaneError, PlaneResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct PlanekitCommandFactory;

impl PlanekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PlanekitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for PlanekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PlaneResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_one::<String>("axes").is_some() {
            Ok(Box::new(AxesCommand::new(args, logger)?))
        } else if args.get_flag("tiles") {
            Ok(Box::new(TilesCommand::new(args, logger)?))
        } else if args.get_flag("tile") {
            Ok(Box::new(TileCommand::new(args, logger)?))
        } else {
            Err(PlaneError::GenericError(
                "No command given. Use --extract, --axes, --tile or --tiles".to_string(),
            ))
        }
    }
}
