//! Command pattern interfaces
//!
//! Each CLI operation is one `Command`; the factory picks it from the
//! parsed arguments.

use crate::utils::logger::Logger;
use crate::plane::PlaneResult;

/// Executable CLI operation
pub trait Command {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Run the operation, writing a summary to the command logger
    fn execute(&self) -> PlaneResult<()>;
}

/// Selects and builds the command for a set of CLI arguments
pub trait CommandFactory<'a> {
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger receiving the command summary
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> PlaneResult<Box<dyn Command + 'a>>;
}
