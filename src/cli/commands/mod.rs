//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod convert;
pub mod dedupe_nav;
pub mod scaffold;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::DocsmithError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), DocsmithError> {
    match cli.command {
        Commands::Convert(args) => convert::run(&args),
        Commands::Scaffold(args) => scaffold::run(&args),
        Commands::DedupeNav(args) => dedupe_nav::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
