//! Package scaffold command handler.

use crate::cli::args::ScaffoldArgs;
use crate::error::DocsmithError;
use crate::scaffold;

/// Execute `scaffold`.
///
/// # Errors
///
/// Returns the first I/O error; there is no per-file isolation here.
pub fn run(args: &ScaffoldArgs) -> Result<(), DocsmithError> {
    let written = scaffold::generate(&args.base)?;
    eprintln!(
        "Package scaffold generated at {} ({written} files)",
        args.base.display()
    );
    Ok(())
}
