//! Navigation cleanup command handler.

use crate::cli::args::DedupeNavArgs;
use crate::error::{DocsmithError, NavError};
use crate::nav;

/// Execute `dedupe-nav`.
///
/// Each file is cleaned independently; a failure on one file is reported
/// and the remaining files are still processed. The command fails if any
/// file could not be processed.
///
/// # Errors
///
/// Returns `NavError::Batch` when one or more files failed.
pub fn run(args: &DedupeNavArgs) -> Result<(), DocsmithError> {
    let mut failed = 0usize;

    for path in &args.files {
        match nav::dedupe_file(path) {
            Ok(report) => {
                for group in &report.groups {
                    eprintln!(
                        "  {}: removed {} duplicate(s) ({} -> {})",
                        group.group, group.removed, group.before, group.after
                    );
                }
                if report.total_removed > 0 {
                    eprintln!(
                        "{}: cleaned ({} duplicate(s) removed)",
                        path.display(),
                        report.total_removed
                    );
                } else {
                    eprintln!("{}: no duplicates found", path.display());
                }
            }
            Err(e) => {
                eprintln!("ERROR: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(NavError::Batch {
            failed,
            total: args.files.len(),
        }
        .into());
    }
    Ok(())
}
