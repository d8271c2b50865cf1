//! Package scaffold generation.
//!
//! Writes a fixed directory layout and a fixed set of template files under
//! a target base path. Directories are created idempotently and existing
//! files are overwritten without confirmation, so re-running against the
//! same target converges on the template content.
//!
//! Unlike the converter there is no per-file error isolation: the first
//! I/O failure aborts the run and surfaces to the caller.

pub mod templates;

use std::fs;
use std::io;
use std::path::Path;

use templates::{SCAFFOLD_DIRS, SCAFFOLD_FILES};

/// Create the scaffold directory layout and write all template files
/// under `base`. Returns the number of files written.
///
/// # Errors
///
/// Returns the first I/O error encountered; partial output is left in
/// place.
pub fn generate(base: &Path) -> io::Result<usize> {
    for dir in SCAFFOLD_DIRS {
        fs::create_dir_all(base.join(dir))?;
    }

    for (path, content) in SCAFFOLD_FILES {
        fs::write(base.join(path), content)?;
    }

    Ok(SCAFFOLD_FILES.len())
}
