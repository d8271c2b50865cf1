//! HTML conversion command handler.

use tracing::debug;

use crate::cli::args::ConvertArgs;
use crate::convert::{convert_file, discover_html_files};
use crate::error::DocsmithError;

/// Execute `convert`.
///
/// Discovers HTML files under the source directory and converts each one
/// to Markdown with frontmatter in the mirrored output tree. A failure on
/// one file is reported and does not stop the batch; the run always ends
/// with a summary of how many files converted.
///
/// # Errors
///
/// Returns an error if discovery itself fails (missing source directory,
/// bad pattern). Per-file failures are reported but not returned.
pub fn run(args: &ConvertArgs) -> Result<(), DocsmithError> {
    eprintln!("Converting HTML documentation...");
    eprintln!("  source: {}", args.source.display());
    eprintln!("  output: {}", args.output.display());

    let files = discover_html_files(&args.source, &args.output)?;
    eprintln!("Found {} HTML files to convert", files.len());

    let mut converted = 0usize;
    for file in &files {
        match convert_file(file, &args.source, &args.output) {
            Ok(out_path) => {
                converted += 1;
                debug!(file = %file.display(), "converted");
                eprintln!("Converted: {} -> {}", file.display(), out_path.display());
            }
            Err(e) => {
                eprintln!("WARNING: failed to convert {}: {e}", file.display());
            }
        }
    }

    eprintln!(
        "Conversion complete! Converted {converted}/{} files",
        files.len()
    );
    Ok(())
}
