//! HTML documentation conversion.
//!
//! Turns a tree of HTML pages into a mirrored tree of Markdown files with
//! frontmatter. Discovery, per-file transformation, and output path
//! mirroring live here; the CLI layer drives the batch and owns the
//! per-file error reporting.

pub mod extract;
pub mod frontmatter;
pub mod markdown;

use std::fs;
use std::path::{Component, Path, PathBuf};

use scraper::Html;

use crate::error::ConvertError;
use extract::Extraction;
use frontmatter::generate_frontmatter;
use markdown::MarkdownRenderer;

/// Extension for converted Markdown-with-frontmatter files.
pub const MDX_EXTENSION: &str = "mdx";

/// A converted document ready to be written out.
pub struct ConvertedDocument {
    /// Title derived from the page's first heading.
    pub title: String,
    /// Full file content: frontmatter block followed by the Markdown body.
    pub content: String,
}

/// Convert one HTML document to Markdown with frontmatter.
#[must_use]
pub fn convert_html(html: &str) -> ConvertedDocument {
    let doc = Html::parse_document(html);
    let Extraction {
        container,
        title,
        excluded,
    } = extract::extract(&doc);

    let body = MarkdownRenderer::new(excluded).render(container);
    let frontmatter = generate_frontmatter(&title);

    let content = if body.is_empty() {
        format!("{frontmatter}\n")
    } else {
        format!("{frontmatter}\n\n{body}\n")
    };

    ConvertedDocument { title, content }
}

/// Discover all HTML files under `source`, skipping anything already inside
/// `output` so a re-run does not pick up its own results.
///
/// Returned paths are sorted for deterministic processing order.
///
/// # Errors
///
/// Returns an error if `source` is not a directory, the discovery pattern
/// cannot be built, or the walk fails.
pub fn discover_html_files(source: &Path, output: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !source.is_dir() {
        return Err(ConvertError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let pattern = source.join("**").join("*.html");
    let output = normalize(output);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if !normalize(&path).starts_with(&output) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Map a source file to its mirrored output path, with the extension
/// replaced by [`MDX_EXTENSION`].
#[must_use]
pub fn output_path_for(file: &Path, source: &Path, output: &Path) -> PathBuf {
    let file = normalize(file);
    let relative = file.strip_prefix(normalize(source)).map_or_else(
        |_| file.file_name().map_or_else(PathBuf::new, PathBuf::from),
        Path::to_path_buf,
    );
    output.join(relative).with_extension(MDX_EXTENSION)
}

/// Convert a single file and write the result to its mirrored output path,
/// creating parent directories as needed. Returns the output path.
///
/// # Errors
///
/// Returns an error if the source cannot be read as UTF-8 or the output
/// cannot be written.
pub fn convert_file(file: &Path, source: &Path, output: &Path) -> Result<PathBuf, ConvertError> {
    let html = fs::read_to_string(file).map_err(|e| ConvertError::Read {
        path: file.to_path_buf(),
        source: e,
    })?;

    let document = convert_html(&html);
    let out_path = output_path_for(file, source, output);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConvertError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(&out_path, document.content).map_err(|e| ConvertError::Write {
        path: out_path.clone(),
        source: e,
    })?;

    Ok(out_path)
}

/// Strip `.` components so paths built from CLI defaults compare cleanly.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_spec_example() {
        let doc =
            convert_html(r#"<div class="col-content"><h1>Intro</h1><p>Hello</p></div>"#);
        assert_eq!(doc.title, "Intro");
        assert_eq!(doc.content, "---\ntitle: Intro\n---\n\nHello\n");
    }

    #[test]
    fn test_convert_without_container_uses_body() {
        let doc = convert_html("<html><body><h1>Plain</h1><p>Text</p></body></html>");
        assert_eq!(doc.title, "Plain");
        assert!(doc.content.contains("Text"));
        assert!(!doc.content.contains("# Plain"));
    }

    #[test]
    fn test_convert_untitled_document() {
        let doc = convert_html("<html><body><p>Just a paragraph</p></body></html>");
        assert_eq!(doc.title, "Untitled");
        assert!(doc.content.starts_with("---\ntitle: Untitled\n---\n"));
    }

    #[test]
    fn test_convert_strips_breadcrumb() {
        let doc = convert_html(
            r#"<div class="col-content">
                <ul class="tsd-breadcrumb" aria-label="Breadcrumb"><li><a href="/">Home</a></li></ul>
                <h1>Page</h1>
                <p>Content</p>
            </div>"#,
        );
        assert!(!doc.content.contains("Home"));
        assert!(doc.content.contains("Content"));
    }

    #[test]
    fn test_convert_keeps_later_headings() {
        let doc = convert_html(
            r#"<div class="col-content"><h1>Title</h1><h2>Section</h2><p>Body</p></div>"#,
        );
        assert_eq!(doc.title, "Title");
        assert!(doc.content.contains("## Section"));
        assert!(!doc.content.contains("# Title"));
    }

    #[test]
    fn test_empty_body_still_has_frontmatter() {
        let doc = convert_html(r#"<div class="col-content"><h1>Only Title</h1></div>"#);
        assert_eq!(doc.content, "---\ntitle: Only Title\n---\n");
    }

    #[test]
    fn test_output_path_mirrors_structure() {
        let out = output_path_for(
            Path::new("docs/api/classes/login.html"),
            Path::new("docs"),
            Path::new("output"),
        );
        assert_eq!(out, PathBuf::from("output/api/classes/login.mdx"));
    }

    #[test]
    fn test_output_path_top_level_file() {
        let out = output_path_for(Path::new("./index.html"), Path::new("."), Path::new("out"));
        assert_eq!(out, PathBuf::from("out/index.mdx"));
    }

    #[test]
    fn test_output_path_foreign_file_falls_back_to_name() {
        let out = output_path_for(
            Path::new("/elsewhere/page.html"),
            Path::new("docs"),
            Path::new("output"),
        );
        assert_eq!(out, PathBuf::from("output/page.mdx"));
    }
}
