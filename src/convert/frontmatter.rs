//! YAML frontmatter generation for converted Markdown pages.

/// Generate the YAML frontmatter block for a page.
///
/// Produces a frontmatter block with a single `title` field, delimited by
/// `---` marker lines.
#[must_use]
pub fn generate_frontmatter(title: &str) -> String {
    let mut lines = Vec::new();
    lines.push("---".to_string());
    lines.push(format!("title: {}", quote_yaml_string(title)));
    lines.push("---".to_string());
    lines.join("\n")
}

/// Quote a YAML string value if it contains special characters.
fn quote_yaml_string(s: &str) -> String {
    if s.contains(':') || s.contains('#') || s.contains('"') || s.starts_with(' ') {
        let escaped = s.replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
