//! Navigation file cleanup.
//!
//! Documentation navigation files carry a `pages` array of groups, each
//! with its own `pages` list. Regenerating docs can append entries a group
//! already has; this module removes those duplicates in place while
//! preserving first-occurrence order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::NavError;

/// Duplicates removed from a single navigation group.
#[derive(Debug)]
pub struct GroupReport {
    /// Group label from the navigation file.
    pub group: String,
    /// Number of entries removed.
    pub removed: usize,
    /// Entry count before cleaning.
    pub before: usize,
    /// Entry count after cleaning.
    pub after: usize,
}

/// Outcome of cleaning one navigation file.
#[derive(Debug, Default)]
pub struct DedupeReport {
    /// Per-group removals; groups with no duplicates are omitted.
    pub groups: Vec<GroupReport>,
    /// Total entries removed across all groups.
    pub total_removed: usize,
}

/// Remove duplicate page entries from every group, preserving order.
///
/// Entries are compared by their JSON value, so string entries and nested
/// object entries both deduplicate correctly. Documents without a `pages`
/// array are left untouched.
pub fn dedupe_value(nav: &mut Value) -> DedupeReport {
    let mut report = DedupeReport::default();

    let Some(groups) = nav.get_mut("pages").and_then(Value::as_array_mut) else {
        return report;
    };

    for group in groups {
        let label = group
            .get("group")
            .and_then(Value::as_str)
            .unwrap_or("(unnamed)")
            .to_string();

        let Some(entries) = group.get_mut("pages").and_then(Value::as_array_mut) else {
            continue;
        };

        let before = entries.len();
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.to_string()));
        let after = entries.len();

        if after < before {
            report.total_removed += before - after;
            report.groups.push(GroupReport {
                group: label,
                removed: before - after,
                before,
                after,
            });
        }
    }

    report
}

/// Clean one navigation file in place.
///
/// The file is always rewritten, pretty-printed with two-space indentation
/// and a trailing newline, even when no duplicates were found.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or written back.
pub fn dedupe_file(path: &Path) -> Result<DedupeReport, NavError> {
    let raw = fs::read_to_string(path).map_err(|e| NavError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut nav: Value = serde_json::from_str(&raw).map_err(|e| NavError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let report = dedupe_value(&mut nav);

    let mut cleaned = serde_json::to_string_pretty(&nav).map_err(|e| NavError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    cleaned.push('\n');

    fs::write(path, cleaned).map_err(|e| NavError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(report)
}
