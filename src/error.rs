//! Error types for `docsmith`
//!
//! This module provides the error hierarchy shared by all subcommands,
//! along with the process exit codes they map to.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docsmith` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Converter batch error (bad source directory, invalid pattern)
    pub const CONVERT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Navigation cleanup error (unreadable or malformed navigation file)
    pub const NAV_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `docsmith` operations.
///
/// This enum aggregates all domain-specific errors and provides
/// a unified interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum DocsmithError {
    /// HTML-to-Markdown conversion error
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Navigation file cleanup error
    #[error(transparent)]
    Nav(#[from] NavError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsmithError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Convert(_) => ExitCode::CONVERT_ERROR,
            Self::Nav(_) | Self::Json(_) => ExitCode::NAV_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Converter Errors
// ============================================================================

/// Errors raised while converting HTML documentation to Markdown.
///
/// Per-file variants (`Read`, `Write`, `CreateDir`) are caught and reported
/// by the batch driver without aborting the run; the remaining variants
/// abort the batch before any file is processed.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the source HTML file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Path to the directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source directory does not exist or is not a directory
    #[error("source directory not found: {path}")]
    SourceNotFound {
        /// Path given as the source root
        path: PathBuf,
    },

    /// Discovery glob pattern was invalid
    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Directory traversal failed mid-walk
    #[error("traversal error: {0}")]
    Walk(#[from] glob::GlobError),
}

// ============================================================================
// Navigation Cleanup Errors
// ============================================================================

/// Errors raised while deduplicating navigation files.
#[derive(Debug, Error)]
pub enum NavError {
    /// Navigation file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the navigation file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Navigation file is not valid JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the navigation file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Navigation file could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path to the navigation file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// One or more navigation files failed to process
    #[error("{failed} of {total} navigation file(s) could not be processed")]
    Batch {
        /// Number of files that failed
        failed: usize,
        /// Number of files attempted
        total: usize,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `docsmith` operations.
pub type Result<T> = std::result::Result<T, DocsmithError>;

// ============================================================================
// Tests
// ============================================================================
