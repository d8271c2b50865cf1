//! `docsmith` - Documentation conversion and package scaffolding toolkit
//!
//! This library provides the building blocks behind the `docsmith` CLI:
//! HTML-to-Markdown conversion with frontmatter extraction, package
//! scaffolding from fixed templates, and navigation file cleanup.

pub mod cli;
pub mod convert;
pub mod error;
pub mod nav;
pub mod observability;
pub mod scaffold;
