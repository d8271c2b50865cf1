//! Content extraction from parsed HTML documents.
//!
//! Locates the primary content container, marks navigation chrome and the
//! title heading for exclusion, and derives the page title.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

/// Title used when a page has no top-level heading.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Selector for the primary content region.
const CONTENT_SELECTOR: &str = "div.col-content";

/// Selectors for navigation chrome stripped from every page.
const STRIP_SELECTORS: &[&str] = &[r#"ul.tsd-breadcrumb[aria-label="Breadcrumb"]"#];

/// The content region of a page, with the derived title and the set of
/// nodes the renderer must leave out of the body.
pub struct Extraction<'a> {
    /// Element whose children form the page body.
    pub container: ElementRef<'a>,
    /// Whitespace-normalized title text.
    pub title: String,
    /// Nodes excluded from rendering: stripped chrome and the title heading.
    pub excluded: HashSet<NodeId>,
}

/// Extract the content region and title from a parsed document.
///
/// The container is the first `div.col-content`; documents without one fall
/// back to `<body>`, then to the document root. The first `h1` inside the
/// container supplies the title and is excluded from the body so it is not
/// emitted twice.
#[must_use]
pub fn extract(doc: &Html) -> Extraction<'_> {
    let container = content_container(doc);

    let mut excluded = HashSet::new();
    for source in STRIP_SELECTORS {
        let selector = Selector::parse(source).expect("strip selector is valid");
        for element in container.select(&selector) {
            excluded.insert(element.id());
        }
    }

    let h1 = Selector::parse("h1").expect("h1 selector is valid");
    let title = match container.select(&h1).next() {
        Some(heading) => {
            excluded.insert(heading.id());
            normalize_text(&heading.text().collect::<String>())
        }
        None => DEFAULT_TITLE.to_string(),
    };

    Extraction {
        container,
        title,
        excluded,
    }
}

/// Select the working container for a document.
fn content_container(doc: &Html) -> ElementRef<'_> {
    let content = Selector::parse(CONTENT_SELECTOR).expect("content selector is valid");
    if let Some(container) = doc.select(&content).next() {
        return container;
    }

    let body = Selector::parse("body").expect("body selector is valid");
    doc.select(&body).next().unwrap_or_else(|| doc.root_element())
}

/// Collapse all runs of whitespace to single spaces and trim the edges.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
