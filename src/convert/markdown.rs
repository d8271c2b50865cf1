//! HTML-to-Markdown rendering.
//!
//! Walks the parsed node tree of a content container and emits Markdown
//! with ATX-style headings. Nodes marked as excluded (navigation chrome,
//! the title heading) are left out of the output.

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Node, Selector};

/// Renders a content subtree to Markdown text.
pub struct MarkdownRenderer {
    excluded: HashSet<NodeId>,
}

impl MarkdownRenderer {
    /// Create a renderer that skips the given nodes.
    #[must_use]
    pub fn new(excluded: HashSet<NodeId>) -> Self {
        Self { excluded }
    }

    /// Render the children of `container` as Markdown blocks.
    ///
    /// Blocks are separated by blank lines; the result carries no trailing
    /// newline.
    #[must_use]
    pub fn render(&self, container: ElementRef<'_>) -> String {
        let mut blocks = Vec::new();
        self.render_blocks(*container, &mut blocks);
        blocks.join("\n\n")
    }

    /// Walk `parent`'s children, accumulating inline runs into paragraph
    /// blocks and dispatching block-level elements.
    fn render_blocks(&self, parent: NodeRef<'_, Node>, blocks: &mut Vec<String>) {
        let mut inline = String::new();

        for child in parent.children() {
            if self.excluded.contains(&child.id()) {
                continue;
            }

            match child.value() {
                Node::Text(text) => inline.push_str(&collapse_whitespace(&text)),
                Node::Element(element) => {
                    let name = element.name();
                    if is_block(name) {
                        flush_inline(&mut inline, blocks);
                        if let Some(element_ref) = ElementRef::wrap(child) {
                            self.render_block_element(element_ref, name, blocks);
                        }
                    } else {
                        inline.push_str(&self.render_inline_node(child));
                    }
                }
                _ => {}
            }
        }

        flush_inline(&mut inline, blocks);
    }

    fn render_block_element(&self, element: ElementRef<'_>, name: &str, blocks: &mut Vec<String>) {
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<usize>().unwrap_or(1);
                let text = tidy_inline(&self.render_inline_children(element));
                if !text.is_empty() {
                    blocks.push(format!("{} {}", "#".repeat(level), text));
                }
            }
            "p" => {
                let text = tidy_inline(&self.render_inline_children(element));
                if !text.is_empty() {
                    blocks.push(text);
                }
            }
            "ul" => {
                let list = self.render_list(element, false, 0);
                if !list.is_empty() {
                    blocks.push(list);
                }
            }
            "ol" => {
                let list = self.render_list(element, true, 0);
                if !list.is_empty() {
                    blocks.push(list);
                }
            }
            "pre" => {
                let code = element.text().collect::<String>();
                let code = code.trim_matches('\n');
                blocks.push(format!("```\n{code}\n```"));
            }
            "blockquote" => {
                let mut inner = Vec::new();
                self.render_blocks(*element, &mut inner);
                let quoted = inner
                    .join("\n\n")
                    .lines()
                    .map(|line| {
                        if line.is_empty() {
                            ">".to_string()
                        } else {
                            format!("> {line}")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                if !quoted.is_empty() {
                    blocks.push(quoted);
                }
            }
            "hr" => blocks.push("---".to_string()),
            "table" => {
                let table = self.render_table(element);
                if !table.is_empty() {
                    blocks.push(table);
                }
            }
            // Non-content subtrees produce no output.
            "head" | "script" | "style" | "template" | "noscript" => {}
            // Everything else (div, section, article, ...) is transparent.
            _ => self.render_blocks(*element, blocks),
        }
    }

    /// Render a single inline node (text, span-level element) to Markdown.
    fn render_inline_node(&self, node: NodeRef<'_, Node>) -> String {
        if self.excluded.contains(&node.id()) {
            return String::new();
        }

        match node.value() {
            Node::Text(text) => collapse_whitespace(&text),
            Node::Element(element) => {
                let Some(element_ref) = ElementRef::wrap(node) else {
                    return String::new();
                };
                match element.name() {
                    "strong" | "b" => wrap_nonempty(&self.render_inline_children(element_ref), "**"),
                    "em" | "i" => wrap_nonempty(&self.render_inline_children(element_ref), "*"),
                    "code" => {
                        let code = element_ref.text().collect::<String>();
                        let code = code.trim();
                        if code.is_empty() {
                            String::new()
                        } else {
                            format!("`{code}`")
                        }
                    }
                    "a" => {
                        let text = self.render_inline_children(element_ref);
                        match element.attr("href") {
                            Some(href) if !href.is_empty() => {
                                format!("[{}]({href})", text.trim())
                            }
                            _ => text,
                        }
                    }
                    "img" => {
                        let alt = element.attr("alt").unwrap_or_default();
                        let src = element.attr("src").unwrap_or_default();
                        format!("![{alt}]({src})")
                    }
                    "br" => "\n".to_string(),
                    _ => self.render_inline_children(element_ref),
                }
            }
            _ => String::new(),
        }
    }

    fn render_inline_children(&self, element: ElementRef<'_>) -> String {
        element
            .children()
            .map(|child| self.render_inline_node(child))
            .collect()
    }

    /// Render a `ul`/`ol` element, indenting nested lists by four spaces
    /// per level.
    fn render_list(&self, element: ElementRef<'_>, ordered: bool, depth: usize) -> String {
        let indent = "    ".repeat(depth);
        let mut lines = Vec::new();
        let mut index = 0usize;

        for child in element.children() {
            if self.excluded.contains(&child.id()) {
                continue;
            }
            let Some(item) = ElementRef::wrap(child) else {
                continue;
            };
            if item.value().name() != "li" {
                continue;
            }
            index += 1;

            let mut inline = String::new();
            let mut nested = Vec::new();
            for part in item.children() {
                if self.excluded.contains(&part.id()) {
                    continue;
                }
                match part.value() {
                    Node::Text(text) => inline.push_str(&collapse_whitespace(text)),
                    Node::Element(part_element) => match part_element.name() {
                        "ul" | "ol" => {
                            if let Some(list) = ElementRef::wrap(part) {
                                let rendered = self.render_list(
                                    list,
                                    part_element.name() == "ol",
                                    depth + 1,
                                );
                                if !rendered.is_empty() {
                                    nested.push(rendered);
                                }
                            }
                        }
                        "p" => {
                            if let Some(paragraph) = ElementRef::wrap(part) {
                                inline.push(' ');
                                inline.push_str(&self.render_inline_children(paragraph));
                            }
                        }
                        _ => inline.push_str(&self.render_inline_node(part)),
                    },
                    _ => {}
                }
            }

            let marker = if ordered {
                format!("{index}.")
            } else {
                "-".to_string()
            };
            lines.push(format!("{indent}{marker} {}", tidy_inline(&inline)));
            lines.extend(nested);
        }

        lines.join("\n")
    }

    /// Render a table as a Markdown pipe table, treating the first row as
    /// the header.
    fn render_table(&self, element: ElementRef<'_>) -> String {
        let row_selector = Selector::parse("tr").expect("tr selector is valid");
        let mut rows: Vec<Vec<String>> = Vec::new();

        for row in element.select(&row_selector) {
            if self.excluded.contains(&row.id()) {
                continue;
            }
            let mut cells = Vec::new();
            for cell in row.children() {
                let Some(cell_ref) = ElementRef::wrap(cell) else {
                    continue;
                };
                if matches!(cell_ref.value().name(), "td" | "th") {
                    cells.push(tidy_inline(&self.render_inline_children(cell_ref)));
                }
            }
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        if rows.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        lines.push(pipe_row(&rows[0]));
        lines.push(pipe_row(&vec!["---".to_string(); rows[0].len()]));
        for row in &rows[1..] {
            lines.push(pipe_row(row));
        }
        lines.join("\n")
    }
}

/// Render a table row as a Markdown pipe row: `| a | b |`.
fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Flush an accumulated inline run as a paragraph block.
fn flush_inline(inline: &mut String, blocks: &mut Vec<String>) {
    let text = tidy_inline(inline);
    if !text.is_empty() {
        blocks.push(text);
    }
    inline.clear();
}

/// Collapse every whitespace run (including newlines) to a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// Normalize an inline run: collapse spaces per line, trim the edges.
/// Newlines from `<br>` are preserved.
fn tidy_inline(text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    lines.join("\n").trim().to_string()
}

fn wrap_nonempty(text: &str, marker: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{marker}{trimmed}{marker}")
    }
}

/// Whether an element starts a new block in the output.
fn is_block(name: &str) -> bool {
    matches!(
        name,
        "h1" | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "p"
            | "ul"
            | "ol"
            | "pre"
            | "blockquote"
            | "hr"
            | "table"
            | "div"
            | "section"
            | "article"
            | "main"
            | "aside"
            | "header"
            | "footer"
            | "nav"
            | "figure"
            | "figcaption"
            | "details"
            | "summary"
            | "dl"
            | "dt"
            | "dd"
            | "form"
            | "head"
            | "script"
            | "style"
            | "template"
            | "noscript"
    )
}
