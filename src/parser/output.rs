//! Serialize a heading tree back to markdown.
//!
//! Heading markers are rebuilt from each node's depth in the tree rather
//! than copied from the source line, so a heading is always written at its
//! nesting depth. Every section is followed by exactly one blank line; the
//! document as a whole has its trailing newlines stripped.

use super::document::{Document, Heading};

/// Flatten a document into markdown text.
///
/// The result carries no trailing newline; see [`crate::finalize_output`].
pub fn flatten(doc: &Document) -> String {
    let mut out = String::new();

    if !doc.preamble.trim().is_empty() {
        out.push_str(doc.preamble.trim_end_matches('\n'));
        out.push_str("\n\n");
    }

    for heading in &doc.headings {
        write_heading(&mut out, heading, 1);
    }

    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out
}

fn write_heading(out: &mut String, heading: &Heading, depth: usize) {
    out.push_str(&"#".repeat(depth));
    out.push(' ');
    out.push_str(&heading.text);
    out.push('\n');

    if heading.body.trim().is_empty() {
        out.push('\n');
    } else {
        out.push_str(heading.body.trim_end_matches('\n'));
        out.push_str("\n\n");
    }

    for child in &heading.children {
        write_heading(out, child, depth + 1);
    }
}
