//! Build a heading tree from raw markdown text.
//!
//! Lines are classified one at a time. Headings open a new node and close
//! every open node at the same or a deeper level; everything else lands in
//! the body of the innermost open heading (or the preamble before the first
//! heading). Lines inside fenced code blocks are never headings.

use indexmap::IndexMap;
use serde::Deserialize;

use super::document::{Document, Heading};
use super::utils::{FenceTracker, is_blank, parse_heading_line};

/// What to do with sibling headings that share the same text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep every heading as its own node.
    #[default]
    Keep,
    /// Collapse same-text siblings into one entry: the last one wins and
    /// takes the position of the first.
    Merge,
}

/// Parse markdown into a heading tree, keeping duplicate siblings.
pub fn build(text: &str) -> Document {
    build_with(text, DuplicatePolicy::Keep)
}

/// Parse markdown into a heading tree with an explicit duplicate policy.
pub fn build_with(text: &str, duplicates: DuplicatePolicy) -> Document {
    let mut doc = Document::new();
    let mut stack: Vec<Heading> = Vec::new();
    let mut fences = FenceTracker::new();

    for line in text.split('\n') {
        fences.observe(line);

        if fences.inside() || is_blank(line) {
            push_body_line(&mut doc, &mut stack, line);
            continue;
        }

        let Some(heading) = parse_heading_line(line) else {
            push_body_line(&mut doc, &mut stack, line);
            continue;
        };

        while stack.last().is_some_and(|open| open.level >= heading.level) {
            close_top(&mut doc, &mut stack);
        }
        stack.push(Heading::new(heading.level, heading.text, line));
    }

    while !stack.is_empty() {
        close_top(&mut doc, &mut stack);
    }

    if fences.inside() {
        log::warn!("unbalanced code fence: content after the last fence was treated as code");
    }

    if duplicates == DuplicatePolicy::Merge {
        doc.headings = merge_duplicate_siblings(doc.headings);
    }

    log::debug!(
        "built heading tree: {} headings, {} top-level, preamble {} bytes",
        doc.heading_count(),
        doc.headings.len(),
        doc.preamble.len()
    );
    doc
}

fn push_body_line(doc: &mut Document, stack: &mut [Heading], line: &str) {
    match stack.last_mut() {
        Some(open) => open.push_line(line),
        None => doc.push_preamble_line(line),
    }
}

/// Pop the innermost open heading and attach it to its parent.
///
/// Siblings are closed in the order they were opened, so attaching on close
/// preserves document order.
fn close_top(doc: &mut Document, stack: &mut Vec<Heading>) {
    let Some(closed) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(closed),
        None => doc.headings.push(closed),
    }
}

/// Collapse siblings with identical text, at every depth.
///
/// A later heading replaces an earlier one with the same text, including its
/// whole subtree, but keeps the earlier one's position.
pub fn merge_duplicate_siblings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut by_text: IndexMap<String, Heading> = IndexMap::with_capacity(headings.len());
    for heading in headings {
        if let Some(dropped) = by_text.insert(heading.text.clone(), heading) {
            log::warn!(
                "duplicate heading {:?} replaced an earlier sibling ({} headings dropped)",
                dropped.text,
                dropped.count()
            );
        }
    }

    by_text
        .into_values()
        .map(|mut heading| {
            heading.children = merge_duplicate_siblings(std::mem::take(&mut heading.children));
            heading
        })
        .collect()
}
