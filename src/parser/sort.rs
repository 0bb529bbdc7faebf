//! Alphabetical ordering of the heading tree.

use super::document::{Document, Heading};

/// Sort siblings by heading text, case-insensitively, at every depth.
///
/// Children are sorted before their parents are reordered. The sort is
/// stable, so headings that compare equal keep their document order. Only the
/// heading text is compared; level and body never affect the order.
pub fn sort_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut sorted: Vec<Heading> = headings
        .into_iter()
        .map(|mut heading| {
            heading.children = sort_headings(std::mem::take(&mut heading.children));
            heading
        })
        .collect();

    sorted.sort_by_cached_key(|heading| heading.text.to_lowercase());
    sorted
}

/// Sort every heading level of a document.
pub fn sort_document(mut doc: Document) -> Document {
    doc.headings = sort_headings(std::mem::take(&mut doc.headings));
    doc
}
