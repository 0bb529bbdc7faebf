//! Markdown heading tree parsing, sorting and serialization.
//!
//! The pipeline is [`build`] → [`sort_document`] → [`flatten`], with
//! [`sort_sections`] as an optional pass over the flattened text. Only
//! heading lines and code fences are interpreted; every other line is opaque
//! text carried along with its heading.

pub mod builder;
mod document;
pub mod output;
pub mod sections;
pub mod sort;
pub mod utils;

pub use builder::{DuplicatePolicy, build, build_with};
pub use document::{Document, Heading};
pub use output::flatten;
pub use sections::sort_sections;
pub use sort::{sort_document, sort_headings};

use std::path::Path;

/// Parse a markdown file into a heading tree.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not UTF-8 text.
pub fn parse_file(path: &Path) -> crate::Result<Document> {
    let content = crate::input::read_text_file(path)?;
    Ok(build(&content))
}
