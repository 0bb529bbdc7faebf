//! # mdsort
//!
//! Sort a markdown document alphabetically by its heading hierarchy.
//!
//! The document is parsed into a tree of headings, each owning the lines
//! below it up to its first subheading. Siblings are sorted by heading text,
//! case-insensitively, at every level, and the tree is written back out as
//! markdown. Lines inside fenced code blocks are never treated as headings.
//!
//! An optional second pass sorts the lines inside each section.
//!
//! ## Example
//!
//! ```rust
//! use mdsort::{SortOptions, sort_markdown};
//!
//! let markdown = "# Zebra\nstripes\n# Aardvark\n## Teeth\n## Ears\n";
//! let sorted = sort_markdown(markdown, &SortOptions::default());
//!
//! assert_eq!(sorted, "# Aardvark\n\n## Ears\n\n## Teeth\n\n# Zebra\nstripes");
//! ```

/// Configuration module for default sorting behaviour.
pub mod config;

/// Error type shared by the library and the binary.
pub mod error;

/// Input handling module for file and stdin sources.
///
/// Reads the whole input and rejects anything that is not UTF-8 text.
pub mod input;

/// Output sink module: stdout or an atomically replaced file.
pub mod output;

/// Parser module for markdown documents.
///
/// Builds, sorts and flattens the heading tree, and sorts section lines.
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use parser::{Document, DuplicatePolicy, Heading, build, flatten, sort_sections};

/// Options for one sorting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Also sort the lines inside each section.
    pub sort_sections: bool,
    /// How to treat sibling headings with identical text.
    pub duplicates: DuplicatePolicy,
}

/// Sort a markdown document by its headings.
///
/// Returns the flattened text without a trailing newline; pass it through
/// [`finalize_output`] before writing.
pub fn sort_markdown(text: &str, options: &SortOptions) -> String {
    let doc = parser::build_with(text, options.duplicates);
    let doc = parser::sort_document(doc);
    let flat = parser::flatten(&doc);
    log::debug!("heading sort produced {} bytes", flat.len());

    if options.sort_sections {
        parser::sort_sections(&flat)
    } else {
        flat
    }
}

/// Normalize the end of the text to exactly one newline.
pub fn finalize_output(mut text: String) -> String {
    let trimmed = text.trim_end_matches('\n').len();
    text.truncate(trimmed);
    text.push('\n');
    text
}
