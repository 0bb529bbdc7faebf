//! Line classification helpers.
//!
//! Shared by the tree builder and the section line sorter so both agree on
//! what counts as a heading, a blank line, and a code fence.

use regex::Regex;
use std::sync::OnceLock;

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// A heading line split into its level and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub level: usize,
    pub text: &'a str,
}

/// Match an ATX heading line: one to six `#`, at least one whitespace
/// character, then the heading text.
///
/// The text is the rest of the line, verbatim.
///
/// # Examples
///
/// ```
/// # use mdsort::parser::utils::parse_heading_line;
/// let heading = parse_heading_line("## Install").unwrap();
/// assert_eq!(heading.level, 2);
/// assert_eq!(heading.text, "Install");
///
/// assert!(parse_heading_line("#hashtag").is_none());
/// assert!(parse_heading_line("####### too deep").is_none());
/// ```
pub fn parse_heading_line(line: &str) -> Option<HeadingLine<'_>> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)").unwrap());

    let caps = pattern.captures(line)?;
    Some(HeadingLine {
        level: caps.get(1)?.as_str().len(),
        text: caps.get(2)?.as_str(),
    })
}

/// True when the line's trimmed content opens or closes a code fence.
pub fn is_code_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// True when the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Tracks whether the scan is inside a fenced code block.
///
/// Fences are not nested or counted: every fence line flips the state, so an
/// odd number of fences leaves the rest of the input inside a block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FenceTracker {
    inside: bool,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line; returns true if it was a fence line.
    pub fn observe(&mut self, line: &str) -> bool {
        let fence = is_code_fence(line);
        if fence {
            self.inside = !self.inside;
        }
        fence
    }

    pub fn inside(&self) -> bool {
        self.inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heading_levels() {
        for level in 1..=6 {
            let line = format!("{} Title", "#".repeat(level));
            let heading = parse_heading_line(&line).unwrap();
            assert_eq!(heading.level, level);
            assert_eq!(heading.text, "Title");
        }
    }

    #[test]
    fn test_parse_heading_requires_whitespace() {
        assert!(parse_heading_line("#Title").is_none());
        assert!(parse_heading_line("##").is_none());
        assert!(parse_heading_line(" # indented").is_none());
    }

    #[test]
    fn test_parse_heading_keeps_text_verbatim() {
        let heading = parse_heading_line("#\t  Spaced out  ").unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.text, "Spaced out  ");
    }

    #[test]
    fn test_parse_heading_empty_text() {
        let heading = parse_heading_line("# ").unwrap();
        assert_eq!(heading.text, "");
    }

    #[test]
    fn test_is_code_fence() {
        assert!(is_code_fence("```"));
        assert!(is_code_fence("   ```rust"));
        assert!(!is_code_fence("``"));
        assert!(!is_code_fence("text ```"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_fence_tracker_toggles() {
        let mut fences = FenceTracker::new();
        assert!(!fences.inside());
        assert!(fences.observe("```rust"));
        assert!(fences.inside());
        assert!(!fences.observe("let x = 1;"));
        assert!(fences.inside());
        assert!(fences.observe("```"));
        assert!(!fences.inside());
    }
}
