//! Sort the lines inside each section of flat markdown text.
//!
//! Unlike the heading tree sort this works on plain lines: a section is a
//! heading line plus every line up to the next heading line, whatever their
//! levels. Nested subheadings therefore each start their own section here.
//! Lines before the first heading pass through untouched.

use super::utils::{FenceTracker, is_blank};

/// Sort the body lines of every section case-insensitively.
///
/// Within a section, blank lines are dropped and the remaining lines are
/// wrapped in one leading and one trailing blank line. A section with no
/// remaining lines gets a single blank line. Code fence lines toggle fence
/// state like everywhere else but are sorted with the other body lines;
/// while a fence is open, `#` lines do not start a new section.
pub fn sort_sections(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut section: Option<Section<'_>> = None;
    let mut fences = FenceTracker::new();

    for line in text.split('\n') {
        let is_fence = fences.observe(line);

        if !is_fence && !fences.inside() && line.starts_with('#') {
            if let Some(done) = section.take() {
                done.emit(&mut out);
            }
            section = Some(Section::new(line));
            continue;
        }

        match section.as_mut() {
            Some(open) => open.body.push(line),
            None => out.push(line),
        }
    }

    if let Some(done) = section.take() {
        done.emit(&mut out);
    }

    log::debug!("sorted section lines: {} lines out", out.len());
    out.join("\n")
}

struct Section<'a> {
    heading: &'a str,
    body: Vec<&'a str>,
}

impl<'a> Section<'a> {
    fn new(heading: &'a str) -> Self {
        Self {
            heading,
            body: Vec::new(),
        }
    }

    fn emit(mut self, out: &mut Vec<&'a str>) {
        self.body.sort_by_cached_key(|line| line.to_lowercase());
        self.body.retain(|line| !is_blank(line));

        out.push(self.heading);
        out.push("");
        if !self.body.is_empty() {
            out.extend(self.body);
            out.push("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_single_section() {
        assert_eq!(
            sort_sections("# Title\nbanana\napple\n"),
            "# Title\n\napple\nbanana\n"
        );
    }

    #[test]
    fn test_lines_before_first_heading_untouched() {
        assert_eq!(
            sort_sections("not a heading\nanother\n# H\nb\na"),
            "not a heading\nanother\n# H\n\na\nb\n"
        );
    }

    #[test]
    fn test_empty_section_gets_one_blank_line() {
        assert_eq!(sort_sections("# A\n\n\n# B\nx"), "# A\n\n# B\n\nx\n");
    }

    #[test]
    fn test_case_insensitive_stable() {
        assert_eq!(
            sort_sections("# H\nbeta\nAlpha\nalpha\nALPHA"),
            "# H\n\nAlpha\nalpha\nALPHA\nbeta\n"
        );
    }

    #[test]
    fn test_whitespace_is_part_of_the_key() {
        // Leading spaces sort before letters
        assert_eq!(sort_sections("# H\nb\n  a\na"), "# H\n\n  a\na\nb\n");
    }

    #[test]
    fn test_every_heading_starts_a_section() {
        assert_eq!(
            sort_sections("# Top\nz\ny\n## Sub\nd\nc"),
            "# Top\n\ny\nz\n\n## Sub\n\nc\nd\n"
        );
    }

    #[test]
    fn test_hash_inside_fence_does_not_split() {
        let sorted = sort_sections("# H\n```\n# comment\n```\nb");
        // Still one section: the fenced `#` line sorts with the rest
        assert_eq!(sorted, "# H\n\n# comment\n```\n```\nb\n");
    }

    #[test]
    fn test_fence_before_first_heading_passes_through() {
        assert_eq!(
            sort_sections("```\n# not\n```\n# Real\nx"),
            "```\n# not\n```\n# Real\n\nx\n"
        );
    }

    #[test]
    fn test_hash_without_space_starts_section() {
        // Any line starting with `#` outside a fence is a boundary here
        assert_eq!(sort_sections("#tag\nb\na"), "#tag\n\na\nb\n");
    }

    #[test]
    fn test_blank_line_normalization() {
        let sorted = sort_sections("# A\n\nq\n\n\np\n\n# B\n\n\n");
        assert_eq!(sorted, "# A\n\np\nq\n\n# B\n");
    }

    #[test]
    fn test_no_headings() {
        assert_eq!(sort_sections("b\na\n"), "b\na\n");
    }
}
