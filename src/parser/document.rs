//! Heading tree types.

/// A parsed markdown document: the text before the first heading plus the
/// top-level headings in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Everything before the first heading, newline-terminated per line.
    pub preamble: String,
    /// Top-level headings (siblings of the shallowest open level).
    pub headings: Vec<Heading>,
}

/// One heading and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of `#` characters that introduced the heading (1-6).
    pub level: usize,
    /// Heading text, used both for display and as the sort key.
    pub text: String,
    /// The original heading line, marker included.
    pub raw_line: String,
    /// Lines between the heading and its first child heading, each
    /// newline-terminated. Does not include `raw_line`.
    pub body: String,
    /// Headings strictly deeper than this one, in order.
    pub children: Vec<Heading>,
}

impl Heading {
    pub fn new(level: usize, text: impl Into<String>, raw_line: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            raw_line: raw_line.into(),
            body: String::new(),
            children: Vec::new(),
        }
    }

    /// Append one line of body text.
    pub fn push_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }

    /// Number of headings in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Heading::count).sum::<usize>()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line of preamble text.
    pub fn push_preamble_line(&mut self, line: &str) {
        self.preamble.push_str(line);
        self.preamble.push('\n');
    }

    /// Total number of headings at every depth.
    pub fn heading_count(&self) -> usize {
        self.headings.iter().map(Heading::count).sum()
    }

    /// Heading texts grouped by nesting depth (index 0 is the top level).
    #[cfg(test)]
    pub fn texts_by_depth(&self) -> Vec<Vec<&str>> {
        fn walk<'a>(headings: &'a [Heading], depth: usize, out: &mut Vec<Vec<&'a str>>) {
            for heading in headings {
                if out.len() <= depth {
                    out.resize_with(depth + 1, Vec::new);
                }
                out[depth].push(heading.text.as_str());
                walk(&heading.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.headings, 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(level: usize, text: &str) -> Heading {
        Heading::new(level, text, format!("{} {}", "#".repeat(level), text))
    }

    #[test]
    fn test_push_line_terminates_lines() {
        let mut heading = leaf(1, "Title");
        heading.push_line("one");
        heading.push_line("");
        assert_eq!(heading.body, "one\n\n");
    }

    #[test]
    fn test_count_and_texts_by_depth() {
        let mut root = leaf(1, "Root");
        let mut child = leaf(2, "Child");
        child.children.push(leaf(3, "Grandchild"));
        root.children.push(child);
        root.children.push(leaf(2, "Sibling"));

        assert_eq!(root.count(), 4);

        let doc = Document {
            preamble: String::new(),
            headings: vec![root, leaf(1, "Other")],
        };
        assert_eq!(doc.heading_count(), 5);
        assert_eq!(
            doc.texts_by_depth(),
            vec![
                vec!["Root", "Other"],
                vec!["Child", "Sibling"],
                vec!["Grandchild"],
            ]
        );
    }
}
