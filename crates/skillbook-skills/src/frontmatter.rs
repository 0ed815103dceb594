//! Frontmatter block parsing
//!
//! The block opens only when the first line of the document is exactly `---`
//! and closes at a later line that is exactly `---`, with at least one body
//! line in between. The body is read line by line as `key: value` pairs;
//! unknown keys are kept and never rejected.

use std::collections::HashMap;

/// Delimiter line that opens and closes the block
pub const DELIMITER: &str = "---";

/// Parsed frontmatter fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
    invalid_lines: Vec<String>,
}

impl Frontmatter {
    /// Parse the frontmatter block at the start of `content`.
    ///
    /// Returns `None` when the opening or closing delimiter is missing.
    /// Blank lines and `#` comment lines are skipped. Lines without a colon
    /// are kept aside in [`Frontmatter::invalid_lines`] so callers can decide
    /// whether they matter.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let body = extract_block(content)?;
        let mut frontmatter = Self::default();

        for line in body {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            // Only the first colon splits; values like URLs keep theirs
            match line.split_once(':') {
                Some((key, value)) => {
                    frontmatter
                        .fields
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                None => frontmatter.invalid_lines.push(line.to_string()),
            }
        }

        Some(frontmatter)
    }

    /// Get a field value, treating an empty value as absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The `name` field
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// The `description` field
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Body lines that had no `key: value` shape
    #[must_use]
    pub fn invalid_lines(&self) -> &[String] {
        &self.invalid_lines
    }
}

/// Body lines between the opening and closing delimiters
fn extract_block(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if lines.next()? != DELIMITER {
        return None;
    }

    // The body holds at least one line, so `---` right after the opener
    // belongs to the body instead of closing it
    let mut body = Vec::new();
    for line in lines {
        if line == DELIMITER && !body.is_empty() {
            return Some(body);
        }
        body.push(line);
    }

    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_fields() {
        let content = "---\nname: Alpha\ndescription: network scanning tool\n---\n\n# Alpha\n";
        let fm = Frontmatter::parse(content).unwrap();
        assert_eq!(fm.name(), Some("Alpha"));
        assert_eq!(fm.description(), Some("network scanning tool"));
        assert!(fm.invalid_lines().is_empty());
    }

    #[test]
    fn test_value_keeps_embedded_colons() {
        let content = "---\nname: Burp\nsource: https://example.com:8443/path\n---\n";
        let fm = Frontmatter::parse(content).unwrap();
        assert_eq!(fm.get("source"), Some("https://example.com:8443/path"));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let content = "---\n\n# a comment\nname: x\n   \n---\n";
        let fm = Frontmatter::parse(content).unwrap();
        assert_eq!(fm.name(), Some("x"));
        assert!(fm.invalid_lines().is_empty());
    }

    #[test]
    fn test_collects_lines_without_colon() {
        let content = "---\nname: x\njust some text\n---\n";
        let fm = Frontmatter::parse(content).unwrap();
        assert_eq!(fm.invalid_lines(), ["just some text".to_string()]);
    }

    #[test]
    fn test_missing_block() {
        assert!(Frontmatter::parse("# Title\n\nname: x\n").is_none());
        // Unterminated block
        assert!(Frontmatter::parse("---\nname: x\n# Title\n").is_none());
        // Block must start on the first line
        assert!(Frontmatter::parse("\n---\nname: x\n---\n").is_none());
    }

    #[test]
    fn test_block_needs_a_body_line() {
        assert!(Frontmatter::parse("---\n---\n# Title\n").is_none());

        let blank = Frontmatter::parse("---\n\n---\n").unwrap();
        assert_eq!(blank.name(), None);

        // A second opener becomes a body line
        let fm = Frontmatter::parse("---\n---\nname: x\n---\n").unwrap();
        assert_eq!(fm.name(), Some("x"));
        assert_eq!(fm.invalid_lines(), ["---".to_string()]);
    }

    #[test]
    fn test_empty_value_is_absent() {
        let fm = Frontmatter::parse("---\nname:\ndescription: d\n---\n").unwrap();
        assert_eq!(fm.name(), None);
        assert_eq!(fm.description(), Some("d"));
    }

    #[test]
    fn test_crlf_delimiters() {
        let fm = Frontmatter::parse("---\r\nname: x\r\n---\r\n").unwrap();
        assert_eq!(fm.name(), Some("x"));
    }
}
