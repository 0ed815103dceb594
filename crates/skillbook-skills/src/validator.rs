//! Structural validation of SKILL.md documents
//!
//! Three independent checks run in a fixed order (frontmatter, headings,
//! content) and append to one [`ValidationResult`].

use regex::Regex;
use skillbook_types::ValidationResult;

use crate::error::Result;
use crate::frontmatter::{Frontmatter, DELIMITER};

/// Names longer than this are flagged
const MAX_NAME_LENGTH: usize = 60;
/// Descriptions longer than this are flagged
const MAX_DESCRIPTION_LENGTH: usize = 200;
/// Lines longer than this count as long
const MAX_LINE_LENGTH: usize = 150;
/// More long lines than this are flagged
const MAX_LONG_LINES: usize = 5;

/// Validator with its patterns compiled once per run
#[derive(Debug, Clone)]
pub struct SkillValidator {
    empty_section_re: Regex,
    list_item_re: Regex,
}

impl SkillValidator {
    /// Compile the content patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // A heading followed by two blank lines
            empty_section_re: Regex::new(r"(?m)^#+ .*\n\n\n")?,
            list_item_re: Regex::new(r"(?m)^([ \t]*)-[ \t]+")?,
        })
    }

    /// Validate one skill document
    #[must_use]
    pub fn validate(&self, id: &str, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new(id);

        check_frontmatter(content, &mut result);
        check_headings(content, &mut result);
        self.check_content(content, &mut result);

        result
    }

    fn check_content(&self, content: &str, result: &mut ValidationResult) {
        let empty_sections = self.empty_section_re.find_iter(content).count();
        if empty_sections > 0 {
            result.warn(format!("Found {empty_sections} empty section(s)"));
        }

        let long_lines = content
            .lines()
            .filter(|line| {
                line.chars().count() > MAX_LINE_LENGTH
                    && !line.starts_with('|')
                    && !line.starts_with("http")
            })
            .count();
        if long_lines > MAX_LONG_LINES {
            result.warn(format!(
                "{long_lines} lines exceed {MAX_LINE_LENGTH} characters"
            ));
        }

        // Reported once, on the first odd indentation
        let odd_indent = self
            .list_item_re
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .any(|indent| indent.as_str().len() % 2 != 0);
        if odd_indent {
            result.warn("List indentation should be in multiples of 2 spaces");
        }
    }
}

fn check_frontmatter(content: &str, result: &mut ValidationResult) {
    let Some(frontmatter) = Frontmatter::parse(content) else {
        result.error("Missing frontmatter block (must start with ---)");
        return;
    };

    for line in frontmatter.invalid_lines() {
        result.warn(format!("Invalid frontmatter line: {line}"));
    }

    match frontmatter.name() {
        None => result.error("Missing required field: name"),
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            result.warn(format!(
                "name is too long (should be < {MAX_NAME_LENGTH} chars)"
            ));
        }
        Some(_) => {}
    }

    match frontmatter.description() {
        None => result.error("Missing required field: description"),
        Some(description) if description.chars().count() > MAX_DESCRIPTION_LENGTH => {
            result.warn(format!(
                "description is too long (should be < {MAX_DESCRIPTION_LENGTH} chars)"
            ));
        }
        Some(_) => {}
    }
}

fn check_headings(content: &str, result: &mut ValidationResult) {
    let lines: Vec<&str> = content.split('\n').collect();

    // Index of the second delimiter line, wherever it appears
    let frontmatter_end = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .nth(1)
        .map(|(i, _)| i);

    let mut has_main_heading = false;
    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with("# ") {
            continue;
        }

        match frontmatter_end {
            Some(end) if i <= end => result.error(format!(
                "# heading found before end of frontmatter (line {})",
                i + 1
            )),
            _ => has_main_heading = true,
        }
    }

    if !has_main_heading {
        result.warn("No # heading found (recommended for structure)");
    }
}
