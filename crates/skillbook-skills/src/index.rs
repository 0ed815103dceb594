//! Markdown index rendering
//!
//! The generation date is passed in so identical input renders identical
//! output.

use chrono::NaiveDate;
use feruca::{Collator, Locale, Tailoring};

use skillbook_types::SkillEntry;

use crate::category::{CategoryGroup, CategoryTable};
use crate::scanner::DEFAULT_SKILL_FILE;

/// Descriptions in category tables are cut to this many characters
pub const DESCRIPTION_WIDTH: usize = 60;
/// Command shown in the header and trailer
pub const REGENERATE_COMMAND: &str = "generate-skills-index";

const REFS_MARKER: &str = "✅";
const ALPHABETICAL_REFS_MARKER: &str = " 📖";

/// Renders the skills index document
#[derive(Debug, Clone)]
pub struct IndexRenderer<'a> {
    categories: &'a CategoryTable,
    link_base: String,
    skill_file: String,
}

impl<'a> IndexRenderer<'a> {
    /// Create a renderer linking into `skills/<id>/SKILL.md`
    #[must_use]
    pub fn new(categories: &'a CategoryTable) -> Self {
        Self {
            categories,
            link_base: "skills".to_string(),
            skill_file: DEFAULT_SKILL_FILE.to_string(),
        }
    }

    /// Directory prefix of skill links, relative to the index file
    #[must_use]
    pub fn with_link_base(mut self, link_base: impl Into<String>) -> Self {
        self.link_base = link_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Document file name used in skill links
    #[must_use]
    pub fn with_skill_file(mut self, skill_file: impl Into<String>) -> Self {
        self.skill_file = skill_file.into();
        self
    }

    /// Render the full index
    #[must_use]
    pub fn render(&self, skills: &[SkillEntry], generated_on: NaiveDate) -> String {
        let groups = self.categories.group(skills);
        let mut markdown = String::from("# Skills Index\n\n");

        markdown.push_str(&format!(
            "> **Auto-generated** by `{REGENERATE_COMMAND}`\n"
        ));
        markdown.push_str("> \n");
        markdown.push_str(&format!(
            "> Last updated: {}\n\n",
            generated_on.format("%Y-%m-%d")
        ));

        // Statistics
        markdown.push_str("## Stats\n\n");
        markdown.push_str(&format!("- **Total Skills**: {}\n", skills.len()));
        markdown.push_str(&format!(
            "- **Categories**: {}\n",
            self.categories.total_count()
        ));
        markdown.push_str(&format!(
            "- **With References**: {}\n\n",
            skills.iter().filter(|s| s.has_references).count()
        ));

        markdown.push_str("### By Category\n\n");
        for group in &groups {
            markdown.push_str(&format!("- {}: {} skills\n", group.name, group.skills.len()));
        }
        markdown.push('\n');

        // Per-category tables, catch-all last
        markdown.push_str("## Skills Directory\n\n");
        for group in groups.iter().filter(|g| !g.skills.is_empty()) {
            self.render_group(&mut markdown, group);
        }

        markdown.push_str("## All Skills (Alphabetical)\n\n");
        for skill in sort_alphabetically(skills) {
            let refs = if skill.has_references {
                ALPHABETICAL_REFS_MARKER
            } else {
                ""
            };
            markdown.push_str(&format!("- {}{refs}\n", self.link(skill)));
        }
        markdown.push('\n');

        markdown.push_str("---\n\n");
        markdown.push_str("## Updating This Index\n\n");
        markdown.push_str("To update this index, run:\n");
        markdown.push_str("```bash\n");
        markdown.push_str(&format!("{REGENERATE_COMMAND}\n"));
        markdown.push_str("```\n");

        markdown
    }

    fn render_group(&self, markdown: &mut String, group: &CategoryGroup<'_>) {
        markdown.push_str(&format!("### {}\n\n", group.name));
        markdown.push_str(&format!("{}\n\n", group.description));
        markdown.push_str("| Skill | Description | Refs |\n");
        markdown.push_str("|-------|-------------|------|\n");

        for skill in &group.skills {
            let refs = if skill.has_references { REFS_MARKER } else { "" };
            markdown.push_str(&format!(
                "| {} | {} | {refs} |\n",
                self.link(skill),
                truncate_description(&skill.description, DESCRIPTION_WIDTH)
            ));
        }

        markdown.push('\n');
    }

    fn link(&self, skill: &SkillEntry) -> String {
        format!(
            "[{}]({}/{}/{})",
            skill.name, self.link_base, skill.id, self.skill_file
        )
    }
}

/// Cut `description` to `width` characters, appending `...` when cut
#[must_use]
pub fn truncate_description(description: &str, width: usize) -> String {
    match description.char_indices().nth(width) {
        Some((end, _)) => format!("{}...", &description[..end]),
        None => description.to_string(),
    }
}

/// Skills ordered by display name.
///
/// Uses Unicode collation with the CLDR root locale. Punctuation is not
/// ignored, accents sort with their base letter, and lowercase comes before
/// uppercase on ties. The sort is stable so equal names keep scan order.
#[must_use]
pub fn sort_alphabetically(skills: &[SkillEntry]) -> Vec<&SkillEntry> {
    let mut collator = Collator::new(Tailoring::Cldr(Locale::Root), false, true);
    let mut sorted: Vec<&SkillEntry> = skills.iter().collect();
    sorted.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
    sorted
}
