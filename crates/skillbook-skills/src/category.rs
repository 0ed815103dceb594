//! Keyword-based skill categorization
//!
//! The category table is data, not logic: an ordered list of [`CategoryDef`]
//! rows. Matching is first-hit in declaration order, so earlier rows win ties.

use skillbook_types::{CategoryDef, SkillEntry, OTHER_CATEGORY_ID};

/// Display name of the catch-all category
pub const OTHER_CATEGORY_NAME: &str = "Other";
/// Description of the catch-all category
pub const OTHER_CATEGORY_DESCRIPTION: &str = "Skills that do not fit into the main categories.";

/// Ordered category table used for matching and grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<CategoryDef>,
}

/// Skills of one category, borrowed from the scanned list
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    /// Category identifier
    pub id: &'a str,
    /// Display name
    pub name: &'a str,
    /// One-line description shown above the category table
    pub description: &'a str,
    /// Member skills in scan order
    pub skills: Vec<&'a SkillEntry>,
}

impl CategoryTable {
    /// Build a table from configured rows.
    ///
    /// Keywords are lower-cased once here; empty keywords are dropped since
    /// they would match every skill.
    #[must_use]
    pub fn new(categories: Vec<CategoryDef>) -> Self {
        let categories = categories
            .into_iter()
            .map(|mut category| {
                category.keywords = category
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                category
            })
            .collect();

        Self { categories }
    }

    /// Assign exactly one category id to a skill.
    ///
    /// Name and description are joined and lower-cased, then each category's
    /// keywords are tested as substrings. Falls back to `other`.
    #[must_use]
    pub fn categorize(&self, name: &str, description: Option<&str>) -> &str {
        let haystack = format!("{} {}", name, description.unwrap_or("")).to_lowercase();

        self.categories
            .iter()
            .find(|category| category.keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map_or(OTHER_CATEGORY_ID, |category| category.id.as_str())
    }

    /// Configured categories in declaration order (catch-all excluded)
    #[must_use]
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// Number of categories including the catch-all
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.categories.len() + 1
    }

    /// Group skills by category, configured categories first, catch-all last.
    ///
    /// Every skill lands in exactly one group. A skill whose category id is
    /// not in the table goes to the catch-all group.
    #[must_use]
    pub fn group<'a>(&'a self, skills: &'a [SkillEntry]) -> Vec<CategoryGroup<'a>> {
        let mut groups: Vec<CategoryGroup<'a>> = self
            .categories
            .iter()
            .map(|category| CategoryGroup {
                id: &category.id,
                name: &category.name,
                description: &category.description,
                skills: Vec::new(),
            })
            .collect();

        let mut other = CategoryGroup {
            id: OTHER_CATEGORY_ID,
            name: OTHER_CATEGORY_NAME,
            description: OTHER_CATEGORY_DESCRIPTION,
            skills: Vec::new(),
        };

        for skill in skills {
            match groups.iter_mut().find(|g| g.id == skill.category) {
                Some(group) => group.skills.push(skill),
                None => other.skills.push(skill),
            }
        }

        groups.push(other);
        groups
    }
}

impl Default for CategoryTable {
    /// The built-in table for offensive-security skill collections
    fn default() -> Self {
        Self::new(vec![
            CategoryDef::new(
                "web-app-security",
                "Web Application Security",
                "Security testing for web applications and APIs",
                &["api", "web", "xss", "injection", "auth", "html", "idor", "wordpress"],
            ),
            CategoryDef::new(
                "network-security",
                "Network Security",
                "Network reconnaissance, scanning, and analysis",
                &["network", "scanning", "shodan", "smtp", "ssh", "wireshark"],
            ),
            CategoryDef::new(
                "privilege-escalation",
                "Privilege Escalation",
                "Techniques for escalating privileges on systems",
                &["privilege", "escalation", "linux", "windows"],
            ),
            CategoryDef::new(
                "platform-security",
                "Platform-Specific Security",
                "Security testing for specific platforms and clouds",
                &["active-directory", "aws", "cloud", "burp", "metasploit"],
            ),
            CategoryDef::new(
                "methodology",
                "Methodology & Tools",
                "General methodologies and comprehensive tool guides",
                &["ethical", "pentest", "checklist", "commands", "red-team", "methodology"],
            ),
        ])
    }
}
