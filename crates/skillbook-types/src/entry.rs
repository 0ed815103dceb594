/// A scanned skill folder, categorized once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    /// Folder name, unique within the skills directory
    pub id: String,
    /// Display name (falls back to `id`)
    pub name: String,
    pub description: String,
    pub category: String,
    /// True when the folder holds a references subdirectory
    pub has_references: bool,
}

impl SkillEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        has_references: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            has_references,
        }
    }
}
