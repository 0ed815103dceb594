use serde::Deserialize;

/// Identifier of the catch-all category for skills matching no keyword
pub const OTHER_CATEGORY_ID: &str = "other";

/// One row of the category table
///
/// Declaration order in the table is match priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl CategoryDef {
    pub fn new(id: &str, name: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}
