//! Skills directory scanning
//!
//! Each immediate subdirectory of the skills directory is one skill and must
//! hold a `SKILL.md`. Folders without one are logged and skipped, never
//! counted as failures.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use skillbook_types::SkillEntry;

use crate::category::CategoryTable;
use crate::error::{Result, SkillbookError};
use crate::frontmatter::Frontmatter;

/// Default document file name inside a skill folder
pub const DEFAULT_SKILL_FILE: &str = "SKILL.md";
/// Default supplementary-content subdirectory name
pub const DEFAULT_REFERENCES_DIR: &str = "references";
/// Description used when the frontmatter has none
pub const NO_DESCRIPTION: &str = "No description available";

/// A skill folder whose document was read successfully
#[derive(Debug, Clone)]
pub struct SkillDocument {
    /// Folder name
    pub id: String,
    /// Full path to the skill folder
    pub dir: PathBuf,
    /// Raw document text
    pub content: String,
}

/// Result of enumerating the skills directory
#[derive(Debug, Clone, Default)]
pub struct SkillDocuments {
    /// Readable documents in enumeration order
    pub documents: Vec<SkillDocument>,
    /// Folders skipped because their document was missing or unreadable
    pub skipped: Vec<String>,
}

impl SkillDocuments {
    /// Number of skill folders found, skipped ones included
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.documents.len() + self.skipped.len()
    }
}

/// Scanner over one skills directory
#[derive(Debug, Clone)]
pub struct SkillScanner {
    skills_dir: PathBuf,
    skill_file: String,
    references_dir: String,
}

impl SkillScanner {
    /// Create a scanner with the default file layout
    pub fn new(skills_dir: impl Into<PathBuf>) -> Self {
        Self {
            skills_dir: skills_dir.into(),
            skill_file: DEFAULT_SKILL_FILE.to_string(),
            references_dir: DEFAULT_REFERENCES_DIR.to_string(),
        }
    }

    /// Override the document file name
    #[must_use]
    pub fn with_skill_file(mut self, skill_file: impl Into<String>) -> Self {
        self.skill_file = skill_file.into();
        self
    }

    /// Override the supplementary-content directory name
    #[must_use]
    pub fn with_references_dir(mut self, references_dir: impl Into<String>) -> Self {
        self.references_dir = references_dir.into();
        self
    }

    /// The directory being scanned
    #[must_use]
    pub fn skills_dir(&self) -> &Path {
        &self.skills_dir
    }

    /// Read every skill document in directory enumeration order.
    ///
    /// # Errors
    ///
    /// Fails only when the skills directory itself is missing or unreadable.
    /// A folder that cannot be read is logged and skipped.
    pub fn documents(&self) -> Result<SkillDocuments> {
        if !self.skills_dir.is_dir() {
            return Err(SkillbookError::SkillsDirNotFound(self.skills_dir.clone()));
        }

        let mut found = SkillDocuments::default();

        for entry in fs::read_dir(&self.skills_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", self.skills_dir, e);
                    continue;
                }
            };
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().into_owned();
            let skill_file = path.join(&self.skill_file);

            if !skill_file.is_file() {
                warn!("Skipping {} (no {})", id, self.skill_file);
                found.skipped.push(id);
                continue;
            }

            match fs::read_to_string(&skill_file) {
                Ok(content) => {
                    debug!("Discovered skill: {} at {:?}", id, path);
                    found.documents.push(SkillDocument {
                        id,
                        dir: path,
                        content,
                    });
                }
                Err(e) => {
                    warn!("Skipping {}: failed to read {:?}: {}", id, skill_file, e);
                    found.skipped.push(id);
                }
            }
        }

        Ok(found)
    }

    /// Scan and categorize all skills.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SkillScanner::documents`].
    pub fn scan(&self, categories: &CategoryTable) -> Result<Vec<SkillEntry>> {
        info!("Scanning skills in {:?}", self.skills_dir);

        let skills: Vec<SkillEntry> = self
            .documents()?
            .documents
            .iter()
            .map(|document| self.to_entry(document, categories))
            .collect();

        info!("Discovered {} skills", skills.len());
        Ok(skills)
    }

    /// Build the index record for one document
    ///
    /// Lines without a colon are ignored here; only the validator reports them.
    #[must_use]
    pub fn to_entry(&self, document: &SkillDocument, categories: &CategoryTable) -> SkillEntry {
        let frontmatter = Frontmatter::parse(&document.content);
        let name = frontmatter.as_ref().and_then(Frontmatter::name);
        let description = frontmatter.as_ref().and_then(Frontmatter::description);

        SkillEntry::new(
            document.id.clone(),
            name.unwrap_or(document.id.as_str()),
            description.unwrap_or(NO_DESCRIPTION),
            categories.categorize(&document.id, description),
            document.dir.join(&self.references_dir).is_dir(),
        )
    }
}
