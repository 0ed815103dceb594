use crate::config::Config;
use anyhow::{Context, Result};
use chrono::Utc;
use skillbook_skills::report::render_result;
use skillbook_skills::{
    CategoryTable, IndexRenderer, Outcome, SkillScanner, SkillValidator, ValidationSummary,
};
use skillbook_types::SkillEntry;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

fn scanner(config: &Config) -> SkillScanner {
    SkillScanner::new(&config.paths.skills_dir)
        .with_skill_file(&config.paths.skill_file)
        .with_references_dir(&config.paths.references_dir)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Console summary lines: non-empty categories in table order, catch-all last
pub fn category_summary(categories: &CategoryTable, skills: &[SkillEntry]) -> Vec<String> {
    categories
        .group(skills)
        .iter()
        .filter(|group| !group.skills.is_empty())
        .map(|group| format!("   {}: {}", group.name, group.skills.len()))
        .collect()
}

/// Index generator - scans skills and writes the markdown index
pub struct IndexService {
    config: Config,
}

impl IndexService {
    /// Create a new index service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run one index generation
    pub fn run(self) -> Result<ExitCode> {
        // Initialize logging
        skillbook_logging::init_logging(&self.config.logging.level);

        Ok(exit_code(self.generate()?))
    }

    /// Scan, render and write the index.
    ///
    /// Returns `false` without touching the index file when no skill was found.
    pub fn generate(&self) -> Result<bool> {
        let categories = self.config.category_table();
        info!("Category table loaded: {} categories", categories.total_count());

        println!("Scanning skills directory...");
        let skills = scanner(&self.config).scan(&categories)?;

        if skills.is_empty() {
            println!("No skills found!");
            return Ok(false);
        }

        println!("Found {} skills", skills.len());

        println!("Generating index...");
        let index = IndexRenderer::new(&categories)
            .with_link_base(&self.config.paths.skills_dir)
            .with_skill_file(&self.config.paths.skill_file)
            .render(&skills, Utc::now().date_naive());

        let index_file = Path::new(&self.config.paths.index_file);
        fs::write(index_file, index)
            .with_context(|| format!("Failed to write {}", index_file.display()))?;

        println!("Index written to: {}", index_file.display());

        println!("\nSummary:");
        for line in category_summary(&categories, &skills) {
            println!("{line}");
        }

        Ok(true)
    }
}

/// Validator - checks every skill document and prints a report
pub struct ValidateService {
    config: Config,
}

impl ValidateService {
    /// Create a new validate service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run one validation pass
    pub fn run(self) -> Result<ExitCode> {
        // Initialize logging
        skillbook_logging::init_logging(&self.config.logging.level);

        Ok(exit_code(self.validate()?.is_success()))
    }

    /// Validate every skill, printing each result as it is computed
    pub fn validate(&self) -> Result<Outcome> {
        println!("🔍 Validating skills...\n");

        let validator = SkillValidator::new()?;
        let found = scanner(&self.config).documents()?;

        let results: Vec<_> = found
            .documents
            .iter()
            .map(|document| {
                let result = validator.validate(&document.id, &document.content);
                println!("{}", render_result(&result));
                result
            })
            .collect();

        let summary =
            ValidationSummary::from_results(&results).with_skipped(found.skipped.len());
        println!("{}", summary.render());

        let outcome = summary.outcome();
        info!("Validation finished: {:?}", outcome);

        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, PathsConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const VALID: &str = "---\nname: Alpha\ndescription: network scanning tool\n---\n\n# Alpha\n";

    fn config(root: &Path) -> Config {
        Config {
            paths: PathsConfig {
                skills_dir: root.join("skills").display().to_string(),
                skill_file: "SKILL.md".to_string(),
                references_dir: "references".to_string(),
                index_file: root.join("SKILLS_INDEX.md").display().to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            categories: Vec::new(),
        }
    }

    fn write_skill(root: &Path, id: &str, content: Option<&str>) {
        let dir = root.join("skills").join(id);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = content {
            fs::write(dir.join("SKILL.md"), content).unwrap();
        }
    }

    #[test]
    fn test_generate_writes_and_overwrites_index() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(temp_dir.path());
        let index_file = PathBuf::from(&config.paths.index_file);
        fs::write(&index_file, "stale content").unwrap();

        write_skill(temp_dir.path(), "a", Some(VALID));
        write_skill(temp_dir.path(), "b", None);

        assert!(IndexService::new(config).generate().unwrap());

        let index = fs::read_to_string(&index_file).unwrap();
        assert!(!index.contains("stale content"));
        assert!(index.starts_with("# Skills Index\n"));
        assert!(index.contains("- **Total Skills**: 1\n"));
        assert!(index.contains("/a/SKILL.md)"));
        assert!(!index.contains("/b/SKILL.md)"));
    }

    #[test]
    fn test_generate_without_skills_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(temp_dir.path());
        let index_file = PathBuf::from(&config.paths.index_file);
        write_skill(temp_dir.path(), "b", None);

        assert!(!IndexService::new(config).generate().unwrap());
        assert!(!index_file.exists());
    }

    #[test]
    fn test_generate_missing_skills_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(IndexService::new(config(temp_dir.path())).generate().is_err());
    }

    #[test]
    fn test_run_twice_in_one_process() {
        let temp_dir = TempDir::new().unwrap();
        write_skill(temp_dir.path(), "a", Some(VALID));

        // Logging setup runs on every call
        IndexService::new(config(temp_dir.path())).run().unwrap();
        ValidateService::new(config(temp_dir.path())).run().unwrap();
        assert!(temp_dir.path().join("SKILLS_INDEX.md").exists());
    }

    #[test]
    fn test_category_summary() {
        let categories = CategoryTable::default();
        let skills = vec![
            SkillEntry::new("a", "A", "d", "other", false),
            SkillEntry::new("b", "B", "d", "network-security", false),
            SkillEntry::new("c", "C", "d", "network-security", true),
        ];
        assert_eq!(
            category_summary(&categories, &skills),
            vec!["   Network Security: 2".to_string(), "   Other: 1".to_string()]
        );
    }

    #[test]
    fn test_validate_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(temp_dir.path());
        fs::create_dir_all(temp_dir.path().join("skills")).unwrap();

        let service = ValidateService::new(config);
        assert_eq!(service.validate().unwrap(), Outcome::NoSkills);

        // A folder without a document is skipped, not failed
        write_skill(temp_dir.path(), "b", None);
        assert_eq!(service.validate().unwrap(), Outcome::Passed);

        write_skill(temp_dir.path(), "a", Some(VALID));
        assert_eq!(service.validate().unwrap(), Outcome::Passed);

        write_skill(temp_dir.path(), "c", Some("---\nname: C\ndescription: d\n---\nno heading\n"));
        assert_eq!(service.validate().unwrap(), Outcome::PassedWithWarnings);

        write_skill(temp_dir.path(), "d", Some("# no frontmatter\n"));
        let outcome = service.validate().unwrap();
        assert_eq!(outcome, Outcome::Failed);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_validate_missing_skills_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ValidateService::new(config(temp_dir.path())).validate().is_err());
    }
}
