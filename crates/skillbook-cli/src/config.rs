use serde::Deserialize;
use skillbook_skills::CategoryTable;
use skillbook_types::CategoryDef;

/// Built-in defaults, always the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[paths]
skills_dir = "skills"
skill_file = "SKILL.md"
references_dir = "references"
index_file = "SKILLS_INDEX.md"

[logging]
level = "info"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Directory holding one folder per skill
    pub skills_dir: String,
    /// Document expected inside each skill folder
    pub skill_file: String,
    /// Optional supplementary-content folder inside a skill folder
    pub references_dir: String,
    /// Where the generated index is written
    pub index_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
    /// Replaces the built-in category table when non-empty
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
}

impl Config {
    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Local override: ./skillbook.toml (optional)
    /// 3. Environment variables with SKILLBOOK__ prefix (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name("skillbook").required(false))
            .add_source(config::Environment::with_prefix("SKILLBOOK").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Category table in effect for this run
    pub fn category_table(&self) -> CategoryTable {
        if self.categories.is_empty() {
            CategoryTable::default()
        } else {
            CategoryTable::new(self.categories.clone())
        }
    }
}
