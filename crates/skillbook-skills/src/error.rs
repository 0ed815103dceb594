//! Error types for skill scanning and validation

use std::path::PathBuf;
use thiserror::Error;

/// Run-level errors
///
/// Problems with a single skill never surface here; they are logged and
/// skipped, or recorded in that skill's `ValidationResult`.
#[derive(Debug, Error)]
pub enum SkillbookError {
    /// The configured skills directory does not exist or is not a directory
    #[error("Skills directory not found: {}", .0.display())]
    SkillsDirNotFound(PathBuf),

    /// A validation pattern failed to compile
    #[error("Invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillbookError>;
