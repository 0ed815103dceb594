//! `Skillbook` Skills Library
//!
//! Scans a directory of skill folders, each holding a `SKILL.md` with a
//! frontmatter block, and provides the two halves of the toolchain:
//!
//! - Index generation: scan, categorize by keyword, render a markdown index
//! - Validation: structural checks per document, folded into a pass/warn/fail summary
//!
//! ## Architecture
//!
//! frontmatter parser → (category table | validator) → (index renderer | report)
//!
//! Every run is stateless. A skill that cannot be read is logged and skipped;
//! only a missing skills directory fails the run.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod category;
pub mod error;
pub mod frontmatter;
pub mod index;
pub mod report;
pub mod scanner;
pub mod validator;

pub use category::{CategoryGroup, CategoryTable};
pub use error::{Result, SkillbookError};
pub use frontmatter::Frontmatter;
pub use index::IndexRenderer;
pub use report::{Outcome, ValidationSummary};
pub use scanner::{SkillDocument, SkillDocuments, SkillScanner};
pub use validator::SkillValidator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CategoryTable, IndexRenderer, Outcome, SkillScanner, SkillValidator, ValidationSummary,
    };
}
