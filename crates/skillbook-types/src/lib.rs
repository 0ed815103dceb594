//! Skillbook Types - Core types shared by the index generator and the validator
//!
//! This module defines the plain data records produced by a single run.
//! Nothing here is persisted between runs.

pub mod category;
pub mod entry;
pub mod validation;

pub use category::{CategoryDef, OTHER_CATEGORY_ID};
pub use entry::SkillEntry;
pub use validation::{ValidationResult, ValidationStatus};
