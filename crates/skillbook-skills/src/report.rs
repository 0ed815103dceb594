//! Validation report folding and formatting

use skillbook_types::{ValidationResult, ValidationStatus};

/// Width of the summary rule lines
const RULE_WIDTH: usize = 50;

/// Per-bucket counts over all validated skills
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    /// No errors and no warnings
    pub passed: usize,
    /// Warnings but no errors
    pub warned: usize,
    /// At least one error
    pub failed: usize,
    /// Folders skipped for lack of a readable document, not counted as failures
    pub skipped: usize,
}

/// Overall result of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every skill passed cleanly
    Passed,
    /// No failures, at least one skill has warnings
    PassedWithWarnings,
    /// At least one skill has errors
    Failed,
    /// The skills directory holds no skill folders at all
    NoSkills,
}

impl ValidationSummary {
    /// Fold results into counts
    #[must_use]
    pub fn from_results(results: &[ValidationResult]) -> Self {
        results.iter().fold(Self::default(), Self::with)
    }

    /// Counts with one more result added
    #[must_use]
    pub fn with(self, result: &ValidationResult) -> Self {
        match result.status() {
            ValidationStatus::Passed => Self {
                passed: self.passed + 1,
                ..self
            },
            ValidationStatus::Warned => Self {
                warned: self.warned + 1,
                ..self
            },
            ValidationStatus::Failed => Self {
                failed: self.failed + 1,
                ..self
            },
        }
    }

    /// Counts with skipped folders recorded
    #[must_use]
    pub fn with_skipped(self, skipped: usize) -> Self {
        Self { skipped, ..self }
    }

    /// Number of validated skills
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.warned + self.failed
    }

    /// Decide the run outcome
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.total() + self.skipped == 0 {
            Outcome::NoSkills
        } else if self.failed > 0 {
            Outcome::Failed
        } else if self.warned > 0 {
            Outcome::PassedWithWarnings
        } else {
            Outcome::Passed
        }
    }

    /// Render the closing summary block
    #[must_use]
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("\n{rule}\n"));
        out.push_str("📊 Validation Summary\n");
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("Total Skills: {}\n", self.total()));
        out.push_str(&format!("✅ Passed: {}\n", self.passed));
        out.push_str(&format!("⚠️  Warnings: {}\n", self.warned));
        out.push_str(&format!("❌ Failed: {}\n", self.failed));
        out.push_str(&format!("\n{}", self.outcome().message()));

        out
    }
}

impl Outcome {
    /// Whether the process should exit successfully
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Passed | Outcome::PassedWithWarnings)
    }

    /// Closing line printed after the summary
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Passed => "✅ All validations passed!",
            Outcome::PassedWithWarnings => "⚠️  Validation passed with warnings.",
            Outcome::Failed => "❌ Validation failed!",
            Outcome::NoSkills => "❌ No skills found!",
        }
    }
}

/// Render the status line of one skill plus its errors or warnings
#[must_use]
pub fn render_result(result: &ValidationResult) -> String {
    let (marker, details) = match result.status() {
        ValidationStatus::Passed => ("✅", &[][..]),
        ValidationStatus::Warned => ("⚠️ ", result.warnings.as_slice()),
        ValidationStatus::Failed => ("❌", result.errors.as_slice()),
    };

    let mut out = format!("{marker} {}", result.id);
    for detail in details {
        out.push_str(&format!("\n   - {detail}"));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn result(id: &str, errors: &[&str], warnings: &[&str]) -> ValidationResult {
        ValidationResult {
            id: id.to_string(),
            errors: errors.iter().map(|e| (*e).to_string()).collect(),
            warnings: warnings.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    #[test]
    fn test_buckets_are_exclusive() {
        let results = vec![
            result("clean", &[], &[]),
            result("warned", &[], &["w"]),
            result("failed", &["e"], &["w"]),
            result("failed-too", &["e"], &[]),
        ];
        let summary = ValidationSummary::from_results(&results);
        assert_eq!(
            summary,
            ValidationSummary {
                passed: 1,
                warned: 1,
                failed: 2,
                skipped: 0,
            }
        );
        assert_eq!(summary.total(), results.len());
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(ValidationSummary::default().outcome(), Outcome::NoSkills);
        assert!(!Outcome::NoSkills.is_success());

        let clean = ValidationSummary::from_results(&[result("a", &[], &[])]);
        assert_eq!(clean.outcome(), Outcome::Passed);
        assert!(clean.outcome().is_success());

        let warned = clean.with(&result("b", &[], &["w"]));
        assert_eq!(warned.outcome(), Outcome::PassedWithWarnings);
        assert!(warned.outcome().is_success());

        let failed = warned.with(&result("c", &["e"], &[]));
        assert_eq!(failed.outcome(), Outcome::Failed);
        assert!(!failed.outcome().is_success());
    }

    #[test]
    fn test_skipped_folders_are_not_an_empty_collection() {
        let summary = ValidationSummary::from_results(&[]).with_skipped(1);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.outcome(), Outcome::Passed);
        assert!(summary.outcome().is_success());
    }

    #[test]
    fn test_render_result() {
        assert_eq!(render_result(&result("a", &[], &[])), "✅ a");
        assert_eq!(
            render_result(&result("b", &[], &["w1", "w2"])),
            "⚠️  b\n   - w1\n   - w2"
        );
        // Errors take precedence over warnings
        assert_eq!(render_result(&result("c", &["e"], &["w"])), "❌ c\n   - e");
    }

    #[test]
    fn test_render_summary() {
        let summary = ValidationSummary {
            passed: 3,
            warned: 1,
            failed: 0,
            skipped: 2,
        };
        let text = summary.render();
        assert!(text.contains("Total Skills: 4"));
        assert!(text.contains("✅ Passed: 3"));
        assert!(text.contains("⚠️  Warnings: 1"));
        assert!(text.contains("❌ Failed: 0"));
        assert!(text.ends_with("⚠️  Validation passed with warnings."));
    }
}
