/// Outcome bucket of a single validated skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Passed,
    Warned,
    Failed,
}

/// Errors and warnings collected for one skill document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub id: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Any error fails the skill; warnings alone only flag it.
    pub fn status(&self) -> ValidationStatus {
        if !self.errors.is_empty() {
            ValidationStatus::Failed
        } else if !self.warnings.is_empty() {
            ValidationStatus::Warned
        } else {
            ValidationStatus::Passed
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
