//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown question: section '{section}', question '{question}'")]
    UnknownQuestion { section: String, question: String },

    #[error("Duplicate section: {0}")]
    DuplicateSection(String),

    #[error("Duplicate question '{field_name}' in section '{section}'")]
    DuplicateQuestion { section: String, field_name: String },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Validator '{validator}' on question '{question}' references unknown field '{field}'")]
    UnknownFieldReference {
        validator: String,
        question: String,
        field: String,
    },

    #[error("Journey response '{0}' has already been submitted")]
    ResponseSubmitted(String),

    #[error("Journey response belongs to journey '{actual}', expected '{expected}'")]
    JourneyMismatch { expected: String, actual: String },
}

impl DomainError {
    /// Check if this error means the requested question does not exist
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, DomainError::UnknownQuestion { .. })
    }

    pub(crate) fn unknown_question(section: &str, question: &str) -> Self {
        DomainError::UnknownQuestion {
            section: section.to_string(),
            question: question.to_string(),
        }
    }
}
