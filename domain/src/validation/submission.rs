//! Form submission (the inbound request the pipeline validates)

use super::errors::ValidationErrors;
use crate::core::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One posted form: route identifiers, body fields and the errors found so far
///
/// `errors` is the side channel the validation pipeline writes into. The caller
/// reads it after the pipeline hands control back to decide whether to
/// re-prompt the question or move the journey on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    section: String,
    question: String,
    #[serde(default)]
    body: BTreeMap<String, FieldValue>,
    #[serde(default, skip_serializing_if = "ValidationErrors::is_empty")]
    errors: ValidationErrors,
}

impl FormSubmission {
    pub fn new(section: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
            body: BTreeMap::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Add a body field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: BTreeMap<String, FieldValue>) -> Self {
        self.body = body;
        self
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn body(&self) -> &BTreeMap<String, FieldValue> {
        &self.body
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.body.get(name)
    }

    /// Text of a single-valued field, if posted
    pub fn field_text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Replace the accumulated errors with the result of a pipeline run
    pub fn record_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
