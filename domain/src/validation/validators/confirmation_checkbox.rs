//! Confirmation checkbox validator ("I confirm that...")

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::validation::check::{CheckSet, FieldCheck, Rule};
use crate::validation::validator::Validator;

pub const DEFAULT_MESSAGE: &str = "checkbox not checked";

/// Fails when the named checkbox was left empty or posted as false
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationCheckboxValidator {
    checkbox_name: String,
    message: String,
}

impl ConfirmationCheckboxValidator {
    pub fn new(checkbox_name: impl Into<String>) -> Self {
        Self {
            checkbox_name: checkbox_name.into(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn checkbox_name(&self) -> &str {
        &self.checkbox_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Validator for ConfirmationCheckboxValidator {
    fn name(&self) -> &'static str {
        "confirmation-checkbox"
    }

    fn validate(&self, _question: &Question, _response: &JourneyResponse) -> CheckSet {
        CheckSet::Single(Box::new(FieldCheck::new(
            &self.checkbox_name,
            Rule::Checked,
            &self.message,
        )))
    }

    fn requires_answer(&self) -> bool {
        true
    }

    fn referenced_fields(&self, _question: &Question) -> Vec<String> {
        vec![self.checkbox_name.clone()]
    }
}
