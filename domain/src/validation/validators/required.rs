//! Required-field validator

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::validation::check::{CheckSet, FieldCheck, Rule};
use crate::validation::validator::Validator;

/// Fails when nothing (or only whitespace) was entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredValidator {
    message: String,
    field: Option<String>,
}

impl RequiredValidator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Check `field` instead of the question's own field
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn target<'a>(&'a self, question: &'a Question) -> &'a str {
        self.field.as_deref().unwrap_or(question.field_name())
    }
}

impl Validator for RequiredValidator {
    fn name(&self) -> &'static str {
        "required"
    }

    fn validate(&self, question: &Question, _response: &JourneyResponse) -> CheckSet {
        CheckSet::Single(Box::new(FieldCheck::new(
            self.target(question),
            Rule::Present,
            &self.message,
        )))
    }

    fn requires_answer(&self) -> bool {
        true
    }

    fn referenced_fields(&self, question: &Question) -> Vec<String> {
        vec![self.target(question).to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::submission::FormSubmission;

    fn question() -> Question {
        Question::new("Name", "What is your name?", "full_name", "single-line-input")
    }

    async fn run(validator: &RequiredValidator, submission: &FormSubmission) -> bool {
        let response = JourneyResponse::new("journey", "ref");
        match validator.validate(&question(), &response) {
            CheckSet::Single(check) => check.run(submission).await.unwrap().is_valid(),
            other => panic!("unexpected check set: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_required_blank_fails() {
        let validator = RequiredValidator::new("Enter your name");
        let submission = FormSubmission::new("s", "full_name").with_field("full_name", " ");
        assert!(!run(&validator, &submission).await);
    }

    #[tokio::test]
    async fn test_required_present_passes() {
        let validator = RequiredValidator::new("Enter your name");
        let submission = FormSubmission::new("s", "full_name").with_field("full_name", "Ada");
        assert!(run(&validator, &submission).await);
    }

    #[test]
    fn test_referenced_fields_follow_override() {
        let q = question();
        assert_eq!(
            RequiredValidator::new("m").referenced_fields(&q),
            vec!["full_name"]
        );
        assert_eq!(
            RequiredValidator::new("m")
                .for_field("other")
                .referenced_fields(&q),
            vec!["other"]
        );
    }
}
