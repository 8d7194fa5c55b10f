//! String length validator

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::validation::check::{Check, CheckResult, CheckSet, FieldCheck, Rule};
use crate::validation::validator::Validator;

/// Bounds the number of characters entered
///
/// Blank input passes; pair with [`RequiredValidator`](super::RequiredValidator)
/// when the field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringLengthValidator {
    min: Option<(usize, String)>,
    max: Option<(usize, String)>,
    field: Option<String>,
}

impl StringLengthValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min = Some((min, message.into()));
        self
    }

    pub fn max(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max = Some((max, message.into()));
        self
    }

    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    fn target<'a>(&'a self, question: &'a Question) -> &'a str {
        self.field.as_deref().unwrap_or(question.field_name())
    }
}

impl Validator for StringLengthValidator {
    fn name(&self) -> &'static str {
        "string-length"
    }

    fn validate(&self, question: &Question, _response: &JourneyResponse) -> CheckSet {
        let field = self.target(question);
        let mut checks: Vec<Box<dyn Check>> = Vec::new();

        if let Some((min, message)) = &self.min {
            checks.push(Box::new(
                FieldCheck::new(field, Rule::MinLength(*min), message).skip_if_empty(),
            ));
        }
        if let Some((max, message)) = &self.max {
            checks.push(Box::new(
                FieldCheck::new(field, Rule::MaxLength(*max), message).skip_if_empty(),
            ));
        }

        if checks.is_empty() {
            // No bounds configured
            return CheckSet::Evaluated(CheckResult::valid());
        }
        CheckSet::Checks(checks)
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
        Question::new("Description", "Describe the development", "description", "textarea")
    }

    async fn error_messages(validator: &StringLengthValidator, text: &str) -> Vec<String> {
        let response = JourneyResponse::new("j", "r");
        let submission = FormSubmission::new("s", "description").with_field("description", text);
        let mut messages = Vec::new();
        match validator.validate(&question(), &response) {
            CheckSet::Checks(checks) => {
                for check in checks {
                    let result = check.run(&submission).await.unwrap();
                    messages.extend(result.into_errors().into_iter().map(|e| e.message));
                }
            }
            CheckSet::Evaluated(result) => {
                messages.extend(result.into_errors().into_iter().map(|e| e.message));
            }
            CheckSet::Single(_) => panic!("length validator never yields a single check"),
        }
        messages
    }

    #[tokio::test]
    async fn test_bounds() {
        let validator = StringLengthValidator::new()
            .min(3, "Too short")
            .max(5, "Too long");

        assert_eq!(error_messages(&validator, "ab").await, vec!["Too short"]);
        assert_eq!(error_messages(&validator, "abcdef").await, vec!["Too long"]);
        assert!(error_messages(&validator, "abcd").await.is_empty());
        assert!(error_messages(&validator, "").await.is_empty());
    }

    #[test]
    fn test_two_bounds_yield_two_checks() {
        let validator = StringLengthValidator::new().min(1, "a").max(2, "b");
        let set = validator.validate(&question(), &JourneyResponse::new("j", "r"));
        assert_eq!(set.pending(), 2);
    }

    #[test]
    fn test_unbounded_is_pre_evaluated() {
        let set =
            StringLengthValidator::new().validate(&question(), &JourneyResponse::new("j", "r"));
        assert!(matches!(set, CheckSet::Evaluated(ref r) if r.is_valid()));
    }
}
