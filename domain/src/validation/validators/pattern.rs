//! Format validator backed by a regular expression

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::validation::check::{CheckSet, FieldCheck, Rule};
use crate::validation::validator::Validator;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const UK_POSTCODE_PATTERN: &str = r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$";

/// Fails when a non-blank value does not match `pattern`
#[derive(Debug, Clone)]
pub struct PatternValidator {
    name: &'static str,
    pattern: Regex,
    message: String,
    field: Option<String>,
}

impl PatternValidator {
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Self::named("pattern", pattern, message)
    }

    /// Loose email shape check (something@something.tld)
    pub fn email(message: impl Into<String>) -> Result<Self, regex::Error> {
        Self::named("email", EMAIL_PATTERN, message)
    }

    /// UK postcode, with or without the separating space
    pub fn postcode(message: impl Into<String>) -> Result<Self, regex::Error> {
        Self::named("postcode", UK_POSTCODE_PATTERN, message)
    }

    fn named(
        name: &'static str,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            message: message.into(),
            field: None,
        })
    }

    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn target<'a>(&'a self, question: &'a Question) -> &'a str {
        self.field.as_deref().unwrap_or(question.field_name())
    }
}

impl Validator for PatternValidator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, question: &Question, _response: &JourneyResponse) -> CheckSet {
        CheckSet::Single(Box::new(
            FieldCheck::new(
                self.target(question),
                Rule::Matches(self.pattern.clone()),
                &self.message,
            )
            .skip_if_empty(),
        ))
    }

    fn referenced_fields(&self, question: &Question) -> Vec<String> {
        vec![self.target(question).to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::submission::FormSubmission;

    async fn passes(validator: &PatternValidator, value: &str) -> bool {
        let question = Question::new("Contact", "Contact detail", "contact", "single-line-input");
        let submission = FormSubmission::new("s", "contact").with_field("contact", value);
        match validator.validate(&question, &JourneyResponse::new("j", "r")) {
            CheckSet::Single(check) => check.run(&submission).await.unwrap().is_valid(),
            other => panic!("unexpected check set: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_email_preset() {
        let validator = PatternValidator::email("Enter a valid email").unwrap();
        assert_eq!(validator.name(), "email");
        assert!(passes(&validator, "someone@example.gov.uk").await);
        assert!(!passes(&validator, "someone.example.gov.uk").await);
        assert!(!passes(&validator, "some one@example.com").await);
    }

    #[tokio::test]
    async fn test_postcode_preset() {
        let validator = PatternValidator::postcode("Enter a real postcode").unwrap();
        assert!(passes(&validator, "SW1A 1AA").await);
        assert!(passes(&validator, "bs1 6pn").await);
        assert!(passes(&validator, "M11AE").await);
        assert!(!passes(&validator, "12345").await);
    }

    #[tokio::test]
    async fn test_blank_value_is_left_to_required() {
        let validator = PatternValidator::new(r"^\d{6}$", "Six digits").unwrap();
        assert!(passes(&validator, "").await);
        assert!(passes(&validator, "123456").await);
        assert!(!passes(&validator, "12345").await);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(PatternValidator::new("(unclosed", "m").is_err());
    }
}
