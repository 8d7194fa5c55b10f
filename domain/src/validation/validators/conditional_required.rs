//! Conditional-required validator
//!
//! Typical use: a radio question "Is an agent acting for you?" that reveals an
//! "Agent name" input when "yes" is chosen. The input is required only then.

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::validation::check::{CheckSet, Condition, FieldCheck, Rule};
use crate::validation::validator::Validator;

/// Requires `field` when `depends_on` was answered with `equals`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRequiredValidator {
    field: String,
    depends_on: String,
    equals: String,
    message: String,
}

impl ConditionalRequiredValidator {
    pub fn new(
        field: impl Into<String>,
        depends_on: impl Into<String>,
        equals: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            depends_on: depends_on.into(),
            equals: equals.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn depends_on(&self) -> &str {
        &self.depends_on
    }
}

impl Validator for ConditionalRequiredValidator {
    fn name(&self) -> &'static str {
        "conditional-required"
    }

    fn validate(&self, _question: &Question, response: &JourneyResponse) -> CheckSet {
        let condition = Condition::new(&self.depends_on, &self.equals)
            .with_saved_answer(response.answer(&self.depends_on).cloned());

        CheckSet::Single(Box::new(
            FieldCheck::new(&self.field, Rule::Present, &self.message).when(condition),
        ))
    }

    fn referenced_fields(&self, _question: &Question) -> Vec<String> {
        vec![self.field.clone(), self.depends_on.clone()]
    }

    fn conditional_field(&self) -> Option<(String, Condition)> {
        Some((
            self.field.clone(),
            Condition::new(&self.depends_on, &self.equals),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::FieldValue;
    use crate::validation::submission::FormSubmission;

    fn validator() -> ConditionalRequiredValidator {
        ConditionalRequiredValidator::new(
            "agent_name",
            "has_agent",
            "yes",
            "Enter the agent's name",
        )
    }

    fn question() -> Question {
        Question::new("Agent", "Is an agent acting for you?", "has_agent", "radio")
            .with_auxiliary_field("agent_name")
    }

    async fn is_valid(response: &JourneyResponse, submission: &FormSubmission) -> bool {
        match validator().validate(&question(), response) {
            CheckSet::Single(check) => check.run(submission).await.unwrap().is_valid(),
            other => panic!("unexpected check set: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_required_when_condition_posted() {
        let response = JourneyResponse::new("j", "r");
        let submission = FormSubmission::new("s", "has_agent").with_field("has_agent", "yes");
        assert!(!is_valid(&response, &submission).await);

        let filled = submission.with_field("agent_name", "Jo Bloggs");
        assert!(is_valid(&response, &filled).await);
    }

    #[tokio::test]
    async fn test_not_required_when_condition_false() {
        let response = JourneyResponse::new("j", "r");
        let submission = FormSubmission::new("s", "has_agent").with_field("has_agent", "no");
        assert!(is_valid(&response, &submission).await);
    }

    #[tokio::test]
    async fn test_condition_read_from_saved_answer() {
        let mut response = JourneyResponse::new("j", "r");
        response
            .set_answer("has_agent", FieldValue::text("yes"))
            .unwrap();
        let submission = FormSubmission::new("s", "agent_name");
        assert!(!is_valid(&response, &submission).await);
    }

    #[test]
    fn test_conditional_field_is_optional() {
        let validator = validator();
        assert!(!validator.requires_answer());

        let (field, condition) = validator.conditional_field().unwrap();
        assert_eq!(field, "agent_name");
        assert_eq!(condition, Condition::new("has_agent", "yes"));
    }

    #[test]
    fn test_referenced_fields() {
        assert_eq!(
            validator().referenced_fields(&question()),
            vec!["agent_name", "has_agent"]
        );
    }
}
