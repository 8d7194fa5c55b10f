//! Submit Journey use case

use crate::ports::journey_provider::JourneyProvider;
use crate::ports::response_store::{ResponseStore, StoreError};
use forms_domain::{DomainError, JourneyResponse};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SubmitJourneyError {
    #[error("No journey response found for '{0}'")]
    NotStarted(String),

    #[error("Journey is incomplete; unanswered: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case that freezes a complete journey response
pub struct SubmitJourneyUseCase {
    journey: Arc<dyn JourneyProvider>,
    store: Arc<dyn ResponseStore>,
}

impl SubmitJourneyUseCase {
    pub fn new(journey: Arc<dyn JourneyProvider>, store: Arc<dyn ResponseStore>) -> Self {
        Self { journey, store }
    }

    pub async fn execute(&self, reference: &str) -> Result<JourneyResponse, SubmitJourneyError> {
        let journey = self.journey.journey();
        let mut response = self
            .store
            .load(reference)
            .await?
            .ok_or_else(|| SubmitJourneyError::NotStarted(reference.to_string()))?;
        response.ensure_journey(journey.id())?;

        let missing: Vec<String> = journey
            .unanswered_questions(&response)
            .map(|(_, question)| question.field_name().to_string())
            .collect();
        if !missing.is_empty() {
            warn!(
                "Refusing to submit '{}': {} question(s) unanswered",
                reference,
                missing.len()
            );
            return Err(SubmitJourneyError::Incomplete { missing });
        }

        response.submit()?;
        self.store.save(&response).await?;
        info!("Submitted journey response '{}'", reference);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::answer_question::AnswerQuestionUseCase;
    use crate::use_cases::test_support::{MockStore, journey};
    use forms_domain::{
        FieldValue, FormSubmission, Journey, Question, RequiredValidator, Section,
        StringLengthValidator,
    };

    fn complete() -> JourneyResponse {
        let mut response = JourneyResponse::new("planning", "ABC");
        response
            .merge_answers(vec![
                ("full_name".to_string(), FieldValue::text("Ada")),
                ("has_agent".to_string(), FieldValue::text("no")),
                ("agree".to_string(), FieldValue::text("on")),
            ])
            .unwrap();
        response
    }

    #[tokio::test]
    async fn test_submit_complete_response() {
        let store = Arc::new(MockStore::with(complete()));
        let use_case = SubmitJourneyUseCase::new(Arc::new(journey()), store.clone());

        let submitted = use_case.execute("ABC").await.unwrap();
        assert!(submitted.is_submitted());
        assert!(store.get("ABC").unwrap().is_submitted());

        let err = use_case.execute("ABC").await.unwrap_err();
        assert!(matches!(
            err,
            SubmitJourneyError::Domain(DomainError::ResponseSubmitted(_))
        ));
    }

    #[tokio::test]
    async fn test_incomplete_response_lists_missing_fields() {
        let mut response = JourneyResponse::new("planning", "ABC");
        response
            .set_answer("full_name", FieldValue::text("Ada"))
            .unwrap();
        let store = Arc::new(MockStore::with(response));
        let use_case = SubmitJourneyUseCase::new(Arc::new(journey()), store.clone());

        let err = use_case.execute("ABC").await.unwrap_err();
        match err {
            SubmitJourneyError::Incomplete { missing } => {
                assert_eq!(missing, vec!["has_agent", "agree"]);
            }
            other => panic!("expected incomplete, got {:?}", other),
        }
        assert_eq!(store.saves(), 0);
        assert!(!store.get("ABC").unwrap().is_submitted());
    }

    #[tokio::test]
    async fn test_optional_question_left_blank_does_not_block_submit() {
        let journey = Journey::new(
            "feedback",
            "Give feedback",
            vec![
                Section::new("about", "About you")
                    .with_question(
                        Question::new("Name", "What is your name?", "name", "single-line-input")
                            .with_validator(RequiredValidator::new("Enter your name")),
                    )
                    .with_question(
                        Question::new("Notes", "Anything else?", "notes", "textarea")
                            .with_validator(
                                StringLengthValidator::new().max(10, "Notes are too long"),
                            ),
                    ),
            ],
        )
        .unwrap();
        let journey: Arc<dyn JourneyProvider> = Arc::new(journey);
        let store = Arc::new(MockStore::with(JourneyResponse::new("feedback", "ABC")));
        let answer = AnswerQuestionUseCase::new(Arc::clone(&journey), store.clone());

        let mut name = FormSubmission::new("about", "name").with_field("name", "Ada");
        assert!(answer.execute("ABC", &mut name).await.unwrap().outcome.is_passed());
        let mut notes = FormSubmission::new("about", "notes").with_field("notes", "");
        assert!(answer.execute("ABC", &mut notes).await.unwrap().outcome.is_passed());
        assert!(!store.get("ABC").unwrap().has_answer("notes"));

        let submitted = SubmitJourneyUseCase::new(journey, store.clone())
            .execute("ABC")
            .await
            .unwrap();
        assert!(submitted.is_submitted());
    }

    #[tokio::test]
    async fn test_submit_unknown_reference() {
        let store = Arc::new(MockStore::default());
        let use_case = SubmitJourneyUseCase::new(Arc::new(journey()), store);
        assert!(matches!(
            use_case.execute("nope").await,
            Err(SubmitJourneyError::NotStarted(_))
        ));
    }
}
