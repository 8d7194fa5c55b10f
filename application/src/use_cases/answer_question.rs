//! Answer Question use case
//!
//! Validates a posted question and, when it passes, saves its fields into
//! the stored journey response and works out where the journey goes next.

use super::validate_submission::{ValidateSubmissionError, ValidateSubmissionUseCase};
use crate::ports::journey_provider::JourneyProvider;
use crate::ports::progress::{NoProgress, ValidationNotifier};
use crate::ports::response_store::{ResponseStore, StoreError};
use forms_domain::{
    DomainError, FieldValue, FormSubmission, JourneyResponse, Question, ValidationErrors,
    ValidationOutcome,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    #[error("No journey response found for '{0}'; start the journey first")]
    NotStarted(String),

    #[error(transparent)]
    Validation(#[from] ValidateSubmissionError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where the journey goes after a question was posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum NextStep {
    /// Show this question next
    Question { section: String, question: String },
    /// Every question has been visited; show the summary page
    CheckAnswers,
    /// Show the same question again with these errors
    Reprompt { errors: ValidationErrors },
}

/// Output of the AnswerQuestion use case
#[derive(Debug, Clone)]
pub struct AnswerQuestionOutput {
    pub outcome: ValidationOutcome,
    pub next: NextStep,
    /// The response as stored after this answer
    pub response: JourneyResponse,
}

/// Use case for answering one question of a stored journey response
pub struct AnswerQuestionUseCase {
    journey: Arc<dyn JourneyProvider>,
    store: Arc<dyn ResponseStore>,
    pipeline: ValidateSubmissionUseCase,
}

impl AnswerQuestionUseCase {
    pub fn new(journey: Arc<dyn JourneyProvider>, store: Arc<dyn ResponseStore>) -> Self {
        Self {
            pipeline: ValidateSubmissionUseCase::new(Arc::clone(&journey)),
            journey,
            store,
        }
    }

    pub async fn execute(
        &self,
        reference: &str,
        submission: &mut FormSubmission,
    ) -> Result<AnswerQuestionOutput, AnswerQuestionError> {
        self.execute_with_progress(reference, submission, &NoProgress)
            .await
    }

    /// Execute with progress callbacks for the validation run
    ///
    /// A failed validation leaves the stored response untouched.
    pub async fn execute_with_progress(
        &self,
        reference: &str,
        submission: &mut FormSubmission,
        progress: &dyn ValidationNotifier,
    ) -> Result<AnswerQuestionOutput, AnswerQuestionError> {
        let mut response = self
            .store
            .load(reference)
            .await?
            .ok_or_else(|| AnswerQuestionError::NotStarted(reference.to_string()))?;
        if response.is_submitted() {
            return Err(DomainError::ResponseSubmitted(reference.to_string()).into());
        }

        let outcome = self
            .pipeline
            .execute_with_progress(submission, &response, progress)
            .await?;

        if !outcome.is_passed() {
            debug!("Re-prompting '{}' for '{}'", submission.question(), reference);
            return Ok(AnswerQuestionOutput {
                outcome,
                next: NextStep::Reprompt {
                    errors: submission.errors().clone(),
                },
                response,
            });
        }

        let journey = self.journey.journey();
        let question = journey.require_question(submission.section(), submission.question())?;
        save_answer(question, submission, &mut response)?;
        self.store.save(&response).await?;
        info!(
            "Saved answer to '{}' for '{}'",
            question.field_name(),
            reference
        );

        let next = match journey.next_question(submission.section(), submission.question())? {
            Some((section, next)) => NextStep::Question {
                section: section.name().to_string(),
                question: next.field_name().to_string(),
            },
            None => NextStep::CheckAnswers,
        };

        Ok(AnswerQuestionOutput {
            outcome,
            next,
            response,
        })
    }
}

/// Copy the question's fields from the body into the response
///
/// Fields the question owns but that were not posted are cleared so stale
/// answers do not linger. So are conditional fields whose condition does not
/// hold, even when a value for them was posted.
fn save_answer(
    question: &Question,
    submission: &FormSubmission,
    response: &mut JourneyResponse,
) -> Result<(), DomainError> {
    let hidden: Vec<String> = question
        .validators()
        .iter()
        .filter_map(|v| v.conditional_field())
        .filter(|(_, condition)| {
            let saved = response.answer(&condition.field).cloned();
            !condition.clone().with_saved_answer(saved).holds(submission)
        })
        .map(|(field, _)| field)
        .collect();

    let mut posted: Vec<(String, FieldValue)> = Vec::new();
    let mut cleared = Vec::new();
    for field in question.answer_fields() {
        match submission.field(&field) {
            Some(value) if !value.is_empty() && !hidden.contains(&field) => {
                posted.push((field, value.clone()))
            }
            _ => cleared.push(field),
        }
    }
    if !hidden.is_empty() {
        debug!("Clearing hidden field(s): {}", hidden.join(", "));
    }

    response.merge_answers(posted)?;
    for field in cleared {
        response.remove_answer(&field)?;
    }
    Ok(())
}
