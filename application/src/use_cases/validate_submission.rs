//! Validate Submission use case
//!
//! The validation pipeline: resolve the question named by the submission,
//! run its validators in declared order, stop at the first one that reports
//! an error.

use crate::ports::journey_provider::JourneyProvider;
use crate::ports::progress::{NoProgress, ValidationNotifier};
use forms_domain::{
    CheckError, CheckSet, DomainError, FieldError, FormSubmission, JourneyResponse,
    PipelineState, ValidationErrors, ValidationOutcome,
};
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal errors that abort a pipeline run
///
/// A submission that merely fails validation is not an error: it yields
/// [`ValidationOutcome::Failed`] with the field errors on the submission.
#[derive(Error, Debug)]
pub enum ValidateSubmissionError {
    #[error("Unknown question: section '{section}', question '{question}'")]
    UnknownQuestion { section: String, question: String },

    #[error("Validator '{validator}' could not run: {source}")]
    CheckFailed {
        validator: String,
        #[source]
        source: CheckError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ValidateSubmissionError {
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, ValidateSubmissionError::UnknownQuestion { .. })
    }
}

/// Use case for validating one posted question
pub struct ValidateSubmissionUseCase {
    journey: Arc<dyn JourneyProvider>,
}

impl ValidateSubmissionUseCase {
    pub fn new(journey: Arc<dyn JourneyProvider>) -> Self {
        Self { journey }
    }

    /// Execute the pipeline with default (no-op) progress
    pub async fn execute(
        &self,
        submission: &mut FormSubmission,
        response: &JourneyResponse,
    ) -> Result<ValidationOutcome, ValidateSubmissionError> {
        self.execute_with_progress(submission, response, &NoProgress)
            .await
    }

    /// Execute the pipeline, then hand the result to `continuation` exactly once
    ///
    /// The continuation sees the submission with its accumulated errors,
    /// whatever the result.
    pub async fn execute_then<T>(
        &self,
        submission: &mut FormSubmission,
        response: &JourneyResponse,
        continuation: impl FnOnce(
            Result<ValidationOutcome, ValidateSubmissionError>,
            &FormSubmission,
        ) -> T,
    ) -> T {
        let result = self.execute(submission, response).await;
        continuation(result, submission)
    }

    /// Execute the pipeline with progress callbacks
    ///
    /// Errors found by the failing validator replace whatever errors the
    /// submission carried before; a passing run leaves it with none.
    pub async fn execute_with_progress(
        &self,
        submission: &mut FormSubmission,
        response: &JourneyResponse,
        progress: &dyn ValidationNotifier,
    ) -> Result<ValidationOutcome, ValidateSubmissionError> {
        transition(progress, PipelineState::Pending);
        submission.clear_errors();
        response.ensure_journey(self.journey.journey().id())?;

        transition(progress, PipelineState::Resolving);
        debug!(
            "Resolving question '{}' in section '{}'",
            submission.question(),
            submission.section()
        );
        let Some(question) = self
            .journey
            .get_question_by_section_and_name(submission.section(), submission.question())
        else {
            warn!(
                "Unknown question: section '{}', question '{}'",
                submission.section(),
                submission.question()
            );
            return Err(ValidateSubmissionError::UnknownQuestion {
                section: submission.section().to_string(),
                question: submission.question().to_string(),
            });
        };

        transition(progress, PipelineState::Validating);
        for (index, validator) in question.validators().iter().enumerate() {
            let checks = validator.validate(question, response);
            debug!(
                "Validator {} '{}' on '{}': {:?}",
                index,
                validator.name(),
                question.field_name(),
                checks
            );
            progress.on_validator_start(index, validator.name(), checks.pending());

            let errors = match run_check_set(checks, submission).await {
                Ok(errors) => errors,
                Err(source) => {
                    warn!("Validator '{}' could not run: {}", validator.name(), source);
                    return Err(ValidateSubmissionError::CheckFailed {
                        validator: validator.name().to_string(),
                        source,
                    });
                }
            };

            let passed = errors.is_empty();
            progress.on_validator_complete(index, validator.name(), passed);

            if !passed {
                info!(
                    "Question '{}' failed validator '{}' with {} error(s)",
                    question.field_name(),
                    validator.name(),
                    errors.len()
                );
                submission.record_errors(errors.into_iter().collect::<ValidationErrors>());
                transition(progress, PipelineState::Failed);
                return Ok(ValidationOutcome::Failed {
                    validator_index: index,
                    validator: validator.name().to_string(),
                });
            }
        }

        info!("Question '{}' passed validation", question.field_name());
        transition(progress, PipelineState::Passed);
        Ok(ValidationOutcome::Passed)
    }
}

fn transition(progress: &dyn ValidationNotifier, state: PipelineState) {
    debug!("Pipeline state: {}", state);
    progress.on_state(state);
}

/// Run one validator's checks and collect the field errors they report
///
/// A list of checks is launched together and every check settles before the
/// results are inspected. The first routine failure, in declared order,
/// is returned.
async fn run_check_set(
    checks: CheckSet,
    submission: &FormSubmission,
) -> Result<Vec<FieldError>, CheckError> {
    match checks {
        CheckSet::Evaluated(result) => Ok(result.into_errors()),
        CheckSet::Single(check) => Ok(check.run(submission).await?.into_errors()),
        CheckSet::Checks(checks) => {
            let results = join_all(checks.iter().map(|check| check.run(submission))).await;
            let mut errors = Vec::new();
            for result in results {
                errors.extend(result?.into_errors());
            }
            Ok(errors)
        }
    }
}
