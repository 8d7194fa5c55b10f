//! Application layer for dynamic-forms
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    journey_provider::JourneyProvider,
    progress::{NoProgress, ValidationNotifier},
    response_store::{ResponseStore, StoreError},
};
pub use use_cases::answer_question::{
    AnswerQuestionError, AnswerQuestionOutput, AnswerQuestionUseCase, NextStep,
};
pub use use_cases::start_journey::{StartJourneyError, StartJourneyInput, StartJourneyUseCase};
pub use use_cases::submit_journey::{SubmitJourneyError, SubmitJourneyUseCase};
pub use use_cases::validate_submission::{ValidateSubmissionError, ValidateSubmissionUseCase};
