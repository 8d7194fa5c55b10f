//! Validator trait

use super::check::{CheckSet, Condition};
use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;

/// A rule object attached to a question
///
/// Validators are stateless configuration (messages, field names). At
/// validation time they receive the question they belong to and the user's
/// journey response, and produce the checks to run against the submission.
/// New variants implement this trait; the pipeline does not change.
pub trait Validator: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs and configuration errors
    fn name(&self) -> &'static str;

    /// Produce the checks for this question and response
    fn validate(&self, question: &Question, response: &JourneyResponse) -> CheckSet;

    /// Field names this validator reads or reports against
    ///
    /// Used when a journey is assembled to reject validators pointing at
    /// fields no question in the journey owns. Defaults to the question's
    /// own field.
    fn referenced_fields(&self, question: &Question) -> Vec<String> {
        vec![question.field_name().to_string()]
    }

    /// Whether the question must hold an answer before the journey is complete
    ///
    /// Questions whose validators all accept a blank answer are optional.
    fn requires_answer(&self) -> bool {
        false
    }

    /// An auxiliary field that only applies while `Condition` holds
    ///
    /// When the condition is false the field is hidden, and a posted value
    /// for it is not saved.
    fn conditional_field(&self) -> Option<(String, Condition)> {
        None
    }
}
