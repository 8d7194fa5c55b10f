//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod start_journey;
pub mod submit_journey;
pub mod validate_submission;

#[cfg(test)]
pub(crate) mod test_support;
