//! Domain layer for dynamic-forms
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Journey
//!
//! A [`Journey`] is an ordered multi-step form made of [`Section`]s, each
//! holding [`Question`]s. Questions are addressed by `(section, question)`.
//!
//! ## Validators
//!
//! Every question carries an ordered list of [`Validator`]s. A validator
//! turns its configuration, the question and the user's [`JourneyResponse`]
//! into a [`CheckSet`]; the application layer's pipeline runs those checks
//! against the posted [`FormSubmission`] and stops at the first validator
//! that reports an error.

pub mod config;
pub mod core;
pub mod journey;
pub mod question;
pub mod validation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, value::FieldValue};
pub use journey::{entities::Journey, response::JourneyResponse, section::Section};
pub use question::{
    entities::Question,
    kind::{QuestionKind, date_part_field},
};
pub use validation::{
    check::{Check, CheckError, CheckResult, CheckSet, Condition, FieldCheck, Rule},
    errors::{FieldError, ValidationErrors},
    state::{PipelineState, ValidationOutcome},
    submission::FormSubmission,
    validator::Validator,
    validators::{
        ConditionalRequiredValidator, ConfirmationCheckboxValidator, DateCheck, DateValidator,
        PatternValidator, RequiredValidator, StringLengthValidator,
    },
};
