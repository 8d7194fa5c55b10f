//! Validation: submissions, checks, validators and pipeline states
//!
//! - [`submission::FormSubmission`]: the posted form plus its error side channel
//! - [`check::Check`] / [`check::CheckSet`]: executable units produced by validators
//! - [`validator::Validator`]: the polymorphic rule family
//! - [`state::PipelineState`]: states of one pipeline run

pub mod check;
pub mod errors;
pub mod state;
pub mod submission;
pub mod validator;
pub mod validators;
