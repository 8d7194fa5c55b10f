//! Checks: the executable units a validator produces
//!
//! A [`Validator`](super::validator::Validator) does not look at the posted
//! form itself. It turns its configuration into a [`CheckSet`], and the
//! pipeline runs those checks against the live [`FormSubmission`].

use super::errors::FieldError;
use super::submission::FormSubmission;
use crate::core::value::FieldValue;
use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

/// Outcome of running one check (or an already-evaluated rule)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    errors: Vec<FieldError>,
}

impl CheckResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// A check routine that could not produce a result at all
///
/// This is distinct from a check that ran and found a problem with the
/// submitted value; that is a [`CheckResult`] carrying errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Check on field '{field}' failed to run: {reason}")]
    Failed { field: String, reason: String },
}

impl CheckError {
    pub fn failed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckError::Failed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// An individual executable validation unit tied to one field
#[async_trait]
pub trait Check: Send + Sync {
    /// The field this check reports against
    fn field(&self) -> &str;

    /// Run the check against the posted form
    async fn run(&self, submission: &FormSubmission) -> Result<CheckResult, CheckError>;
}

/// What a validator hands back to the pipeline
pub enum CheckSet {
    /// Independently runnable checks; the pipeline runs them together
    Checks(Vec<Box<dyn Check>>),
    /// A single check, run directly
    Single(Box<dyn Check>),
    /// A result the validator could decide without the submission
    Evaluated(CheckResult),
}

impl CheckSet {
    pub fn none() -> Self {
        CheckSet::Checks(Vec::new())
    }

    /// Number of checks that still have to run
    pub fn pending(&self) -> usize {
        match self {
            CheckSet::Checks(checks) => checks.len(),
            CheckSet::Single(_) => 1,
            CheckSet::Evaluated(_) => 0,
        }
    }
}

impl std::fmt::Debug for CheckSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckSet::Checks(checks) => f
                .debug_tuple("Checks")
                .field(&checks.iter().map(|c| c.field()).collect::<Vec<_>>())
                .finish(),
            CheckSet::Single(check) => f.debug_tuple("Single").field(&check.field()).finish(),
            CheckSet::Evaluated(result) => f.debug_tuple("Evaluated").field(result).finish(),
        }
    }
}

/// Rule applied by a [`FieldCheck`]
#[derive(Debug, Clone)]
pub enum Rule {
    /// Something non-blank was posted
    Present,
    /// Checkbox semantics, see [`FieldValue::is_truthy`]
    Checked,
    /// Every posted value has at least this many characters
    MinLength(usize),
    /// Every posted value has at most this many characters
    MaxLength(usize),
    /// Every posted value matches the pattern
    Matches(Regex),
}

impl Rule {
    fn passes(&self, value: Option<&FieldValue>) -> bool {
        match self {
            Rule::Present => value.is_some_and(|v| !v.is_empty()),
            Rule::Checked => value.is_some_and(FieldValue::is_truthy),
            Rule::MinLength(min) => each_value(value, |v| v.trim().chars().count() >= *min),
            Rule::MaxLength(max) => each_value(value, |v| v.trim().chars().count() <= *max),
            Rule::Matches(pattern) => each_value(value, |v| pattern.is_match(v.trim())),
        }
    }
}

fn each_value(value: Option<&FieldValue>, pred: impl Fn(&str) -> bool) -> bool {
    match value {
        Some(v) => v.values().into_iter().all(pred),
        None => pred(""),
    }
}

/// Gate that decides whether a check applies to this submission
///
/// The controlling field is read from the submission first. When it was not
/// posted (it belongs to an earlier question), the answer captured from the
/// journey response at validation time is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub equals: String,
    pub saved_answer: Option<FieldValue>,
}

impl Condition {
    pub fn new(field: impl Into<String>, equals: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
            saved_answer: None,
        }
    }

    pub fn with_saved_answer(mut self, answer: Option<FieldValue>) -> Self {
        self.saved_answer = answer;
        self
    }

    pub fn holds(&self, submission: &FormSubmission) -> bool {
        submission
            .field(&self.field)
            .or(self.saved_answer.as_ref())
            .is_some_and(|v| v.contains(&self.equals))
    }
}

/// The general-purpose check: one rule against one field
#[derive(Debug, Clone)]
pub struct FieldCheck {
    field: String,
    rule: Rule,
    message: String,
    skip_if_empty: bool,
    condition: Option<Condition>,
}

impl FieldCheck {
    pub fn new(field: impl Into<String>, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
            skip_if_empty: false,
            condition: None,
        }
    }

    /// Pass when nothing was posted; presence is another validator's job
    pub fn skip_if_empty(mut self) -> Self {
        self.skip_if_empty = true;
        self
    }

    /// Only apply the rule when `condition` holds
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate synchronously; [`Check::run`] delegates here
    pub fn evaluate(&self, submission: &FormSubmission) -> CheckResult {
        if let Some(condition) = &self.condition
            && !condition.holds(submission)
        {
            return CheckResult::valid();
        }

        let value = submission.field(&self.field);
        if self.skip_if_empty && value.is_none_or(FieldValue::is_empty) {
            return CheckResult::valid();
        }

        if self.rule.passes(value) {
            CheckResult::valid()
        } else {
            CheckResult::invalid(FieldError::new(&self.field, &self.message))
        }
    }
}

#[async_trait]
impl Check for FieldCheck {
    fn field(&self) -> &str {
        &self.field
    }

    async fn run(&self, submission: &FormSubmission) -> Result<CheckResult, CheckError> {
        Ok(self.evaluate(submission))
    }
}
