//! Question entity

use super::kind::{QuestionKind, date_part_field};
use crate::core::error::DomainError;
use crate::journey::response::JourneyResponse;
use crate::validation::validator::Validator;
use std::sync::Arc;

/// A single form field's definition (Entity)
///
/// Built once when the journey is assembled and never mutated afterwards;
/// the `with_*` methods are construction-time builders that consume `self`.
#[derive(Debug, Clone)]
pub struct Question {
    kind: QuestionKind,
    title: String,
    question: String,
    field_name: String,
    view_folder: String,
    validators: Vec<Arc<dyn Validator>>,
    hint: Option<String>,
    label: Option<String>,
    html: Option<String>,
    autocomplete: Option<String>,
    /// Extra body fields rendered with this question (e.g. conditional inputs)
    auxiliary_fields: Vec<String>,
}

impl Question {
    /// Create a standard question rendered with `view_folder`
    pub fn new(
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
        view_folder: impl Into<String>,
    ) -> Self {
        Self {
            kind: QuestionKind::Standard,
            title: title.into(),
            question: question.into(),
            field_name: field_name.into(),
            view_folder: view_folder.into(),
            validators: Vec::new(),
            hint: None,
            label: None,
            html: None,
            autocomplete: None,
            auxiliary_fields: Vec::new(),
        }
    }

    /// Document upload question
    pub fn attachment(
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self::fixed(QuestionKind::Attachment, title, question, field_name)
    }

    /// Yes/no question
    pub fn boolean(
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self::fixed(QuestionKind::Boolean, title, question, field_name)
    }

    /// Day/month/year question
    pub fn date(
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self::fixed(QuestionKind::Date, title, question, field_name)
    }

    /// Create a question of any kind, as read from a journey definition
    ///
    /// Standard questions need a view folder. Specialized kinds use their
    /// fixed folder and reject a conflicting one.
    pub fn of_kind(
        kind: QuestionKind,
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
        view_folder: Option<String>,
    ) -> Result<Self, DomainError> {
        let field_name = field_name.into();
        match (kind.fixed_view_folder(), view_folder) {
            (None, Some(folder)) if !folder.trim().is_empty() => {
                Ok(Self::new(title, question, field_name, folder))
            }
            (None, _) => Err(DomainError::InvalidQuestion(format!(
                "standard question '{}' needs a view folder",
                field_name
            ))),
            (Some(fixed), Some(folder)) if folder != fixed => {
                Err(DomainError::InvalidQuestion(format!(
                    "{} question '{}' always uses view folder '{}', got '{}'",
                    kind, field_name, fixed, folder
                )))
            }
            (Some(_), _) => Ok(Self::fixed(kind, title, question, field_name)),
        }
    }

    fn fixed(
        kind: QuestionKind,
        title: impl Into<String>,
        question: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        let view_folder = kind.fixed_view_folder().unwrap_or_default();
        Self {
            kind,
            ..Self::new(title, question, field_name, view_folder)
        }
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn with_validators(mut self, validators: Vec<Arc<dyn Validator>>) -> Self {
        self.validators.extend(validators);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn with_auxiliary_field(mut self, field: impl Into<String>) -> Self {
        self.auxiliary_fields.push(field.into());
        self
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Prompt text shown to the user
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn view_folder(&self) -> &str {
        &self.view_folder
    }

    /// Validators in declared order
    pub fn validators(&self) -> &[Arc<dyn Validator>] {
        &self.validators
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn autocomplete(&self) -> Option<&str> {
        self.autocomplete.as_deref()
    }

    pub fn auxiliary_fields(&self) -> &[String] {
        &self.auxiliary_fields
    }

    /// Body fields that carry the answer itself
    ///
    /// A date question posts three part fields instead of its own name.
    pub fn primary_fields(&self) -> Vec<String> {
        match self.kind {
            QuestionKind::Date => ["day", "month", "year"]
                .iter()
                .map(|part| date_part_field(&self.field_name, part))
                .collect(),
            _ => vec![self.field_name.clone()],
        }
    }

    /// Every body field saved into the journey response for this question
    pub fn answer_fields(&self) -> Vec<String> {
        let mut fields = self.primary_fields();
        fields.extend(self.auxiliary_fields.iter().cloned());
        fields
    }

    /// Whether `field` belongs to this question
    pub fn owns_field(&self, field: &str) -> bool {
        field == self.field_name || self.answer_fields().iter().any(|f| f == field)
    }

    /// Whether any validator demands an answer for this question
    pub fn is_required(&self) -> bool {
        self.validators.iter().any(|v| v.requires_answer())
    }

    /// Whether the response holds a non-blank value for every primary field
    pub fn is_answered(&self, response: &JourneyResponse) -> bool {
        self.primary_fields()
            .iter()
            .all(|field| response.answer(field).is_some_and(|v| !v.is_empty()))
    }
}
