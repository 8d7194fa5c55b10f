//! Journey definition file format
//!
//! A journey is declared in TOML and turned into a domain [`Journey`]:
//!
//! ```toml
//! id = "crown-development"
//! title = "Apply for a Crown Development"
//!
//! [[sections]]
//! name = "applicant"
//! title = "About you"
//!
//! [[sections.questions]]
//! field_name = "full_name"
//! title = "Your name"
//! question = "What is your full name?"
//! view_folder = "single-line-input"
//!
//! [[sections.questions.validators]]
//! type = "required"
//! message = "Enter your full name"
//! ```

use forms_domain::{
    ConditionalRequiredValidator, ConfirmationCheckboxValidator, DateValidator, DomainError,
    Journey, PatternValidator, Question, QuestionKind, RequiredValidator, Section,
    StringLengthValidator, Validator,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading a journey definition
#[derive(Error, Debug)]
pub enum JourneyDefinitionError {
    #[error("Failed to read journey definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid journey definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid pattern on question '{question}': {source}")]
    InvalidPattern {
        question: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JourneyDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDefinition {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionDefinition {
    #[serde(default)]
    pub kind: QuestionKind,
    pub field_name: String,
    pub title: String,
    pub question: String,
    pub view_folder: Option<String>,
    pub hint: Option<String>,
    pub label: Option<String>,
    pub html: Option<String>,
    pub autocomplete: Option<String>,
    /// Extra inputs rendered with the question (conditional reveals)
    #[serde(default)]
    pub auxiliary_fields: Vec<String>,
    #[serde(default)]
    pub validators: Vec<ValidatorDefinition>,
}

/// One validator entry, selected by its `type` key
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
pub enum ValidatorDefinition {
    Required {
        message: String,
        field: Option<String>,
    },
    ConfirmationCheckbox {
        /// Defaults to the question's field
        checkbox_name: Option<String>,
        message: Option<String>,
    },
    ConditionalRequired {
        field: String,
        depends_on: String,
        equals: String,
        message: String,
    },
    StringLength {
        min: Option<usize>,
        min_message: Option<String>,
        max: Option<usize>,
        max_message: Option<String>,
        field: Option<String>,
    },
    Pattern {
        pattern: String,
        message: String,
        field: Option<String>,
    },
    Email {
        message: String,
        field: Option<String>,
    },
    Postcode {
        message: String,
        field: Option<String>,
    },
    Date {
        missing_message: String,
        invalid_message: String,
    },
}

impl JourneyDefinition {
    pub fn from_toml(content: &str) -> Result<Self, JourneyDefinitionError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the domain journey, checking every journey invariant
    pub fn into_journey(self) -> Result<Journey, JourneyDefinitionError> {
        let sections = self
            .sections
            .into_iter()
            .map(SectionDefinition::into_section)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Journey::new(self.id, self.title, sections)?)
    }
}

impl SectionDefinition {
    fn into_section(self) -> Result<Section, JourneyDefinitionError> {
        let mut section = Section::new(self.name, self.title);
        for question in self.questions {
            section = section.with_question(question.into_question()?);
        }
        Ok(section)
    }
}

impl QuestionDefinition {
    fn into_question(self) -> Result<Question, JourneyDefinitionError> {
        let validators = self
            .validators
            .into_iter()
            .map(|v| v.into_validator(&self.field_name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut question = Question::of_kind(
            self.kind,
            self.title,
            self.question,
            self.field_name,
            self.view_folder,
        )?
        .with_validators(validators);

        if let Some(hint) = self.hint {
            question = question.with_hint(hint);
        }
        if let Some(label) = self.label {
            question = question.with_label(label);
        }
        if let Some(html) = self.html {
            question = question.with_html(html);
        }
        if let Some(autocomplete) = self.autocomplete {
            question = question.with_autocomplete(autocomplete);
        }
        for field in self.auxiliary_fields {
            question = question.with_auxiliary_field(field);
        }
        Ok(question)
    }
}

impl ValidatorDefinition {
    fn into_validator(
        self,
        question: &str,
    ) -> Result<Arc<dyn Validator>, JourneyDefinitionError> {
        let invalid_pattern = |source| JourneyDefinitionError::InvalidPattern {
            question: question.to_string(),
            source,
        };

        let validator: Arc<dyn Validator> = match self {
            ValidatorDefinition::Required { message, field } => {
                let validator = RequiredValidator::new(message);
                Arc::new(match field {
                    Some(field) => validator.for_field(field),
                    None => validator,
                })
            }
            ValidatorDefinition::ConfirmationCheckbox {
                checkbox_name,
                message,
            } => {
                let validator = ConfirmationCheckboxValidator::new(
                    checkbox_name.unwrap_or_else(|| question.to_string()),
                );
                Arc::new(match message {
                    Some(message) => validator.with_message(message),
                    None => validator,
                })
            }
            ValidatorDefinition::ConditionalRequired {
                field,
                depends_on,
                equals,
                message,
            } => Arc::new(ConditionalRequiredValidator::new(
                field, depends_on, equals, message,
            )),
            ValidatorDefinition::StringLength {
                min,
                min_message,
                max,
                max_message,
                field,
            } => {
                let mut validator = StringLengthValidator::new();
                if let Some(min) = min {
                    let message = min_message
                        .unwrap_or_else(|| format!("Enter at least {} characters", min));
                    validator = validator.min(min, message);
                }
                if let Some(max) = max {
                    let message = max_message
                        .unwrap_or_else(|| format!("Enter {} characters or fewer", max));
                    validator = validator.max(max, message);
                }
                if let Some(field) = field {
                    validator = validator.for_field(field);
                }
                Arc::new(validator)
            }
            ValidatorDefinition::Pattern {
                pattern,
                message,
                field,
            } => Arc::new(with_field(
                PatternValidator::new(&pattern, message).map_err(invalid_pattern)?,
                field,
            )),
            ValidatorDefinition::Email { message, field } => Arc::new(with_field(
                PatternValidator::email(message).map_err(invalid_pattern)?,
                field,
            )),
            ValidatorDefinition::Postcode { message, field } => Arc::new(with_field(
                PatternValidator::postcode(message).map_err(invalid_pattern)?,
                field,
            )),
            ValidatorDefinition::Date {
                missing_message,
                invalid_message,
            } => Arc::new(DateValidator::new(missing_message, invalid_message)),
        };
        Ok(validator)
    }
}

fn with_field(validator: PatternValidator, field: Option<String>) -> PatternValidator {
    match field {
        Some(field) => validator.for_field(field),
        None => validator,
    }
}
