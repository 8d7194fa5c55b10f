//! Journey entity

use super::response::JourneyResponse;
use super::section::Section;
use crate::core::error::DomainError;
use crate::question::entities::Question;
use std::collections::HashSet;

/// The full ordered multi-step form definition (Entity)
///
/// Read-only once built. [`Journey::new`] rejects duplicate sections,
/// duplicate question names within a section, and validators that point at
/// fields no question in the journey owns.
#[derive(Debug, Clone)]
pub struct Journey {
    id: String,
    title: String,
    sections: Vec<Section>,
}

impl Journey {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, DomainError> {
        let journey = Self {
            id: id.into(),
            title: title.into(),
            sections,
        };
        journey.check_structure()?;
        journey.check_validator_references()?;
        Ok(journey)
    }

    fn check_structure(&self) -> Result<(), DomainError> {
        let mut section_names = HashSet::new();
        for section in &self.sections {
            if !section_names.insert(section.name()) {
                return Err(DomainError::DuplicateSection(section.name().to_string()));
            }

            let mut field_names = HashSet::new();
            for question in section.questions() {
                if question.field_name().trim().is_empty() {
                    return Err(DomainError::InvalidQuestion(format!(
                        "question '{}' in section '{}' has an empty field name",
                        question.title(),
                        section.name()
                    )));
                }
                if !field_names.insert(question.field_name()) {
                    return Err(DomainError::DuplicateQuestion {
                        section: section.name().to_string(),
                        field_name: question.field_name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_validator_references(&self) -> Result<(), DomainError> {
        for (_, question) in self.questions() {
            for validator in question.validators() {
                for field in validator.referenced_fields(question) {
                    let known = question.owns_field(&field)
                        || self.questions().any(|(_, other)| other.owns_field(&field));
                    if !known {
                        return Err(DomainError::UnknownFieldReference {
                            validator: validator.name().to_string(),
                            question: question.field_name().to_string(),
                            field,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Every question in journey order, with its section
    pub fn questions(&self) -> impl Iterator<Item = (&Section, &Question)> {
        self.sections
            .iter()
            .flat_map(|s| s.questions().iter().map(move |q| (s, q)))
    }

    /// Look up a question by section name and question (field) name
    pub fn get_question_by_section_and_name(
        &self,
        section_name: &str,
        question_name: &str,
    ) -> Option<&Question> {
        self.section(section_name)
            .and_then(|s| s.question(question_name))
    }

    /// Like [`Self::get_question_by_section_and_name`], but an absent question is an error
    pub fn require_question(
        &self,
        section_name: &str,
        question_name: &str,
    ) -> Result<&Question, DomainError> {
        self.get_question_by_section_and_name(section_name, question_name)
            .ok_or_else(|| DomainError::unknown_question(section_name, question_name))
    }

    pub fn first_question(&self) -> Option<(&Section, &Question)> {
        self.questions().next()
    }

    /// The question after `(section_name, question_name)` in journey order
    ///
    /// Returns `Ok(None)` after the last question.
    pub fn next_question(
        &self,
        section_name: &str,
        question_name: &str,
    ) -> Result<Option<(&Section, &Question)>, DomainError> {
        let section_index = self
            .sections
            .iter()
            .position(|s| s.name() == section_name)
            .ok_or_else(|| DomainError::unknown_question(section_name, question_name))?;
        let section = &self.sections[section_index];
        let question_index = section
            .position(question_name)
            .ok_or_else(|| DomainError::unknown_question(section_name, question_name))?;

        if let Some(next) = section.questions().get(question_index + 1) {
            return Ok(Some((section, next)));
        }

        Ok(self.sections[section_index + 1..]
            .iter()
            .find_map(|s| s.questions().first().map(|q| (s, q))))
    }

    /// Required questions without a complete answer in `response`, in journey order
    ///
    /// Optional questions never block completion, answered or not.
    pub fn unanswered_questions<'a>(
        &'a self,
        response: &'a JourneyResponse,
    ) -> impl Iterator<Item = (&'a Section, &'a Question)> + 'a {
        self.questions()
            .filter(move |(_, q)| q.is_required() && !q.is_answered(response))
    }

    pub fn is_complete(&self, response: &JourneyResponse) -> bool {
        self.unanswered_questions(response).next().is_none()
    }
}
