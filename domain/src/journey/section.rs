//! Section entity

use crate::question::entities::Question;

/// A named group of related questions, in fixed order
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    title: String,
    questions: Vec<Question>,
}

impl Section {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by its field name
    pub fn question(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.field_name() == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.field_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_lookup() {
        let section = Section::new("applicant", "About you")
            .with_question(Question::new("Name", "Your name?", "full_name", "single-line-input"))
            .with_question(Question::new("Email", "Your email?", "email", "email"));

        assert_eq!(section.name(), "applicant");
        assert_eq!(section.title(), "About you");
        assert_eq!(section.questions().len(), 2);
        assert_eq!(section.question("email").unwrap().title(), "Email");
        assert!(section.question("phone").is_none());
        assert_eq!(section.position("email"), Some(1));
    }
}
