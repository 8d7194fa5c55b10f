//! Journey provider port
//!
//! Gives use cases read access to the journey definition.

use forms_domain::{Journey, Question};

/// Port for resolving questions from the active journey
///
/// The journey is built once at startup and shared read-only; adapters
/// decide where it comes from (a definition file, code, ...).
pub trait JourneyProvider: Send + Sync {
    /// The journey served by this provider
    fn journey(&self) -> &Journey;

    /// Look up a question by section name and question name
    fn get_question_by_section_and_name(&self, section: &str, question: &str) -> Option<&Question> {
        self.journey()
            .get_question_by_section_and_name(section, question)
    }
}

impl JourneyProvider for Journey {
    fn journey(&self) -> &Journey {
        self
    }
}
