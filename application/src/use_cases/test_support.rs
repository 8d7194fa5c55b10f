//! Shared fixtures for use case tests

use crate::ports::response_store::{ResponseStore, StoreError};
use async_trait::async_trait;
use forms_domain::{
    ConditionalRequiredValidator, ConfirmationCheckboxValidator, Journey, JourneyResponse,
    Question, RequiredValidator, Section,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Response store backed by a plain map, counting saves
#[derive(Default)]
pub(crate) struct MockStore {
    responses: Mutex<HashMap<String, JourneyResponse>>,
    saves: AtomicUsize,
}

impl MockStore {
    pub(crate) fn with(response: JourneyResponse) -> Self {
        let store = Self::default();
        store
            .responses
            .lock()
            .unwrap()
            .insert(response.reference().to_string(), response);
        store
    }

    pub(crate) fn get(&self, reference: &str) -> Option<JourneyResponse> {
        self.responses.lock().unwrap().get(reference).cloned()
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseStore for MockStore {
    async fn load(&self, reference: &str) -> Result<Option<JourneyResponse>, StoreError> {
        Ok(self.get(reference))
    }

    async fn save(&self, response: &JourneyResponse) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .insert(response.reference().to_string(), response.clone());
        Ok(())
    }

    async fn discard(&self, reference: &str) -> Result<bool, StoreError> {
        Ok(self.responses.lock().unwrap().remove(reference).is_some())
    }
}

/// Two-section journey: applicant details, then a declaration
pub(crate) fn journey() -> Journey {
    Journey::new(
        "planning",
        "Apply for planning permission",
        vec![
            Section::new("applicant", "About you")
                .with_question(
                    Question::new("Name", "What is your name?", "full_name", "single-line-input")
                        .with_validator(RequiredValidator::new("Enter your name")),
                )
                .with_question(
                    Question::new("Agent", "Is an agent acting for you?", "has_agent", "radio")
                        .with_auxiliary_field("agent_name")
                        .with_validator(RequiredValidator::new("Select yes or no"))
                        .with_validator(ConditionalRequiredValidator::new(
                            "agent_name",
                            "has_agent",
                            "yes",
                            "Enter the agent's name",
                        )),
                ),
            Section::new("declaration", "Declaration").with_question(
                Question::new("Declaration", "Do you agree?", "agree", "checkbox")
                    .with_validator(ConfirmationCheckboxValidator::new("agree")),
            ),
        ],
    )
    .unwrap()
}
