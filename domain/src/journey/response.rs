//! Journey response entity

use crate::core::error::DomainError;
use crate::core::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The answers one user has given so far (Entity)
///
/// Created when the user starts a journey, updated as each question is
/// answered, and frozen once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyResponse {
    journey_id: String,
    reference: String,
    #[serde(default)]
    answers: BTreeMap<String, FieldValue>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submitted_at: Option<DateTime<Utc>>,
}

impl JourneyResponse {
    pub fn new(journey_id: impl Into<String>, reference: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            journey_id: journey_id.into(),
            reference: reference.into(),
            answers: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            submitted_at: None,
        }
    }

    pub fn journey_id(&self) -> &str {
        &self.journey_id
    }

    /// Identifier of this response (session or application reference)
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn answers(&self) -> &BTreeMap<String, FieldValue> {
        &self.answers
    }

    pub fn answer(&self, field: &str) -> Option<&FieldValue> {
        self.answers.get(field)
    }

    pub fn has_answer(&self, field: &str) -> bool {
        self.answers.contains_key(field)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn set_answer(
        &mut self,
        field: impl Into<String>,
        value: FieldValue,
    ) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.answers.insert(field.into(), value);
        self.touch();
        Ok(())
    }

    /// Set several answers at once; all or nothing
    pub fn merge_answers(
        &mut self,
        answers: impl IntoIterator<Item = (String, FieldValue)>,
    ) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.answers.extend(answers);
        self.touch();
        Ok(())
    }

    pub fn remove_answer(&mut self, field: &str) -> Result<Option<FieldValue>, DomainError> {
        self.ensure_open()?;
        let removed = self.answers.remove(field);
        if removed.is_some() {
            self.touch();
        }
        Ok(removed)
    }

    /// Freeze the response; later mutations fail
    pub fn submit(&mut self) -> Result<(), DomainError> {
        self.ensure_open()?;
        let now = Utc::now();
        self.submitted_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Reject a response that belongs to another journey
    pub fn ensure_journey(&self, journey_id: &str) -> Result<(), DomainError> {
        if self.journey_id == journey_id {
            Ok(())
        } else {
            Err(DomainError::JourneyMismatch {
                expected: journey_id.to_string(),
                actual: self.journey_id.clone(),
            })
        }
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_submitted() {
            Err(DomainError::ResponseSubmitted(self.reference.clone()))
        } else {
            Ok(())
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_is_empty_and_open() {
        let response = JourneyResponse::new("crown-dev", "ABC123");
        assert_eq!(response.journey_id(), "crown-dev");
        assert_eq!(response.reference(), "ABC123");
        assert!(response.answers().is_empty());
        assert!(!response.is_submitted());
        assert_eq!(response.created_at(), response.updated_at());
    }

    #[test]
    fn test_set_and_remove_answer() {
        let mut response = JourneyResponse::new("j", "r");
        response.set_answer("name", FieldValue::text("Ada")).unwrap();
        assert_eq!(response.answer("name"), Some(&FieldValue::text("Ada")));
        assert!(response.updated_at() >= response.created_at());

        let removed = response.remove_answer("name").unwrap();
        assert_eq!(removed, Some(FieldValue::text("Ada")));
        assert!(!response.has_answer("name"));
    }

    #[test]
    fn test_submitted_response_rejects_changes() {
        let mut response = JourneyResponse::new("j", "r");
        response.set_answer("name", FieldValue::text("Ada")).unwrap();
        response.submit().unwrap();

        assert!(response.is_submitted());
        assert!(matches!(
            response.set_answer("name", FieldValue::text("Bob")),
            Err(DomainError::ResponseSubmitted(_))
        ));
        assert!(response.merge_answers(Vec::new()).is_err());
        assert!(response.remove_answer("name").is_err());
        assert!(response.submit().is_err());
        assert_eq!(response.answer("name"), Some(&FieldValue::text("Ada")));
    }

    #[test]
    fn test_merge_answers() {
        let mut response = JourneyResponse::new("j", "r");
        response
            .merge_answers(vec![
                ("a".to_string(), FieldValue::text("1")),
                ("b".to_string(), FieldValue::list(["x", "y"])),
            ])
            .unwrap();
        assert_eq!(response.answers().len(), 2);
    }

    #[test]
    fn test_ensure_journey() {
        let response = JourneyResponse::new("j", "r");
        assert!(response.ensure_journey("j").is_ok());
        assert!(matches!(
            response.ensure_journey("other"),
            Err(DomainError::JourneyMismatch { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_keeps_answers() {
        let mut response = JourneyResponse::new("j", "r");
        response.set_answer("agree", FieldValue::text("on")).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let restored: JourneyResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, response);
    }
}
