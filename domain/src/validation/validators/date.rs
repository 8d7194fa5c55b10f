//! Date validator for day/month/year inputs

use crate::journey::response::JourneyResponse;
use crate::question::entities::Question;
use crate::question::kind::date_part_field;
use crate::validation::check::{Check, CheckError, CheckResult, CheckSet};
use crate::validation::errors::FieldError;
use crate::validation::submission::FormSubmission;
use crate::validation::validator::Validator;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Requires the three date parts of a question to form a real calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValidator {
    missing_message: String,
    invalid_message: String,
}

impl DateValidator {
    pub fn new(missing_message: impl Into<String>, invalid_message: impl Into<String>) -> Self {
        Self {
            missing_message: missing_message.into(),
            invalid_message: invalid_message.into(),
        }
    }
}

impl Validator for DateValidator {
    fn name(&self) -> &'static str {
        "date"
    }

    fn validate(&self, question: &Question, _response: &JourneyResponse) -> CheckSet {
        CheckSet::Single(Box::new(DateCheck {
            field: question.field_name().to_string(),
            missing_message: self.missing_message.clone(),
            invalid_message: self.invalid_message.clone(),
        }))
    }

    fn requires_answer(&self) -> bool {
        true
    }

    fn referenced_fields(&self, question: &Question) -> Vec<String> {
        ["day", "month", "year"]
            .iter()
            .map(|part| date_part_field(question.field_name(), part))
            .collect()
    }
}

/// Reads `<field>_day`, `<field>_month` and `<field>_year` from the submission
#[derive(Debug, Clone)]
pub struct DateCheck {
    field: String,
    missing_message: String,
    invalid_message: String,
}

impl DateCheck {
    fn part<'a>(&self, submission: &'a FormSubmission, part: &str) -> Option<&'a str> {
        submission
            .field_text(&date_part_field(&self.field, part))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse the posted parts; `None` means one or more parts are missing
    pub fn parse(&self, submission: &FormSubmission) -> Option<Option<NaiveDate>> {
        let day = self.part(submission, "day")?;
        let month = self.part(submission, "month")?;
        let year = self.part(submission, "year")?;

        if year.len() != 4 {
            return Some(None);
        }
        let date = match (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) {
            (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        };
        Some(date)
    }
}

#[async_trait]
impl Check for DateCheck {
    fn field(&self) -> &str {
        &self.field
    }

    async fn run(&self, submission: &FormSubmission) -> Result<CheckResult, CheckError> {
        let result = match self.parse(submission) {
            None => CheckResult::invalid(FieldError::new(&self.field, &self.missing_message)),
            Some(None) => CheckResult::invalid(FieldError::new(&self.field, &self.invalid_message)),
            Some(Some(_)) => CheckResult::valid(),
        };
        Ok(result)
    }
}
