//! Console output formatter for journeys and validation results

use colored::Colorize;
use forms_application::{AnswerQuestionOutput, NextStep};
use forms_domain::{
    FormSubmission, Journey, JourneyResponse, Question, ValidationErrors, ValidationOutcome,
};
use serde::Serialize;
use serde_json::json;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything formatted afterwards
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the journey structure
    pub fn format_journey(journey: &Journey) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(journey.title()));
        output.push_str(&format!("{} {}\n", "Journey:".cyan().bold(), journey.id()));

        for section in journey.sections() {
            output.push_str(&Self::section_header(&format!(
                "{} ({})",
                section.title(),
                section.name()
            )));
            if section.questions().is_empty() {
                output.push_str(&format!("  {}\n", "(no questions)".dimmed()));
            }
            for question in section.questions() {
                output.push_str(&Self::format_question(question));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_question(question: &Question) -> String {
        let mut output = format!(
            "  {} {} {}\n",
            "*".yellow(),
            question.field_name().bold(),
            format!("[{}]", question.view_folder()).dimmed()
        );
        output.push_str(&format!("      {}\n", question.question()));
        if let Some(hint) = question.hint() {
            output.push_str(&format!("      {} {}\n", "hint:".dimmed(), hint));
        }
        if !question.validators().is_empty() {
            let names: Vec<_> = question.validators().iter().map(|v| v.name()).collect();
            output.push_str(&format!(
                "      {} {}\n",
                "validators:".dimmed(),
                names.join(" -> ")
            ));
        }
        output
    }

    /// Format a pipeline outcome with the errors left on the submission
    pub fn format_validation(outcome: &ValidationOutcome, submission: &FormSubmission) -> String {
        let mut output = format!(
            "{} {} / {}\n",
            "Question:".cyan().bold(),
            submission.section(),
            submission.question()
        );
        match outcome {
            ValidationOutcome::Passed => {
                output.push_str(&format!("{}\n", "Passed".green().bold()));
            }
            ValidationOutcome::Failed {
                validator_index,
                validator,
            } => {
                output.push_str(&format!(
                    "{} at validator {} ({})\n",
                    "Failed".red().bold(),
                    validator_index + 1,
                    validator
                ));
                output.push_str(&Self::format_errors(submission.errors()));
            }
        }
        output
    }

    /// Format the result of answering a question
    pub fn format_answer(answer: &AnswerQuestionOutput) -> String {
        match &answer.next {
            NextStep::Reprompt { errors } => format!(
                "{}\n{}",
                "Answer not saved; fix these and try again:".red().bold(),
                Self::format_errors(errors)
            ),
            NextStep::Question { section, question } => format!(
                "{} Next: {} / {}\n",
                "Saved.".green().bold(),
                section,
                question
            ),
            NextStep::CheckAnswers => format!(
                "{} Every question has been visited; check your answers and submit.\n",
                "Saved.".green().bold()
            ),
        }
    }

    fn format_errors(errors: &ValidationErrors) -> String {
        errors
            .iter()
            .map(|e| format!("  {} {}: {}\n", "x".red(), e.field.bold(), e.message))
            .collect()
    }

    /// Format a stored journey response
    pub fn format_response(response: &JourneyResponse) -> String {
        let mut output = format!(
            "{} {} ({})\n",
            "Response:".cyan().bold(),
            response.reference(),
            response.journey_id()
        );
        let status = match response.submitted_at() {
            Some(at) => format!("submitted {}", at.to_rfc3339()).green().to_string(),
            None => "in progress".yellow().to_string(),
        };
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));

        for (field, value) in response.answers() {
            output.push_str(&format!("  {} = {}\n", field.bold(), value));
        }
        output
    }

    /// Journey structure as JSON
    pub fn journey_json(journey: &Journey) -> serde_json::Value {
        json!({
            "id": journey.id(),
            "title": journey.title(),
            "sections": journey.sections().iter().map(|section| json!({
                "name": section.name(),
                "title": section.title(),
                "questions": section.questions().iter().map(|q| json!({
                    "kind": q.kind(),
                    "field_name": q.field_name(),
                    "title": q.title(),
                    "question": q.question(),
                    "view_folder": q.view_folder(),
                    "hint": q.hint(),
                    "label": q.label(),
                    "html": q.html(),
                    "autocomplete": q.autocomplete(),
                    "validators": q.validators().iter().map(|v| v.name()).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        })
    }

    /// Pipeline outcome and errors as JSON
    pub fn validation_json(
        outcome: &ValidationOutcome,
        submission: &FormSubmission,
    ) -> serde_json::Value {
        json!({
            "section": submission.section(),
            "question": submission.question(),
            "outcome": outcome,
            "errors": submission.errors(),
        })
    }

    pub fn answer_json(answer: &AnswerQuestionOutput) -> serde_json::Value {
        json!({
            "outcome": answer.outcome,
            "next": answer.next,
            "response": answer.response,
        })
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_domain::{FieldError, RequiredValidator, Section};

    fn journey() -> Journey {
        Journey::new(
            "j",
            "Test Journey",
            vec![Section::new("about", "About you").with_question(
                Question::new("Name", "What is your name?", "full_name", "single-line-input")
                    .with_hint("Full name")
                    .with_validator(RequiredValidator::new("Enter your name")),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_format_journey_lists_questions() {
        ConsoleFormatter::set_color(false);
        let output = ConsoleFormatter::format_journey(&journey());
        assert!(output.contains("Test Journey"));
        assert!(output.contains("About you (about)"));
        assert!(output.contains("full_name [single-line-input]"));
        assert!(output.contains("validators: required"));
    }

    #[test]
    fn test_format_failed_validation_lists_errors() {
        ConsoleFormatter::set_color(false);
        let mut submission = FormSubmission::new("about", "full_name");
        submission.record_errors(
            vec![FieldError::new("full_name", "Enter your name")]
                .into_iter()
                .collect(),
        );
        let outcome = ValidationOutcome::Failed {
            validator_index: 0,
            validator: "required".to_string(),
        };

        let output = ConsoleFormatter::format_validation(&outcome, &submission);
        assert!(output.contains("Failed at validator 1 (required)"));
        assert!(output.contains("full_name: Enter your name"));
    }

    #[test]
    fn test_journey_json_shape() {
        let value = ConsoleFormatter::journey_json(&journey());
        assert_eq!(value["id"], "j");
        let question = &value["sections"][0]["questions"][0];
        assert_eq!(question["field_name"], "full_name");
        assert_eq!(question["kind"], "standard");
        assert_eq!(question["validators"][0], "required");
        assert!(question["label"].is_null());
    }

    #[test]
    fn test_validation_json_shape() {
        let submission = FormSubmission::new("about", "full_name");
        let value = ConsoleFormatter::validation_json(&ValidationOutcome::Passed, &submission);
        assert_eq!(value["outcome"]["status"], "passed");
        assert_eq!(value["errors"], json!([]));
    }
}
