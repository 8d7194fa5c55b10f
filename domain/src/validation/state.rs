//! Validation pipeline states and outcome

use serde::{Deserialize, Serialize};

/// State of one validation pipeline run
///
/// The run is a linear scan: `Pending -> Resolving -> Validating`, then
/// `Passed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    /// Submission received, question not yet looked up
    Pending,
    /// Looking up the question by section and name
    Resolving,
    /// Running the question's validators in declared order
    Validating,
    /// Every validator ran without reporting an error
    Passed,
    /// A validator reported at least one error; later validators were skipped
    Failed,
}

impl PipelineState {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineState::Pending => "pending",
            PipelineState::Resolving => "resolving",
            PipelineState::Validating => "validating",
            PipelineState::Passed => "passed",
            PipelineState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Passed | PipelineState::Failed)
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    Passed,
    Failed {
        /// Index of the validator that stopped the scan
        validator_index: usize,
        /// Its name, for logs and diagnostics
        validator: String,
    },
}

impl ValidationOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed)
    }

    pub fn state(&self) -> PipelineState {
        match self {
            ValidationOutcome::Passed => PipelineState::Passed,
            ValidationOutcome::Failed { .. } => PipelineState::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PipelineState::Passed.is_terminal());
        assert!(PipelineState::Failed.is_terminal());
        assert!(!PipelineState::Pending.is_terminal());
        assert!(!PipelineState::Resolving.is_terminal());
        assert!(!PipelineState::Validating.is_terminal());
    }

    #[test]
    fn test_outcome_state() {
        assert_eq!(ValidationOutcome::Passed.state(), PipelineState::Passed);
        let failed = ValidationOutcome::Failed {
            validator_index: 1,
            validator: "required".to_string(),
        };
        assert_eq!(failed.state(), PipelineState::Failed);
        assert!(!failed.is_passed());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&ValidationOutcome::Passed).unwrap();
        assert_eq!(json, r#"{"status":"passed"}"#);
    }
}
