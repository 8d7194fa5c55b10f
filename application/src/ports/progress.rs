//! Progress notification port
//!
//! Defines the interface for reporting progress during a validation run.

use forms_domain::PipelineState;

/// Callback for progress updates during a validation pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, logs, etc.)
pub trait ValidationNotifier: Send + Sync {
    /// Called on every pipeline state transition
    fn on_state(&self, state: PipelineState);

    /// Called before a validator's checks run
    fn on_validator_start(&self, index: usize, validator: &str, checks: usize);

    /// Called once a validator's checks have all settled
    fn on_validator_complete(&self, index: usize, validator: &str, passed: bool);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl ValidationNotifier for NoProgress {
    fn on_state(&self, _state: PipelineState) {}
    fn on_validator_start(&self, _index: usize, _validator: &str, _checks: usize) {}
    fn on_validator_complete(&self, _index: usize, _validator: &str, _passed: bool) {}
}
