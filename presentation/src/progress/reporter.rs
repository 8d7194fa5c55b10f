//! Progress reporting for validation runs

use colored::Colorize;
use forms_application::ports::progress::ValidationNotifier;
use forms_domain::PipelineState;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while validators run
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn finish(&self, message: String) {
        let taken = match self.spinner.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(pb) = taken {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationNotifier for ProgressReporter {
    fn on_state(&self, state: PipelineState) {
        match state {
            PipelineState::Validating => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_prefix("Validating");
                pb.enable_steady_tick(Duration::from_millis(80));
                if let Ok(mut guard) = self.spinner.lock() {
                    *guard = Some(pb);
                }
            }
            PipelineState::Passed => self.finish(format!("{}", "passed".green())),
            PipelineState::Failed => self.finish(format!("{}", "failed".red())),
            PipelineState::Pending | PipelineState::Resolving => {}
        }
    }

    fn on_validator_start(&self, index: usize, validator: &str, checks: usize) {
        self.with_spinner(|pb| {
            pb.set_message(format!("{}. {} ({} check(s))", index + 1, validator, checks));
        });
    }

    fn on_validator_complete(&self, _index: usize, validator: &str, passed: bool) {
        self.with_spinner(|pb| {
            let mark = if passed { "v".green() } else { "x".red() };
            pb.println(format!("  {} {}", mark, validator));
        });
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ValidationNotifier for SimpleProgress {
    fn on_state(&self, state: PipelineState) {
        match state {
            PipelineState::Validating => eprintln!("{} {}", "->".cyan(), "Validating".bold()),
            PipelineState::Passed => eprintln!("{} {}", "->".cyan(), "passed".green()),
            PipelineState::Failed => eprintln!("{} {}", "->".cyan(), "failed".red()),
            PipelineState::Pending | PipelineState::Resolving => {}
        }
    }

    fn on_validator_start(&self, index: usize, validator: &str, checks: usize) {
        eprintln!(
            "  {} {} {}",
            format!("{}.", index + 1).dimmed(),
            validator,
            format!("({} check(s))", checks).dimmed()
        );
    }

    fn on_validator_complete(&self, _index: usize, validator: &str, passed: bool) {
        if passed {
            eprintln!("     {} {}", "v".green(), validator);
        } else {
            eprintln!("     {} {}", "x".red(), validator);
        }
    }
}
