//! CLI entrypoint for dynamic-forms
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use forms_application::{
    AnswerQuestionUseCase, JourneyProvider, NoProgress, ResponseStore, StartJourneyInput,
    StartJourneyUseCase, SubmitJourneyUseCase, ValidateSubmissionUseCase, ValidationNotifier,
};
use forms_domain::{FormSubmission, JourneyResponse, OutputFormat};
use forms_infrastructure::{
    ConfigLoader, FileConfig, FileStorageBackend, InMemoryResponseStore, JourneyLoader,
    JsonFileResponseStore,
};
use forms_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let journey_path = cli.journey.unwrap_or(config.journey.path.clone());
    let journey: Arc<dyn JourneyProvider> = Arc::new(
        JourneyLoader::load_file(&journey_path)
            .with_context(|| format!("Failed to load journey from {}", journey_path.display()))?,
    );
    let store = response_store(&config)?;
    let progress: Box<dyn ValidationNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    info!("Starting dynamic-forms with journey '{}'", journey.journey().id());

    match command {
        Command::Show => {
            let journey = journey.journey();
            emit(
                format,
                || ConsoleFormatter::format_journey(journey),
                || ConsoleFormatter::journey_json(journey),
            );
        }

        Command::Validate {
            section,
            question,
            fields,
            reference,
        } => {
            let response = match reference {
                Some(reference) => store
                    .load(&reference)
                    .await?
                    .ok_or_else(|| anyhow!("No journey response found for '{}'", reference))?,
                None => JourneyResponse::new(journey.journey().id(), "scratch"),
            };

            let mut submission =
                FormSubmission::new(section, question).with_body(fields.into_body());
            let outcome = ValidateSubmissionUseCase::new(Arc::clone(&journey))
                .execute_with_progress(&mut submission, &response, progress.as_ref())
                .await?;

            emit(
                format,
                || ConsoleFormatter::format_validation(&outcome, &submission),
                || ConsoleFormatter::validation_json(&outcome, &submission),
            );
        }

        Command::Start { reference, restart } => {
            let response = StartJourneyUseCase::new(Arc::clone(&journey), Arc::clone(&store))
                .execute(StartJourneyInput::new(reference).with_restart(restart))
                .await?;

            if let Some((section, question)) = journey.journey().first_question() {
                debug!("First question: {} / {}", section.name(), question.field_name());
            }
            emit(
                format,
                || ConsoleFormatter::format_response(&response),
                || serde_json::json!(response),
            );
        }

        Command::Answer {
            reference,
            section,
            question,
            fields,
        } => {
            let mut submission =
                FormSubmission::new(section, question).with_body(fields.into_body());
            let answer = AnswerQuestionUseCase::new(Arc::clone(&journey), Arc::clone(&store))
                .execute_with_progress(&reference, &mut submission, progress.as_ref())
                .await?;

            emit(
                format,
                || ConsoleFormatter::format_answer(&answer),
                || ConsoleFormatter::answer_json(&answer),
            );
        }

        Command::Submit { reference } => {
            let response = SubmitJourneyUseCase::new(Arc::clone(&journey), Arc::clone(&store))
                .execute(&reference)
                .await?;

            emit(
                format,
                || ConsoleFormatter::format_response(&response),
                || serde_json::json!(response),
            );
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;
    Ok(config)
}

fn response_store(config: &FileConfig) -> Result<Arc<dyn ResponseStore>> {
    match config.storage.backend {
        FileStorageBackend::Memory => Ok(Arc::new(InMemoryResponseStore::new())),
        FileStorageBackend::File => {
            let Some(directory) = &config.storage.directory else {
                bail!("storage.directory is required for the file backend");
            };
            debug!("Storing responses under {}", directory.display());
            Ok(Arc::new(JsonFileResponseStore::new(directory.clone())))
        }
    }
}

fn emit(
    format: OutputFormat,
    text: impl FnOnce() -> String,
    json: impl FnOnce() -> serde_json::Value,
) {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&json())),
    }
}
