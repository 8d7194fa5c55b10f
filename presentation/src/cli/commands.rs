//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use forms_domain::FieldValue;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for forms_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => forms_domain::OutputFormat::Text,
            OutputFormat::Json => forms_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for dynamic-forms
#[derive(Parser, Debug)]
#[command(name = "dynamic-forms")]
#[command(author, version, about = "Multi-step form journeys with per-question validation")]
#[command(long_about = r#"
dynamic-forms drives a multi-step form journey defined in a TOML file.

Each posted question is validated by running its validators in order;
the first validator that reports an error stops the run and the question
is re-prompted. Passing answers are saved into a journey response.

Configuration files are loaded from (in priority order):
1. DYNAMIC_FORMS_* environment variables
2. --config <path>     Explicit config file
3. ./forms.toml        Project-level config
4. ~/.config/dynamic-forms/config.toml   Global config

Example:
  dynamic-forms show
  dynamic-forms validate applicant full_name -f full_name="Ada Lovelace"
  dynamic-forms start APP-001
  dynamic-forms answer APP-001 declaration agree -f agree=on
  dynamic-forms submit APP-001
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Journey definition file (overrides journey.path from config)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub journey: Option<PathBuf>,

    /// Output format (overrides output.format from config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the journey's sections and questions
    Show,

    /// Run the validation pipeline for one question without saving anything
    Validate {
        section: String,
        question: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Validate against the answers already stored under this reference
        #[arg(long, value_name = "REFERENCE")]
        reference: Option<String>,
    },

    /// Start a new journey response
    Start {
        reference: String,

        /// Discard any existing response with the same reference
        #[arg(long)]
        restart: bool,
    },

    /// Answer one question of a started journey
    Answer {
        reference: String,
        section: String,
        question: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Submit a completed journey response
    Submit { reference: String },
}

/// Posted form fields
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Form field as KEY=VALUE (repeat a key to post a list)
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

impl FieldArgs {
    /// Collect the fields into a form body
    ///
    /// A key given once is a single value; a key given several times
    /// becomes a list in the order given.
    pub fn into_body(self) -> BTreeMap<String, FieldValue> {
        let mut body: BTreeMap<String, FieldValue> = BTreeMap::new();
        for (key, value) in self.fields {
            let merged = match body.remove(&key) {
                None => FieldValue::Text(value),
                Some(FieldValue::Text(first)) => FieldValue::List(vec![first, value]),
                Some(FieldValue::List(mut items)) => {
                    items.push(value);
                    FieldValue::List(items)
                }
            };
            body.insert(key, merged);
        }
        body
    }
}

/// Parse `KEY=VALUE`; the value may be empty or contain further `=`
fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
