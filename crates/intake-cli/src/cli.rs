//! Command-line arguments for the intake tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Geriatric clinic patient intake form",
    long_about = "Replay a patient's intake session from a JSON event script and\n\
                  export the clinical report as DOCX, or inspect the form schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log output format (pretty for humans, json for log collectors).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply an event script to a new session and export the report.
    Run(RunArgs),

    /// Print the review summary for an event script.
    Summary(ScriptArgs),

    /// Print the form schema as JSON.
    Schema(SchemaArgs),

    /// Print the questions as a plain-text sheet.
    Questions,

    /// Show or create the saved configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Parser)]
pub struct ScriptArgs {
    /// JSON array of intake events.
    #[arg(value_name = "EVENTS")]
    pub events: PathBuf,
}

#[derive(Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Output directory (default: configured output_dir, else current directory).
    #[arg(long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Also write the rendered Markdown text.
    #[arg(long = "markdown")]
    pub markdown: bool,

    /// Also write the report blocks as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Only this section (e.g. "symptoms").
    #[arg(long = "section", value_name = "ID")]
    pub section: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration.
    Show,
    /// Write a default configuration file if none exists.
    Init,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Json,
}
