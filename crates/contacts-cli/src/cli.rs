//! CLI argument definitions for the contacts validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use contacts_ingest::{DEFAULT_CHUNK_SIZE, DEFAULT_PREVIEW_ROWS, SAMPLE_TEMPLATE_FILENAME};

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Contact list validator - check uploads before a campaign goes out",
    long_about = "Validate an uploaded contact list (CSV, XLS, or XLSX).\n\n\
                  Checks every row against the destination schema (Indian mobile\n\
                  number, optional email, 160-character message) and flags phone\n\
                  and email duplicates across the whole file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a contact list and report the valid/invalid partition.
    Validate(ValidateArgs),

    /// Show the header set and a preview of a file's first rows.
    Headers(HeadersArgs),

    /// Write the sample CSV template.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Contact list to validate (.csv, .xls, or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rows processed per chunk before yielding.
    #[arg(long = "chunk-size", value_name = "ROWS", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Write the full validation report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Maximum invalid rows listed in the issue table.
    #[arg(long = "max-issues", value_name = "N", default_value_t = 25)]
    pub max_issues: usize,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// File to preview.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of sample rows to show.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template.
    #[arg(value_name = "OUTPUT", default_value = SAMPLE_TEMPLATE_FILENAME)]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
