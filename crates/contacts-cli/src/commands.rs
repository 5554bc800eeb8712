//! Subcommand implementations.

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use contacts_ingest::{DEFAULT_PREVIEW_ROWS, FilePreview, parse_headers, write_sample_template};
use contacts_model::ValidationReport;
use contacts_validate::{EngineOptions, validate_file};

use crate::cli::{HeadersArgs, TemplateArgs, ValidateArgs};

/// Run a full validation: discover headers, stream the file through the
/// engine with a progress bar, optionally export the JSON report.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidationReport> {
    let preview = parse_headers(&args.file, DEFAULT_PREVIEW_ROWS)
        .with_context(|| format!("read headers from {}", args.file.display()))?;
    let headers = preview.headers;

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .context("progress bar template")?,
    );
    bar.set_message("validating");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")?;
    let options = EngineOptions {
        chunk_size: args.chunk_size,
    };
    let report = runtime
        .block_on(validate_file(&args.file, &headers, options, |percent| {
            bar.set_position(u64::from(percent));
        }))
        .with_context(|| format!("validate {}", args.file.display()))?;
    bar.finish_and_clear();

    if let Some(path) = &args.report {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("write report to {}", path.display()))?;
        info!(path = %path.display(), "wrote validation report");
    }

    Ok(report)
}

/// Discover and return a file's headers with sample rows.
pub fn run_headers(args: &HeadersArgs) -> anyhow::Result<FilePreview> {
    parse_headers(&args.file, args.preview)
        .with_context(|| format!("read headers from {}", args.file.display()))
}

/// Write the fixed sample template.
pub fn run_template(args: &TemplateArgs) -> anyhow::Result<()> {
    let file =
        File::create(&args.output).with_context(|| format!("create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_sample_template(&mut writer)
        .with_context(|| format!("write template to {}", args.output.display()))?;
    println!("Wrote sample template to {}", args.output.display());
    Ok(())
}
