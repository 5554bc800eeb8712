//! Validation engine: drives the chunked reader, applies the row schema and
//! duplicate tracker per row, and accumulates the result partition.
//!
//! The run is a single logical thread of control. The only concurrency is a
//! cooperative suspension after each chunk so the host scheduler is never
//! starved on large files; ordering across chunks is strictly sequential.
//! The tracker and the in-progress report are owned exclusively by one run.

use std::path::Path;

use tracing::{debug, info};

use contacts_ingest::{ChunkedReader, DEFAULT_CHUNK_SIZE, IngestError, progress_percent};
use contacts_model::{HeaderSet, InvalidRow, ValidationReport};

use crate::dedupe::DuplicateTracker;
use crate::schema::RowSchema;

/// Tuning knobs for one validation run.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Rows processed between cooperative suspensions.
    pub chunk_size: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Validate every row of a file against the schema for `headers`.
///
/// Rows are processed in original file order; `original_index` is 1-based
/// and independent of chunk boundaries. `on_progress` is invoked after each
/// chunk with a non-decreasing percentage that reaches exactly 100 on
/// completion (a file with zero data rows resolves with an empty report and
/// a single 100 callback). Given the same file and headers the partition,
/// messages, and duplicate report are reproducible byte for byte.
///
/// Row-level problems never fail the run; only structural errors (unreadable
/// file, rejected upload) propagate.
pub async fn validate_file<F>(
    path: &Path,
    headers: &HeaderSet,
    options: EngineOptions,
    mut on_progress: F,
) -> Result<ValidationReport, IngestError>
where
    F: FnMut(u8),
{
    let mut reader = ChunkedReader::open(path, options.chunk_size)?;
    let total = reader.total_rows();
    info!(path = %path.display(), total_rows = total, "starting validation run");

    let schema = RowSchema::for_headers(headers);
    let track_email = headers.has_email();
    let mut tracker = DuplicateTracker::new();
    let mut report = ValidationReport::default();
    let mut processed = 0u64;

    while let Some(chunk) = reader.next_chunk()? {
        let count = chunk.rows.len() as u64;
        for (offset, row) in chunk.rows.into_iter().enumerate() {
            let original_index = chunk.first_index + offset as u64;
            let mut errors = schema.validate(&row);
            let duplicates = tracker.record(&row, original_index, track_email);
            errors.extend(duplicates.errors);
            if errors.is_empty() {
                report.valid_rows.push(row);
            } else {
                report.invalid_rows.push(InvalidRow {
                    row,
                    errors,
                    original_index,
                });
                report.duplicates.extend(duplicates.entries);
            }
        }
        processed += count;
        let percent = progress_percent(processed, total);
        debug!(processed, total, percent, "chunk validated");
        on_progress(percent);

        // Hand control back to the scheduler before the next chunk.
        tokio::task::yield_now().await;
    }

    if total == 0 {
        on_progress(100);
    }

    info!(
        valid = report.valid_count(),
        invalid = report.invalid_count(),
        duplicates = report.duplicate_count(),
        "validation run finished"
    );
    Ok(report)
}
