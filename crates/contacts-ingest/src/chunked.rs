//! Chunked row reading over CSV and spreadsheet sources.
//!
//! The reader makes a cheap counting pre-pass so the total row count is
//! known before any row is delivered, then streams rows in bounded batches.
//! CSV input is never fully materialized; memory stays proportional to the
//! chunk size. Workbooks are decoded up front (the format is not
//! incrementally parseable) but still delivered in chunks so the consumer's
//! yield discipline between batches holds for both sources.

use std::fs::File;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::debug;

use contacts_model::{ContactRow, HeaderSet};

use crate::error::IngestError;
use crate::source::{SourceKind, check_source};

/// Default rows per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 30_000;

/// One bounded batch of rows.
///
/// `first_index` is the 1-based position of the first row in the source
/// file; indices are assigned by absolute position, independent of chunk
/// boundaries.
#[derive(Debug)]
pub struct RowChunk {
    pub rows: Vec<ContactRow>,
    pub first_index: u64,
    pub is_last: bool,
}

/// Streaming reader that yields rows in bounded batches.
#[derive(Debug)]
pub struct ChunkedReader {
    headers: HeaderSet,
    chunk_size: usize,
    total_rows: u64,
    emitted: u64,
    source: RowSource,
}

#[derive(Debug)]
enum RowSource {
    Csv(Box<csv::Reader<File>>),
    Sheet(std::vec::IntoIter<Vec<String>>),
}

impl ChunkedReader {
    /// Open a source file, run the upload gate, and count its rows.
    ///
    /// Fails with [`IngestError::NoData`] when the file has no header row.
    /// A header-only file opens fine and yields zero chunks.
    pub fn open(path: &Path, chunk_size: usize) -> Result<Self, IngestError> {
        let kind = check_source(path)?;
        let reader = match kind {
            SourceKind::Csv => Self::open_csv(path, chunk_size)?,
            SourceKind::Sheet => Self::open_sheet(path, chunk_size)?,
        };
        debug!(
            path = %path.display(),
            total_rows = reader.total_rows,
            columns = reader.headers.len(),
            "opened chunked reader"
        );
        Ok(reader)
    }

    fn open_csv(path: &Path, chunk_size: usize) -> Result<Self, IngestError> {
        // Counting pre-pass. Empty lines are skipped by the parser in both
        // passes, so the counts line up with what the streaming pass yields.
        let mut counter = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut record = ByteRecord::new();
        let mut seen = 0u64;
        while counter.read_byte_record(&mut record)? {
            seen += 1;
        }
        if seen == 0 {
            return Err(IngestError::NoData);
        }
        let total_rows = seen - 1;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut header_record = StringRecord::new();
        if !reader.read_record(&mut header_record)? {
            return Err(IngestError::NoData);
        }
        let headers = HeaderSet::new(header_record.iter().map(normalize_header).collect());

        Ok(Self {
            headers,
            chunk_size: chunk_size.max(1),
            total_rows,
            emitted: 0,
            source: RowSource::Csv(Box::new(reader)),
        })
    }

    fn open_sheet(path: &Path, chunk_size: usize) -> Result<Self, IngestError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(IngestError::NoData)??;
        let mut rows = range.rows();
        let headers = loop {
            match rows.next() {
                Some(cells) if sheet_row_is_blank(cells) => {}
                Some(cells) => {
                    break HeaderSet::new(
                        cells
                            .iter()
                            .map(|cell| normalize_header(&cell_to_string(cell)))
                            .collect(),
                    );
                }
                None => return Err(IngestError::NoData),
            }
        };
        let data: Vec<Vec<String>> = rows
            .filter(|cells| !sheet_row_is_blank(cells))
            .map(|cells| cells.iter().map(cell_to_string).collect())
            .collect();
        let total_rows = data.len() as u64;

        Ok(Self {
            headers,
            chunk_size: chunk_size.max(1),
            total_rows,
            emitted: 0,
            source: RowSource::Sheet(data.into_iter()),
        })
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Row count from the pre-pass, excluding the header row.
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Read the next bounded batch, or `None` when the source is drained.
    pub fn next_chunk(&mut self) -> Result<Option<RowChunk>, IngestError> {
        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while rows.len() < self.chunk_size {
            let row = match &mut self.source {
                RowSource::Csv(reader) => {
                    if !reader.read_record(&mut record)? {
                        break;
                    }
                    ContactRow::from_cells(&self.headers, record.iter())
                }
                RowSource::Sheet(iter) => match iter.next() {
                    Some(cells) => ContactRow::from_cells(&self.headers, cells),
                    None => break,
                },
            };
            rows.push(row);
        }
        if rows.is_empty() {
            return Ok(None);
        }
        let first_index = self.emitted + 1;
        self.emitted += rows.len() as u64;
        Ok(Some(RowChunk {
            rows,
            first_index,
            is_last: self.emitted >= self.total_rows,
        }))
    }
}

/// Percentage for progress reporting: `round(processed / total * 100)`.
///
/// A zero-row source reports 100 immediately so a run's final callback is
/// always exactly 100.
pub fn progress_percent(processed: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    ((processed as f64 / total as f64) * 100.0).round() as u8
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn sheet_row_is_blank(cells: &[Data]) -> bool {
    cells.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
