//! Header discovery: a bounded preview used to seed the column-mapping step.

use std::path::Path;

use tracing::debug;

use contacts_model::{ContactRow, HeaderSet};

use crate::chunked::ChunkedReader;
use crate::error::IngestError;

/// Preview depth used by the mapping screen.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Header set plus a handful of sample rows.
#[derive(Debug, Clone)]
pub struct FilePreview {
    pub headers: HeaderSet,
    pub sample_rows: Vec<ContactRow>,
}

/// Read the header row and up to `preview_rows` sample rows.
///
/// Fails with [`IngestError::NoData`] when the file has no data rows; a
/// header alone is not enough to seed the mapping step.
pub fn parse_headers(path: &Path, preview_rows: usize) -> Result<FilePreview, IngestError> {
    let mut reader = ChunkedReader::open(path, preview_rows.max(1))?;
    let headers = reader.headers().clone();
    let sample_rows = match reader.next_chunk()? {
        Some(chunk) => chunk.rows,
        None => return Err(IngestError::NoData),
    };
    debug!(
        columns = headers.len(),
        samples = sample_rows.len(),
        "parsed file preview"
    );
    Ok(FilePreview {
        headers,
        sample_rows,
    })
}
