//! Contact list ingestion.
//!
//! Everything that stands between an uploaded file and the validation
//! engine: the upload gate (extension and size ceiling), header discovery
//! with a bounded preview, the chunked row reader, and the sample template
//! artifact.

pub mod chunked;
pub mod error;
pub mod preview;
pub mod source;
pub mod template;

pub use chunked::{ChunkedReader, DEFAULT_CHUNK_SIZE, RowChunk, progress_percent};
pub use error::IngestError;
pub use preview::{DEFAULT_PREVIEW_ROWS, FilePreview, parse_headers};
pub use source::{MAX_UPLOAD_BYTES, SourceKind, check_source, check_source_with_limit};
pub use template::{SAMPLE_TEMPLATE, SAMPLE_TEMPLATE_FILENAME, write_sample_template};
