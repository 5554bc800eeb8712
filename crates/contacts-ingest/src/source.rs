//! Upload gate: file type and size checks that run before the core.

use std::fs;
use std::path::Path;

use crate::error::IngestError;

/// Upload size ceiling. Oversized files are rejected before any parsing.
pub const MAX_UPLOAD_BYTES: u64 = 15 * 1024 * 1024;

/// Accepted input formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Delimited text, first row is the header.
    Csv,
    /// XLS or XLSX workbook; the first worksheet is read.
    Sheet,
}

impl SourceKind {
    pub fn detect(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xls" | "xlsx") => Ok(Self::Sheet),
            _ => Err(IngestError::UnsupportedType(path.to_path_buf())),
        }
    }
}

/// Run the full gate: existence, extension, and size ceiling.
pub fn check_source(path: &Path) -> Result<SourceKind, IngestError> {
    check_source_with_limit(path, MAX_UPLOAD_BYTES)
}

/// Gate with an explicit ceiling, for callers that enforce their own.
pub fn check_source_with_limit(path: &Path, limit: u64) -> Result<SourceKind, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    let kind = SourceKind::detect(path)?;
    let size = fs::metadata(path)?.len();
    if size > limit {
        return Err(IngestError::TooLarge { size, limit });
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn detects_supported_extensions() {
        assert_eq!(
            SourceKind::detect(Path::new("contacts.csv")).unwrap(),
            SourceKind::Csv
        );
        assert_eq!(
            SourceKind::detect(Path::new("contacts.XLSX")).unwrap(),
            SourceKind::Sheet
        );
        assert_eq!(
            SourceKind::detect(Path::new("contacts.xls")).unwrap(),
            SourceKind::Sheet
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = SourceKind::detect(Path::new("contacts.txt")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedType(_)));
    }

    #[test]
    fn rejects_missing_file() {
        let err = check_source(Path::new("/nonexistent/contacts.csv")).unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }

    #[test]
    fn rejects_oversized_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp file");
        file.write_all(b"phonenumber,var1\n9876543210,hi\n")
            .expect("write temp file");
        let err = check_source_with_limit(file.path(), 8).unwrap_err();
        assert!(matches!(err, IngestError::TooLarge { limit: 8, .. }));
    }
}
