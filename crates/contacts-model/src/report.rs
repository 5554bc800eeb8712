use std::fmt;

use serde::{Deserialize, Serialize};

use crate::row::ContactRow;

/// Which index a duplicate was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateField {
    Phonenumber,
    Email,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phonenumber => write!(f, "phonenumber"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// A canonical value seen on more than one row.
///
/// Emitted the moment a second occurrence is found; `rows` holds the full
/// occurrence list so far, in ascending file order. Entries for later
/// occurrences of the same value carry longer lists; entries are never merged
/// across different canonical values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    pub field: DuplicateField,
    pub value: String,
    pub rows: Vec<u64>,
}

/// A row that failed validation, with every collected error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    pub row: ContactRow,
    pub errors: Vec<String>,
    pub original_index: u64,
}

/// Outcome of one validation run: a complete partition of the file's rows.
///
/// Built empty, appended to chunk by chunk, returned once. Valid rows carry
/// their originally-parsed values, not canonical forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid_rows: Vec<ContactRow>,
    pub invalid_rows: Vec<InvalidRow>,
    pub duplicates: Vec<DuplicateEntry>,
}

impl ValidationReport {
    pub fn total_rows(&self) -> usize {
        self.valid_rows.len() + self.invalid_rows.len()
    }

    pub fn has_invalid(&self) -> bool {
        !self.invalid_rows.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.valid_rows.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_rows.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }
}
