//! Cross-row duplicate tracking.
//!
//! Two independent append-only indices, one per canonical phone value and
//! one per canonical email, each mapping the value to the ordered list of
//! 1-based row numbers where it occurred. Detection is strictly sequential
//! in file order: the first occurrence of a value is never flagged, and
//! earlier rows are never retroactively re-flagged.

use std::collections::BTreeMap;

use contacts_model::{ContactRow, DuplicateEntry, DuplicateField, columns};

use crate::phone::normalize_phone;
use crate::schema::normalize_email;

/// Duplicate findings for one row.
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub errors: Vec<String>,
    pub entries: Vec<DuplicateEntry>,
}

/// Stateful tracker owned by a single validation run.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    phones: BTreeMap<String, Vec<u64>>,
    emails: BTreeMap<String, Vec<u64>>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row's canonical phone and (when tracked) email, returning
    /// duplicate errors and entries for this row.
    ///
    /// `track_email` mirrors the header set: files without an email column
    /// never index emails.
    pub fn record(&mut self, row: &ContactRow, original_index: u64, track_email: bool) -> RowOutcome {
        let mut outcome = RowOutcome::default();

        if let Some(phone) = normalize_phone(row.get(columns::PHONE)) {
            append_and_check(
                &mut self.phones,
                phone,
                original_index,
                DuplicateField::Phonenumber,
                "Duplicate phone number",
                &mut outcome,
            );
        }

        if track_email {
            let email = normalize_email(row.get(columns::EMAIL));
            if !email.is_empty() {
                append_and_check(
                    &mut self.emails,
                    email,
                    original_index,
                    DuplicateField::Email,
                    "Duplicate email",
                    &mut outcome,
                );
            }
        }

        outcome
    }
}

fn append_and_check(
    index: &mut BTreeMap<String, Vec<u64>>,
    value: String,
    original_index: u64,
    field: DuplicateField,
    label: &str,
    outcome: &mut RowOutcome,
) {
    let occurrences = index.entry(value.clone()).or_default();
    occurrences.push(original_index);
    if occurrences.len() < 2 {
        return;
    }
    let prior = occurrences[..occurrences.len() - 1]
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    outcome.errors.push(format!("{label} (also in rows: {prior})"));
    outcome.entries.push(DuplicateEntry {
        field,
        value,
        rows: occurrences.clone(),
    });
}
