//! Data model for the contact list validation pipeline.

pub mod columns;
pub mod report;
pub mod row;

pub use columns::{EMAIL, MESSAGE, PHONE, TEMPLATE_HEADERS, VAR2, VAR3};
pub use report::{DuplicateEntry, DuplicateField, InvalidRow, ValidationReport};
pub use row::{ContactRow, HeaderSet};
