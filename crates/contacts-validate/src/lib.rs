//! Streaming validation for uploaded contact lists.
//!
//! The engine reads a file in bounded chunks, validates each row against a
//! schema derived from the file's header set, tracks phone/email duplicates
//! across the whole file, and produces a deterministic valid/invalid
//! partition with per-row error messages and a duplicate report.

pub mod dedupe;
pub mod engine;
pub mod phone;
pub mod schema;

pub use dedupe::{DuplicateTracker, RowOutcome};
pub use engine::{EngineOptions, validate_file};
pub use phone::normalize_phone;
pub use schema::{RowSchema, normalize_email};
