//! Row validation schema derived from a file's header set.
//!
//! The schema is a pure function of the headers: the same header set always
//! yields the same rule set. Rules are independent per-field variants; every
//! violated rule contributes its own message and nothing short-circuits, so
//! a row can carry several errors at once.

use std::sync::LazyLock;

use regex::Regex;

use contacts_model::{ContactRow, HeaderSet, columns};

use crate::phone::PHONE_PATTERN;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MESSAGE_MAX_CHARS: usize = 160;

/// Canonical email form used as the duplicate-detection key.
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// Required Indian mobile number.
    Phone,
    /// Email column present in the file: required and shape-checked.
    EmailRequired,
    /// No email column: the field is skipped entirely.
    EmailSkipped,
    /// Required message, capped at `max_chars` characters.
    Message { max_chars: usize },
    /// Free text, unconstrained.
    Unchecked,
}

impl FieldRule {
    fn check(self, value: &str, errors: &mut Vec<String>) {
        match self {
            Self::Phone => {
                if value.is_empty() {
                    errors.push("Phone number is required".to_string());
                }
                if !PHONE_PATTERN.is_match(value) {
                    errors.push(
                        "Must be a valid Indian phone number (10 digits with 91 or +91 country code)"
                            .to_string(),
                    );
                }
            }
            Self::EmailRequired => {
                if value.is_empty() {
                    errors.push("Email is required when email column exists".to_string());
                }
                if !EMAIL_PATTERN.is_match(value) {
                    errors.push("Invalid email format - must contain @ symbol".to_string());
                }
            }
            Self::EmailSkipped => {}
            Self::Message { max_chars } => {
                if value.is_empty() {
                    errors.push("Message is required".to_string());
                }
                if value.chars().count() > max_chars {
                    errors.push(format!("Message exceeds {max_chars} character limit"));
                }
            }
            Self::Unchecked => {}
        }
    }
}

/// Validation rule set for one header shape.
#[derive(Debug, Clone)]
pub struct RowSchema {
    rules: Vec<(&'static str, FieldRule)>,
}

impl RowSchema {
    /// Build the rule set for a header set. The only variance is the email
    /// rule, which switches on whether the file carries an email column.
    pub fn for_headers(headers: &HeaderSet) -> Self {
        let email_rule = if headers.has_email() {
            FieldRule::EmailRequired
        } else {
            FieldRule::EmailSkipped
        };
        Self {
            rules: vec![
                (columns::PHONE, FieldRule::Phone),
                (columns::EMAIL, email_rule),
                (
                    columns::MESSAGE,
                    FieldRule::Message {
                        max_chars: MESSAGE_MAX_CHARS,
                    },
                ),
                (columns::VAR2, FieldRule::Unchecked),
                (columns::VAR3, FieldRule::Unchecked),
            ],
        }
    }

    /// Collect every rule violation for a row. An empty result means the
    /// row passed the schema.
    pub fn validate(&self, row: &ContactRow) -> Vec<String> {
        let mut errors = Vec::new();
        for (column, rule) in &self.rules {
            rule.check(row.get(column), &mut errors);
        }
        errors
    }
}
