//! Phone number canonicalization.
//!
//! The validation schema and the duplicate tracker share this transform so
//! that differently-formatted inputs for the same number (`9876543210`,
//! `+919876543210`) resolve to one canonical duplicate key.

use std::sync::LazyLock;

use regex::Regex;

/// Indian mobile number: optional `+91`/`91` prefix, then 10 digits with a
/// leading digit of 6-9.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+91|91)?[6-9]\d{9}$").expect("phone pattern compiles"));

/// Map a raw phone string to its canonical `+91XXXXXXXXXX` form.
///
/// Returns `None` for empty or whitespace-only input. Values that already
/// carry a `+` prefix, or that do not fit the bare-10 / `91`-prefixed
/// shapes, pass through unchanged.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.starts_with("91") && cleaned.len() == 12 {
        return Some(format!("+{cleaned}"));
    }
    if !cleaned.starts_with('+') && cleaned.len() == 10 {
        return Some(format!("+91{cleaned}"));
    }
    Some(cleaned.to_string())
}
