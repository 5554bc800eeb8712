use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns;

/// Ordered list of column names taken from a file's header row.
///
/// Immutable for the duration of one validation run. Which schema variant
/// applies (email required vs. skipped) depends only on this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSet {
    names: Vec<String>,
}

impl HeaderSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// True when the file carries an email column, which switches the email
    /// rule from "skipped" to "required and validated".
    pub fn has_email(&self) -> bool {
        self.contains(columns::EMAIL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl From<Vec<String>> for HeaderSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl<'a> FromIterator<&'a str> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(String::from).collect())
    }
}

/// One input record: a mapping from column name to string value.
///
/// Every header key is always present; cells a malformed record did not
/// supply are empty strings. Row identity is its 1-based position in the
/// source file, carried separately as `original_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRow {
    cells: BTreeMap<String, String>,
}

impl ContactRow {
    /// Build a row by zipping header names with record values.
    ///
    /// Short records are padded with empty strings; extra trailing values
    /// with no matching header are dropped.
    pub fn from_cells<I>(headers: &HeaderSet, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut values = values.into_iter();
        let cells = headers
            .iter()
            .map(|name| {
                let value = values.next().map(Into::into).unwrap_or_default();
                (name.to_string(), value)
            })
            .collect();
        Self { cells }
    }

    /// Value for a column, or the empty string when absent.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    pub fn cells(&self) -> &BTreeMap<String, String> {
        &self.cells
    }
}

impl FromIterator<(String, String)> for ContactRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
