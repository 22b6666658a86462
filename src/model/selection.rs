//! Parsing of the order-number argument.

use std::collections::BTreeSet;

/// Error type for order selection parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No order numbers given (expected e.g. \"1001,1002\")")]
    Empty,
}

/// The order numbers requested for one run.
///
/// Keeps the raw argument verbatim, since the sheet title must show exactly
/// what was asked for (no dedup, no reordering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSelection {
    raw: String,
    numbers: Vec<String>,
}

impl OrderSelection {
    /// Parse a comma-separated list of order numbers.
    ///
    /// Empty pieces (`"1001,,1002"`) cannot match any order and are skipped
    /// for lookup. At least one non-empty number is required.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let numbers: Vec<String> = raw
            .split(',')
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();

        if numbers.is_empty() {
            return Err(SelectionError::Empty);
        }

        Ok(Self {
            raw: raw.to_string(),
            numbers,
        })
    }

    /// The argument exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Order numbers in input order, duplicates included.
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Distinct order numbers, for lookup.
    pub fn distinct(&self) -> BTreeSet<&str> {
        self.numbers.iter().map(String::as_str).collect()
    }
}
