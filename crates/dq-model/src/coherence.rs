//! Coherence (postal code, phone number) check results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which coherence rule produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceRuleKind {
    PostalCode,
    Phone,
}

impl CoherenceRuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PostalCode => "Postal code",
            Self::Phone => "Phone number",
        }
    }

    /// Name of the boolean flag column in materialized frames.
    pub fn flag_column(&self) -> &'static str {
        match self {
            Self::PostalCode => "invalid_postal_code",
            Self::Phone => "invalid_phone",
        }
    }
}

/// A row flagged invalid, carrying every original cell in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedRow {
    /// Zero-based row position in the source table.
    pub row: usize,
    pub invalid: bool,
    pub values: Vec<(String, Option<String>)>,
}

impl FlaggedRow {
    pub fn value(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }
}

/// Output of one coherence rule over one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub rule: CoherenceRuleKind,
    /// Human-readable rule, e.g. "length == 5".
    pub rule_description: String,
    pub column: String,
    pub total_rows: usize,
    pub invalid_count: usize,
    /// One flag per table row, `true` when the cell is invalid.
    pub flags: Vec<bool>,
    pub invalid_rows: Vec<FlaggedRow>,
}

impl CoherenceReport {
    pub fn is_invalid(&self, row: usize) -> bool {
        self.flags.get(row).copied().unwrap_or(false)
    }

    /// Frequency of each invalid value of the checked column, most frequent first.
    ///
    /// Null cells are counted under `None`.
    pub fn value_counts(&self) -> Vec<(Option<String>, usize)> {
        let mut tally: HashMap<Option<&str>, usize> = HashMap::new();
        for row in &self.invalid_rows {
            *tally.entry(row.value(&self.column)).or_insert(0) += 1;
        }
        let mut counts: Vec<(Option<String>, usize)> = tally
            .into_iter()
            .map(|(value, count)| (value.map(String::from), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}
