//! Presence (missing-value) check results.

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Missing-value statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingStats {
    pub missing_count: u64,
    /// `100 * missing_count / total_rows`, in `[0, 100]`.
    pub missing_percentage: f64,
}

impl MissingStats {
    /// Derive the percentage from the counts.
    ///
    /// An empty table has no missing cells, so its percentage is `0.0`.
    pub fn from_counts(missing_count: u64, total_rows: usize) -> Self {
        let missing_percentage = if total_rows == 0 {
            0.0
        } else {
            missing_count as f64 * 100.0 / total_rows as f64
        };
        Self {
            missing_count,
            missing_percentage,
        }
    }
}

/// Presence outcome for one required column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPresence {
    pub column: String,
    /// Stats when the column exists, `MissingColumn` otherwise.
    pub outcome: Result<MissingStats, CheckError>,
}

impl ColumnPresence {
    pub fn stats(&self) -> Option<&MissingStats> {
        self.outcome.as_ref().ok()
    }
}

/// Output of the presence check, one entry per required column in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceReport {
    pub total_rows: usize,
    pub columns: Vec<ColumnPresence>,
}

impl PresenceReport {
    pub fn get(&self, column: &str) -> Option<&ColumnPresence> {
        self.columns.iter().find(|entry| entry.column == column)
    }

    /// Sum of missing cells across the columns that exist.
    pub fn total_missing(&self) -> u64 {
        self.columns
            .iter()
            .filter_map(ColumnPresence::stats)
            .map(|stats| stats.missing_count)
            .sum()
    }

    /// Required columns absent from the table.
    pub fn missing_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|entry| entry.outcome.is_err())
            .map(|entry| entry.column.as_str())
            .collect()
    }
}
