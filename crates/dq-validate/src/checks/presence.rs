//! Field presence (missing-value counts per required column).

use std::collections::HashSet;

use dq_model::{ColumnPresence, MissingStats, PresenceReport};
use polars::prelude::DataFrame;
use tracing::debug;

use super::require_column;

/// Counts null cells in each required column.
///
/// Only null counts as missing; the loader has already turned empty cells
/// and null markers into nulls. A required column absent from the table gets
/// a `MissingColumn` entry instead of a 100% missing rate, and the other
/// columns are still measured. Entries follow `required_columns` order;
/// repeated names are reported once.
pub fn check_presence<S: AsRef<str>>(df: &DataFrame, required_columns: &[S]) -> PresenceReport {
    let total_rows = df.height();
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(required_columns.len());

    for name in required_columns.iter().map(AsRef::as_ref) {
        if !seen.insert(name) {
            continue;
        }
        let outcome = require_column(df, name)
            .map(|series| MissingStats::from_counts(series.null_count() as u64, total_rows));
        if let Err(error) = &outcome {
            debug!(column = name, %error, "required column absent");
        }
        columns.push(ColumnPresence {
            column: name.to_string(),
            outcome,
        });
    }

    PresenceReport {
        total_rows,
        columns,
    }
}
