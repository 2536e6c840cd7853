//! Column hints and sample value extraction.

use std::collections::BTreeSet;

use dq_common::cell_text;
use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};

/// Summary of one column, used for previews and column pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHint {
    pub name: String,
    /// Polars dtype name, e.g. `str` or `i64`.
    pub dtype: String,
    pub null_count: usize,
    pub null_ratio: f64,
    /// Distinct non-null values divided by non-null count.
    pub unique_ratio: f64,
}

/// Builds column hints from a DataFrame, in column order.
pub fn build_column_hints(df: &DataFrame) -> Vec<ColumnHint> {
    df.get_columns().iter().map(analyze_column).collect()
}

fn analyze_column(col: &Column) -> ColumnHint {
    let total = col.len();
    let null_count = col.null_count();
    let mut unique_values: BTreeSet<String> = BTreeSet::new();
    for idx in 0..total {
        if let Some(value) = cell_text(col, idx) {
            unique_values.insert(value);
        }
    }

    let non_null = total - null_count;
    let null_ratio = if total == 0 {
        0.0
    } else {
        null_count as f64 / total as f64
    };
    let unique_ratio = if non_null > 0 {
        unique_values.len() as f64 / non_null as f64
    } else {
        0.0
    };

    ColumnHint {
        name: col.name().to_string(),
        dtype: col.dtype().to_string(),
        null_count,
        null_ratio,
        unique_ratio,
    }
}

/// Gets sample unique values from a column.
///
/// Returns up to `limit` distinct non-null values in first-seen order.
pub fn get_sample_values(df: &DataFrame, column: &str, limit: usize) -> Vec<String> {
    let Ok(col) = df.column(column) else {
        return Vec::new();
    };

    let mut seen = BTreeSet::new();
    let mut samples = Vec::new();
    for idx in 0..col.len() {
        if samples.len() >= limit {
            break;
        }
        if let Some(value) = cell_text(col, idx)
            && seen.insert(value.clone())
        {
            samples.push(value);
        }
    }
    samples
}
