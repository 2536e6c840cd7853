//! Spreadsheet reading with calamine.
//!
//! The first row of the sheet is the header. Every cell is rendered as text
//! so spreadsheets and CSV files reach the checkers in the same shape.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveTime;
use dq_common::format_numeric;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

/// Reads one worksheet into a DataFrame.
pub fn read_spreadsheet(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names();
    let sheet = match &options.sheet {
        Some(name) if sheet_names.iter().any(|s| s == name) => name.clone(),
        Some(name) => {
            return Err(IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.clone(),
            });
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptyTable {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };

    let raw_headers: Vec<Option<String>> = header_row.iter().map(cell_to_text).collect();
    let headers = normalize_headers(&raw_headers);
    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for row in rows {
        for (idx, column_values) in values.iter_mut().enumerate() {
            let text = row
                .get(idx)
                .and_then(cell_to_text)
                .filter(|text| !options.is_null_marker(text));
            column_values.push(text);
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(values)
        .map(|(name, column_values)| Series::new(name.into(), column_values).into_column())
        .collect();

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        columns = columns.len(),
        "read worksheet"
    );

    Ok(DataFrame::new(columns)?)
}

/// Renders a cell as text, `None` for empty and error cells.
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if datetime.time() == NaiveTime::MIN => {
                Some(datetime.date().format("%Y-%m-%d").to_string())
            }
            Some(datetime) => Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Some(format_numeric(dt.as_f64())),
        },
        other => Some(other.to_string()),
    }
}

/// Names blank headers `Unnamed: <index>` and suffixes duplicates with `.1`, `.2`, ...
///
/// A suffix is raised until the name is free, so a sheet that already has an
/// `a.1` column next to two `a` columns still yields unique names.
fn normalize_headers(raw: &[Option<String>]) -> Vec<String> {
    let mut emitted: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    raw.iter()
        .enumerate()
        .map(|(idx, header)| {
            let base = match header.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("Unnamed: {idx}"),
            };
            if emitted.insert(base.clone()) {
                return base;
            }
            let suffix = next_suffix.entry(base.clone()).or_insert(1);
            loop {
                let candidate = format!("{base}.{suffix}");
                *suffix += 1;
                if emitted.insert(candidate.clone()) {
                    return candidate;
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_headers() {
        let raw = vec![
            Some("name".to_string()),
            None,
            Some("name".to_string()),
            Some("  ".to_string()),
            Some("name".to_string()),
        ];
        assert_eq!(
            normalize_headers(&raw),
            vec!["name", "Unnamed: 1", "name.1", "Unnamed: 3", "name.2"]
        );
    }

    #[test]
    fn test_normalize_headers_skips_taken_suffixes() {
        let raw = vec![
            Some("a".to_string()),
            Some("a".to_string()),
            Some("a.1".to_string()),
        ];
        let headers = normalize_headers(&raw);
        assert_eq!(headers, vec!["a", "a.1", "a.1.1"]);

        let raw = vec![
            Some("a.1".to_string()),
            Some("a".to_string()),
            Some("a".to_string()),
            Some("Unnamed: 3".to_string()),
            None,
        ];
        assert_eq!(
            normalize_headers(&raw),
            vec!["a.1", "a", "a.2", "Unnamed: 3", "Unnamed: 4"]
        );
    }

    #[test]
    fn test_normalized_headers_build_a_frame() {
        let raw = vec![
            Some("a".to_string()),
            Some("a".to_string()),
            Some("a.1".to_string()),
        ];
        let columns: Vec<Column> = normalize_headers(&raw)
            .into_iter()
            .map(|name| Series::new(name.into(), vec![Some("x")]).into_column())
            .collect();

        let df = DataFrame::new(columns).unwrap();
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(cell_to_text(&Data::Empty), None);
        assert_eq!(cell_to_text(&Data::Float(75001.0)), Some("75001".to_string()));
        assert_eq!(cell_to_text(&Data::Int(42)), Some("42".to_string()));
        assert_eq!(
            cell_to_text(&Data::String("+14155552671".to_string())),
            Some("+14155552671".to_string())
        );
    }
}
