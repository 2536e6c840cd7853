//! Format dispatch and post-load shape checks.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::csv::read_delimited;
use crate::error::{IngestError, Result};
use crate::format::TableFormat;
use crate::options::LoadOptions;
use crate::spreadsheet::read_spreadsheet;

/// Wide tables still load, but are worth a warning.
const WIDE_TABLE_COLUMNS: usize = 500;

/// Loads a table with default options.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    load_table_with_options(path, &LoadOptions::default())
}

/// Loads a delimited-text or spreadsheet file into a DataFrame.
///
/// The format comes from the file extension; anything that is neither
/// delimited text nor a spreadsheet fails with
/// [`IngestError::UnsupportedFormat`] before the file is touched.
pub fn load_table_with_options(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let format = TableFormat::from_path(path)?;
    check_readable(path)?;

    debug!(path = %path.display(), ?format, "loading table");
    let df = match format {
        TableFormat::Csv | TableFormat::Tsv => {
            let delimiter = options
                .delimiter
                .or_else(|| format.default_delimiter())
                .unwrap_or(b',');
            read_delimited(path, delimiter, options)?
        }
        TableFormat::Spreadsheet => read_spreadsheet(path, options)?,
    };

    validate_shape(&df, path)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

/// Fails early for missing or empty files.
fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// A table needs at least one column; zero rows is a valid empty table.
fn validate_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.width() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    if df.width() > WIDE_TABLE_COLUMNS {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "table has more than {WIDE_TABLE_COLUMNS} columns"
        );
    }

    if df.height() == 0 {
        warn!(path = %path.display(), "table has a header but no rows");
    }
    Ok(())
}
