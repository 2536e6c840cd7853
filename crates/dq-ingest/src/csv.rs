//! Delimited-text reading with Polars.

use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

/// Rows sampled for schema inference when types are inferred.
const INFER_SCHEMA_ROWS: usize = 100;

/// Reads a delimited file into a DataFrame.
///
/// Without type inference every column is read as text, so values such as
/// `01234` keep their leading zero. Empty fields and the configured null
/// markers are read as null.
pub fn read_delimited(path: &Path, delimiter: u8, options: &LoadOptions) -> Result<DataFrame> {
    let null_values = NullValues::AllColumns(
        options
            .null_values
            .iter()
            .map(|value| value.as_str().into())
            .collect(),
    );
    let parse_options = CsvParseOptions::default()
        .with_separator(delimiter)
        .with_missing_is_null(true)
        .with_null_values(Some(null_values));

    let infer_rows = if options.infer_types {
        INFER_SCHEMA_ROWS
    } else {
        0
    };

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(infer_rows))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
