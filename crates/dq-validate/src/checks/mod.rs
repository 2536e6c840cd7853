//! Validation check modules.
//!
//! Each module implements one checker. Checkers take the table by shared
//! reference and return a freshly built result; none writes back into it.

pub mod coherence;
pub mod freshness;
pub mod presence;

use dq_model::CheckError;
use polars::prelude::{Column, DataFrame, PolarsError};

/// Look up a configured column, surfacing absence as `MissingColumn`.
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, CheckError> {
    df.column(name).map_err(|_| CheckError::missing_column(name))
}

pub(crate) fn frame_error(err: PolarsError) -> CheckError {
    CheckError::DataFrame {
        message: err.to_string(),
    }
}
