//! Error kinds raised by the checkers and by configuration validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A checker-level failure.
///
/// These are caught by the report assembler and folded into the failing
/// check's section, so one bad column never aborts the other checks.
/// Per-cell problems (an unparseable date, an invalid postal code) are
/// findings, not errors, and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckError {
    /// A configured column name is absent from the table.
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    /// The underlying table operation failed.
    #[error("table operation failed: {message}")]
    DataFrame { message: String },
}

impl CheckError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// Errors raised while building or validating a [`crate::CheckConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The phone pattern is not a valid regular expression.
    #[error("invalid phone pattern '{pattern}': {source}")]
    InvalidPhonePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A postal code can never have zero characters.
    #[error("expected postal code length must be greater than zero")]
    ZeroPostalCodeLength,

    /// The config file is not valid TOML for a check configuration.
    #[error("failed to parse check configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
