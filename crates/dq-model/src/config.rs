//! Check configuration.
//!
//! One explicit structure carries every column name and threshold the
//! checkers need. Nothing is read from call-site defaults.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Staleness threshold used when none is configured.
pub const DEFAULT_THRESHOLD_YEARS: u32 = 2;

/// Expected postal code length used when none is configured.
pub const DEFAULT_POSTAL_CODE_LENGTH: usize = 5;

/// E.164-like phone pattern: optional `+`, a digit 1-9, then 1 to 14 digits.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?[1-9]\d{1,14}$";

/// Fixed year length for the staleness threshold (no leap-year handling).
pub const DAYS_PER_YEAR: i64 = 365;

/// Staleness threshold in days for a threshold in years.
pub fn threshold_days(threshold_years: u32) -> i64 {
    i64::from(threshold_years) * DAYS_PER_YEAR
}

/// Configuration for one report run.
///
/// Loadable from TOML:
///
/// ```toml
/// date_column = "last_updated"
/// threshold_years = 2
/// required_columns = ["name", "email", "telephone"]
/// postal_code_column = "postal_code"
/// postal_code_length = 5
/// phone_column = "telephone"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Column holding the record date for the freshness check.
    pub date_column: Option<String>,
    /// Records older than this many years are obsolete.
    pub threshold_years: u32,
    /// Columns that must be populated, in report order.
    pub required_columns: Vec<String>,
    /// Column holding postal codes.
    pub postal_code_column: Option<String>,
    /// Expected postal code length, in characters.
    pub postal_code_length: usize,
    /// Column holding phone numbers.
    pub phone_column: Option<String>,
    /// Regular expression a valid phone number must match.
    pub phone_pattern: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            date_column: None,
            threshold_years: DEFAULT_THRESHOLD_YEARS,
            required_columns: Vec::new(),
            postal_code_column: None,
            postal_code_length: DEFAULT_POSTAL_CODE_LENGTH,
            phone_column: None,
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_date_column(mut self, column: impl Into<String>) -> Self {
        self.date_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_threshold_years(mut self, years: u32) -> Self {
        self.threshold_years = years;
        self
    }

    #[must_use]
    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_postal_code_column(mut self, column: impl Into<String>) -> Self {
        self.postal_code_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_postal_code_length(mut self, length: usize) -> Self {
        self.postal_code_length = length;
        self
    }

    #[must_use]
    pub fn with_phone_column(mut self, column: impl Into<String>) -> Self {
        self.phone_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_phone_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.phone_pattern = pattern.into();
        self
    }

    /// Staleness threshold in days (`threshold_years * 365`).
    pub fn threshold_days(&self) -> i64 {
        threshold_days(self.threshold_years)
    }

    /// Compile the configured phone pattern.
    pub fn compiled_phone_pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.phone_pattern).map_err(|source| ConfigError::InvalidPhonePattern {
            pattern: self.phone_pattern.clone(),
            source,
        })
    }

    /// Reject values no checker can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.postal_code_length == 0 {
            return Err(ConfigError::ZeroPostalCodeLength);
        }
        self.compiled_phone_pattern()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.threshold_years, 2);
        assert_eq!(config.postal_code_length, 5);
        assert_eq!(config.phone_pattern, DEFAULT_PHONE_PATTERN);
        assert_eq!(config.threshold_days(), 730);
        assert!(config.date_column.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let config = CheckConfig::from_toml_str(
            r#"
            date_column = "last_updated"
            required_columns = ["name", "telephone"]
            "#,
        )
        .unwrap();

        assert_eq!(config.date_column.as_deref(), Some("last_updated"));
        assert_eq!(config.required_columns, vec!["name", "telephone"]);
        assert_eq!(config.threshold_years, 2);
        assert_eq!(config.postal_code_length, 5);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let result = CheckConfig::from_toml_str("date_colum = \"typo\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let config = CheckConfig::new().with_phone_pattern("^[0-9");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPhonePattern { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let config = CheckConfig::new().with_postal_code_length(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroPostalCodeLength)
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CheckConfig::new()
            .with_date_column("updated")
            .with_phone_column("phone")
            .with_threshold_years(3);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = CheckConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
