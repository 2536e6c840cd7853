//! Check configuration: TOML file merged with command-line overrides.
//!
//! Precedence is defaults, then the config file, then flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dq_model::CheckConfig;
use tracing::debug;

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub date_column: Option<String>,
    pub threshold_years: Option<u32>,
    pub required_columns: Option<Vec<String>>,
    pub postal_code_column: Option<String>,
    pub postal_code_length: Option<usize>,
    pub phone_column: Option<String>,
    pub phone_pattern: Option<String>,
}

impl ConfigOverrides {
    /// Applies every set override to `config`.
    #[must_use]
    pub fn apply(&self, mut config: CheckConfig) -> CheckConfig {
        if let Some(column) = &self.date_column {
            config.date_column = Some(column.clone());
        }
        if let Some(years) = self.threshold_years {
            config.threshold_years = years;
        }
        if let Some(columns) = &self.required_columns {
            config.required_columns = columns.clone();
        }
        if let Some(column) = &self.postal_code_column {
            config.postal_code_column = Some(column.clone());
        }
        if let Some(length) = self.postal_code_length {
            config.postal_code_length = length;
        }
        if let Some(column) = &self.phone_column {
            config.phone_column = Some(column.clone());
        }
        if let Some(pattern) = &self.phone_pattern {
            config.phone_pattern = pattern.clone();
        }
        config
    }
}

/// Reads a TOML configuration file.
pub fn read_config_file(path: &Path) -> Result<CheckConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config = CheckConfig::from_toml_str(&content)
        .with_context(|| format!("parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded check configuration");
    Ok(config)
}

/// Builds the effective configuration and validates it.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<CheckConfig> {
    let base = match path {
        Some(path) => read_config_file(path)?,
        None => CheckConfig::default(),
    };
    let config = overrides.apply(base);
    config.validate().context("invalid check configuration")?;
    Ok(config)
}

/// Splits a comma-separated column list, dropping blanks.
pub fn split_column_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_column_list() {
        assert_eq!(
            split_column_list("name, email,,telephone "),
            vec!["name", "email", "telephone"]
        );
        assert!(split_column_list(" , ").is_empty());
    }

    #[test]
    fn test_overrides_leave_unset_fields() {
        let base = CheckConfig::new()
            .with_date_column("last_updated")
            .with_threshold_years(3);
        let overrides = ConfigOverrides {
            threshold_years: Some(1),
            phone_column: Some("telephone".to_string()),
            ..ConfigOverrides::default()
        };

        let merged = overrides.apply(base);

        assert_eq!(merged.date_column.as_deref(), Some("last_updated"));
        assert_eq!(merged.threshold_years, 1);
        assert_eq!(merged.phone_column.as_deref(), Some("telephone"));
        assert_eq!(merged.postal_code_column, None);
    }
}
