//! Field coherence: postal-code length and phone-number format.
//!
//! Each rule is a pure predicate over a single cell. A null cell is invalid
//! under both rules: the coherence check reports absent values too, even
//! though the presence check may count the same cell as missing.

use std::sync::LazyLock;

use dq_common::cell_text;
use dq_model::{
    CheckConfig, CheckError, CoherenceReport, CoherenceRuleKind, ConfigError,
    DEFAULT_PHONE_PATTERN, DEFAULT_POSTAL_CODE_LENGTH, FlaggedRow,
};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use regex::Regex;
use tracing::debug;

use super::{frame_error, require_column};

/// E.164-like phone format: optional `+`, a digit 1-9, then 1 to 14 digits.
static E164_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PHONE_PATTERN).expect("Invalid E.164 regex"));

/// A per-cell validity rule.
pub trait CellRule {
    fn kind(&self) -> CoherenceRuleKind;

    /// Short human-readable form of the rule.
    fn describe(&self) -> String;

    /// `value` is the cell rendered as text, `None` for null.
    fn is_invalid(&self, value: Option<&str>) -> bool;
}

/// Postal codes must have exactly `expected_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalCodeRule {
    pub expected_length: usize,
}

impl PostalCodeRule {
    pub fn new(expected_length: usize) -> Self {
        Self { expected_length }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(config.postal_code_length)
    }
}

impl Default for PostalCodeRule {
    fn default() -> Self {
        Self::new(DEFAULT_POSTAL_CODE_LENGTH)
    }
}

impl CellRule for PostalCodeRule {
    fn kind(&self) -> CoherenceRuleKind {
        CoherenceRuleKind::PostalCode
    }

    fn describe(&self) -> String {
        format!("length == {}", self.expected_length)
    }

    fn is_invalid(&self, value: Option<&str>) -> bool {
        match value {
            Some(code) => code.chars().count() != self.expected_length,
            None => true,
        }
    }
}

/// Phone numbers must match a pattern (E.164-like by default).
#[derive(Debug, Clone)]
pub struct PhoneRule {
    pattern: Regex,
}

impl PhoneRule {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|source| ConfigError::InvalidPhonePattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn from_config(config: &CheckConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: config.compiled_phone_pattern()?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self {
            pattern: E164_REGEX.clone(),
        }
    }
}

impl CellRule for PhoneRule {
    fn kind(&self) -> CoherenceRuleKind {
        CoherenceRuleKind::Phone
    }

    fn describe(&self) -> String {
        format!("matches {}", self.pattern.as_str())
    }

    fn is_invalid(&self, value: Option<&str>) -> bool {
        match value {
            Some(number) => !self.pattern.is_match(number),
            None => true,
        }
    }
}

/// Applies `rule` to every cell of `column`.
///
/// The report carries one flag per row and, for each invalid row, a copy of
/// all its cells so renderers can show the full record.
pub fn check_rule<R: CellRule + ?Sized>(
    df: &DataFrame,
    column: &str,
    rule: &R,
) -> Result<CoherenceReport, CheckError> {
    let series = require_column(df, column)?;
    let total_rows = df.height();

    let flags: Vec<bool> = (0..total_rows)
        .map(|idx| rule.is_invalid(cell_text(series, idx).as_deref()))
        .collect();

    let invalid_rows: Vec<FlaggedRow> = flags
        .iter()
        .enumerate()
        .filter(|(_, invalid)| **invalid)
        .map(|(idx, _)| flagged_row(df, idx))
        .collect();

    debug!(
        column,
        rule = %rule.describe(),
        invalid = invalid_rows.len(),
        "coherence rule applied"
    );

    Ok(CoherenceReport {
        rule: rule.kind(),
        rule_description: rule.describe(),
        column: column.to_string(),
        total_rows,
        invalid_count: invalid_rows.len(),
        flags,
        invalid_rows,
    })
}

/// Postal-code rule over `column`, expected length from `config`.
pub fn check_postal_codes(
    df: &DataFrame,
    column: &str,
    config: &CheckConfig,
) -> Result<CoherenceReport, CheckError> {
    check_rule(df, column, &PostalCodeRule::from_config(config))
}

/// Phone rule over `column` with an already compiled rule.
pub fn check_phone_numbers(
    df: &DataFrame,
    column: &str,
    rule: &PhoneRule,
) -> Result<CoherenceReport, CheckError> {
    check_rule(df, column, rule)
}

fn flagged_row(df: &DataFrame, idx: usize) -> FlaggedRow {
    FlaggedRow {
        row: idx,
        invalid: true,
        values: df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), cell_text(col, idx)))
            .collect(),
    }
}

/// Materializes the invalid rows of `report` as a new DataFrame.
///
/// The result holds the original columns plus a boolean flag column. When
/// the table already has a column with the flag's name, underscores are
/// appended until the name is free. `df` itself is left untouched.
pub fn invalid_frame(df: &DataFrame, report: &CoherenceReport) -> Result<DataFrame, CheckError> {
    if report.flags.len() != df.height() {
        return Err(CheckError::DataFrame {
            message: format!(
                "report covers {} rows but table has {}",
                report.flags.len(),
                df.height()
            ),
        });
    }

    let mut flag_name = report.rule.flag_column().to_string();
    while df.column(&flag_name).is_ok() {
        flag_name.push('_');
    }

    let mask = Series::new(flag_name.as_str().into(), &report.flags);
    let mut subset = df
        .filter(mask.bool().map_err(frame_error)?)
        .map_err(frame_error)?;
    let flag = Series::new(flag_name.as_str().into(), vec![true; subset.height()]).into_column();
    subset.with_column(flag).map_err(frame_error)?;
    Ok(subset)
}
