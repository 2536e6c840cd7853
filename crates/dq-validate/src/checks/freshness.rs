//! Record freshness (staleness by date threshold).
//!
//! A row is obsolete when `today - date` exceeds `threshold_years * 365`
//! days. The year length is fixed at 365 days. Rows whose date is null or
//! not a recognizable date are `Unknown` rather than forced into either
//! boolean outcome.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dq_common::cell_text;
use dq_model::{CheckError, FreshnessReport, FreshnessStatus, RowFreshness, threshold_days};
use polars::prelude::DataFrame;
use tracing::debug;

use super::require_column;

/// Date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Date-time layouts, tried in order; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a cell as a calendar date.
///
/// Returns `None` for empty or unrecognized text; callers treat that as an
/// unknown age rather than an error.
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = parse_compact_date(trimmed) {
        return Some(date);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// `YYYYMMDD` with no separators.
fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Classifies one date against the threshold.
pub fn classify_date(
    date: Option<NaiveDate>,
    today: NaiveDate,
    threshold_years: u32,
) -> FreshnessStatus {
    let Some(date) = date else {
        return FreshnessStatus::Unknown;
    };
    let age_days = today.signed_duration_since(date).num_days();
    if age_days > threshold_days(threshold_years) {
        FreshnessStatus::Obsolete
    } else {
        FreshnessStatus::Current
    }
}

/// Flags every row of `df` by the age of its `column` date.
pub fn check_freshness(
    df: &DataFrame,
    column: &str,
    threshold_years: u32,
    today: NaiveDate,
) -> Result<FreshnessReport, CheckError> {
    let series = require_column(df, column)?;

    let rows: Vec<RowFreshness> = (0..df.height())
        .map(|idx| {
            let raw = cell_text(series, idx);
            let date = raw.as_deref().and_then(parse_date_value);
            RowFreshness {
                row: idx,
                status: classify_date(date, today, threshold_years),
                raw,
                date,
            }
        })
        .collect();

    let report = FreshnessReport::new(column, threshold_years, today, rows);
    debug!(
        column,
        obsolete = report.summary.obsolete,
        current = report.summary.current,
        unknown = report.summary.unknown,
        "freshness check finished"
    );
    if report.summary.unparseable > 0 {
        debug!(
            column,
            unparseable = report.summary.unparseable,
            "some dates could not be parsed"
        );
    }
    Ok(report)
}
