//! Freshness check results.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Staleness of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    /// Age is within the threshold.
    Current,
    /// Age exceeds the threshold.
    Obsolete,
    /// The date is null or could not be parsed, so the age is undefined.
    Unknown,
}

impl FreshnessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Obsolete => "Obsolete",
            Self::Unknown => "Unknown",
        }
    }
}

/// Freshness verdict for a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFreshness {
    /// Zero-based row position in the source table.
    pub row: usize,
    /// Raw cell text, `None` for a null cell.
    pub raw: Option<String>,
    /// Parsed date, `None` when null or unparseable.
    pub date: Option<NaiveDate>,
    pub status: FreshnessStatus,
}

impl RowFreshness {
    /// True when the cell had a value that is not a recognizable date.
    pub fn is_unparseable(&self) -> bool {
        self.raw.is_some() && self.date.is_none()
    }
}

/// Row counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessSummary {
    pub current: usize,
    pub obsolete: usize,
    pub unknown: usize,
    /// Subset of `unknown` whose cell held text that did not parse.
    pub unparseable: usize,
}

impl FreshnessSummary {
    pub fn total(&self) -> usize {
        self.current + self.obsolete + self.unknown
    }

    pub fn record(&mut self, row: &RowFreshness) {
        match row.status {
            FreshnessStatus::Current => self.current += 1,
            FreshnessStatus::Obsolete => self.obsolete += 1,
            FreshnessStatus::Unknown => {
                self.unknown += 1;
                if row.is_unparseable() {
                    self.unparseable += 1;
                }
            }
        }
    }
}

/// Output of the freshness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessReport {
    pub column: String,
    pub threshold_years: u32,
    /// Reference date the ages were measured against.
    pub today: NaiveDate,
    pub rows: Vec<RowFreshness>,
    pub summary: FreshnessSummary,
}

impl FreshnessReport {
    /// Build a report, deriving the summary from the rows.
    pub fn new(
        column: impl Into<String>,
        threshold_years: u32,
        today: NaiveDate,
        rows: Vec<RowFreshness>,
    ) -> Self {
        let mut summary = FreshnessSummary::default();
        for row in &rows {
            summary.record(row);
        }
        Self {
            column: column.into(),
            threshold_years,
            today,
            rows,
            summary,
        }
    }

    pub fn obsolete_rows(&self) -> impl Iterator<Item = &RowFreshness> {
        self.rows
            .iter()
            .filter(|row| row.status == FreshnessStatus::Obsolete)
    }

    pub fn status_of(&self, row: usize) -> Option<FreshnessStatus> {
        self.rows.get(row).map(|r| r.status)
    }

    /// Row counts per (status, date) pair, ordered by status then date.
    pub fn counts_by_date(&self) -> BTreeMap<(FreshnessStatus, Option<NaiveDate>), usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry((row.status, row.date)).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        idx: usize,
        raw: Option<&str>,
        date: Option<NaiveDate>,
        status: FreshnessStatus,
    ) -> RowFreshness {
        RowFreshness {
            row: idx,
            raw: raw.map(String::from),
            date,
            status,
        }
    }

    #[test]
    fn test_summary_and_value_counts() {
        let old = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let recent = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let report = FreshnessReport::new(
            "updated",
            2,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            vec![
                row(0, Some("2019-01-01"), Some(old), FreshnessStatus::Obsolete),
                row(1, Some("2019-01-01"), Some(old), FreshnessStatus::Obsolete),
                row(2, Some("2024-01-01"), Some(recent), FreshnessStatus::Current),
                row(3, Some("soon"), None, FreshnessStatus::Unknown),
                row(4, None, None, FreshnessStatus::Unknown),
            ],
        );

        assert_eq!(report.summary.obsolete, 2);
        assert_eq!(report.summary.current, 1);
        assert_eq!(report.summary.unknown, 2);
        assert_eq!(report.summary.unparseable, 1);
        assert_eq!(report.summary.total(), 5);
        assert_eq!(report.obsolete_rows().count(), 2);

        let counts = report.counts_by_date();
        assert_eq!(counts.get(&(FreshnessStatus::Obsolete, Some(old))), Some(&2));
        assert_eq!(counts.get(&(FreshnessStatus::Unknown, None)), Some(&2));
        assert_eq!(
            counts.keys().next(),
            Some(&(FreshnessStatus::Current, Some(recent)))
        );
    }
}
