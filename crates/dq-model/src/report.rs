//! The aggregated quality report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coherence::CoherenceReport;
use crate::error::CheckError;
use crate::freshness::FreshnessReport;
use crate::presence::PresenceReport;

/// The four sections of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Freshness,
    Presence,
    PostalCode,
    Phone,
}

impl CheckKind {
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Freshness,
        CheckKind::Presence,
        CheckKind::PostalCode,
        CheckKind::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Freshness => "Freshness",
            Self::Presence => "Missing data",
            Self::PostalCode => "Postal codes",
            Self::Phone => "Phone numbers",
        }
    }
}

/// Result of one check inside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum CheckOutcome<T> {
    /// The check ran to completion.
    Completed(T),
    /// The check could not run; the error is kept for the report.
    Failed { error: CheckError },
    /// The check was not configured.
    Skipped { reason: String },
}

impl<T> CheckOutcome<T> {
    pub fn from_result(result: Result<T, CheckError>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(error) => Self::Failed { error },
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn completed(&self) -> Option<&T> {
        match self {
            Self::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CheckError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Completed(_) => "completed",
            Self::Failed { .. } => "failed",
            Self::Skipped { .. } => "skipped",
        }
    }
}

/// Every check's outcome for one table.
///
/// Built fresh on each run; running the same configuration over the same
/// table twice yields equal reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_rows: usize,
    pub total_columns: usize,
    pub today: NaiveDate,
    pub freshness: CheckOutcome<FreshnessReport>,
    pub presence: CheckOutcome<PresenceReport>,
    pub postal_codes: CheckOutcome<CoherenceReport>,
    pub phone_numbers: CheckOutcome<CoherenceReport>,
}

impl QualityReport {
    /// Status label of every check, in report order.
    pub fn statuses(&self) -> Vec<(CheckKind, &'static str)> {
        CheckKind::ALL
            .iter()
            .map(|kind| (*kind, self.status_of(*kind)))
            .collect()
    }

    fn status_of(&self, kind: CheckKind) -> &'static str {
        match kind {
            CheckKind::Freshness => self.freshness.status_label(),
            CheckKind::Presence => self.presence.status_label(),
            CheckKind::PostalCode => self.postal_codes.status_label(),
            CheckKind::Phone => self.phone_numbers.status_label(),
        }
    }

    /// Checks that could not run, with their error.
    pub fn failed_checks(&self) -> Vec<(CheckKind, &CheckError)> {
        let candidates = [
            (CheckKind::Freshness, self.freshness.error()),
            (CheckKind::Presence, self.presence.error()),
            (CheckKind::PostalCode, self.postal_codes.error()),
            (CheckKind::Phone, self.phone_numbers.error()),
        ];
        candidates
            .into_iter()
            .filter_map(|(kind, error)| error.map(|e| (kind, e)))
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_checks().is_empty()
    }

    /// Required columns absent from the table.
    ///
    /// Presence still completes for the other columns, so these are not in
    /// [`QualityReport::failed_checks`].
    pub fn missing_required_columns(&self) -> Vec<&str> {
        self.presence
            .completed()
            .map(PresenceReport::missing_columns)
            .unwrap_or_default()
    }

    /// A check failed or a required column is absent.
    pub fn has_errors(&self) -> bool {
        self.has_failures() || !self.missing_required_columns().is_empty()
    }

    /// Obsolete rows, missing cells, absent required columns and invalid cells.
    pub fn finding_count(&self) -> u64 {
        let mut count = 0u64;
        if let Some(freshness) = self.freshness.completed() {
            count += freshness.summary.obsolete as u64;
        }
        if let Some(presence) = self.presence.completed() {
            count += presence.total_missing();
            count += presence.missing_columns().len() as u64;
        }
        for coherence in [&self.postal_codes, &self.phone_numbers] {
            if let Some(report) = coherence.completed() {
                count += report.invalid_count as u64;
            }
        }
        count
    }

    pub fn has_findings(&self) -> bool {
        self.finding_count() > 0
    }
}
