//! Data model for the client-record quality checks.
//!
//! Every type here is a derived, read-only view: the checkers build them
//! fresh from a loaded table and never mutate the table itself.

pub mod coherence;
pub mod config;
pub mod error;
pub mod freshness;
pub mod presence;
pub mod report;

pub use coherence::{CoherenceReport, CoherenceRuleKind, FlaggedRow};
pub use config::{
    CheckConfig, DEFAULT_PHONE_PATTERN, DEFAULT_POSTAL_CODE_LENGTH, DEFAULT_THRESHOLD_YEARS,
    DAYS_PER_YEAR, threshold_days,
};
pub use error::{CheckError, ConfigError};
pub use freshness::{FreshnessReport, FreshnessStatus, FreshnessSummary, RowFreshness};
pub use presence::{ColumnPresence, MissingStats, PresenceReport};
pub use report::{CheckKind, CheckOutcome, QualityReport};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_report() -> QualityReport {
        QualityReport {
            total_rows: 4,
            total_columns: 3,
            today: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            freshness: CheckOutcome::Skipped {
                reason: "no date column configured".to_string(),
            },
            presence: CheckOutcome::Completed(PresenceReport {
                total_rows: 4,
                columns: vec![
                    ColumnPresence {
                        column: "email".to_string(),
                        outcome: Ok(MissingStats::from_counts(1, 4)),
                    },
                    ColumnPresence {
                        column: "fax".to_string(),
                        outcome: Err(CheckError::MissingColumn {
                            column: "fax".to_string(),
                        }),
                    },
                ],
            }),
            postal_codes: CheckOutcome::Failed {
                error: CheckError::MissingColumn {
                    column: "zip".to_string(),
                },
            },
            phone_numbers: CheckOutcome::Skipped {
                reason: "no phone column configured".to_string(),
            },
        }
    }

    #[test]
    fn report_counts_findings_and_failures() {
        let report = sample_report();

        // One missing email plus the absent fax column
        assert_eq!(report.finding_count(), 2);
        assert!(report.has_findings());
        assert_eq!(report.failed_checks().len(), 1);
        assert_eq!(report.failed_checks()[0].0, CheckKind::PostalCode);
    }

    #[test]
    fn absent_required_column_is_an_error() {
        let mut report = sample_report();
        assert_eq!(report.missing_required_columns(), vec!["fax"]);

        report.postal_codes = CheckOutcome::skipped("no postal code column configured");
        assert!(!report.has_failures());
        assert!(report.has_errors());

        report.presence = CheckOutcome::skipped("no required columns configured");
        assert!(report.missing_required_columns().is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn report_serializes() {
        let report = sample_report();
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: QualityReport = serde_json::from_str(&json).expect("deserialize report");

        assert_eq!(round, report);
        assert!(json.contains("\"status\":\"skipped\""));
        assert!(json.contains("\"kind\":\"missing_column\""));
    }
}
