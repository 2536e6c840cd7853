//! Report assembly.
//!
//! Runs the three checkers over the same table and collects their outcomes.
//! A checker that fails (for example on a missing column) is recorded as
//! failed in its own section; the remaining checkers still run.

use std::time::Instant;

use chrono::NaiveDate;
use dq_model::{CheckConfig, CheckError, CheckKind, CheckOutcome, ConfigError, QualityReport};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use crate::checks::coherence::{PhoneRule, PostalCodeRule, check_rule};
use crate::checks::freshness::check_freshness;
use crate::checks::presence::check_presence;

/// Runs every configured check over a table.
///
/// Construction validates the configuration and compiles the phone pattern
/// once; [`ReportAssembler::run`] is then infallible and free of side effects
/// beyond logging, so calling it twice on the same table yields equal reports.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    config: CheckConfig,
    postal_rule: PostalCodeRule,
    phone_rule: PhoneRule,
}

impl ReportAssembler {
    pub fn new(config: CheckConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let phone_rule = PhoneRule::from_config(&config)?;
        Ok(Self {
            postal_rule: PostalCodeRule::from_config(&config),
            phone_rule,
            config,
        })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Runs all checks, measuring ages against `today`.
    pub fn run(&self, df: &DataFrame, today: NaiveDate) -> QualityReport {
        let span = info_span!("report", rows = df.height(), columns = df.width());
        let _guard = span.enter();
        let config = &self.config;

        let freshness = match &config.date_column {
            Some(column) => run_check(CheckKind::Freshness, || {
                check_freshness(df, column, config.threshold_years, today)
            }),
            None => CheckOutcome::skipped("no date column configured"),
        };

        let presence = if config.required_columns.is_empty() {
            CheckOutcome::skipped("no required columns configured")
        } else {
            run_check(CheckKind::Presence, || {
                Ok(check_presence(df, &config.required_columns))
            })
        };

        let postal_codes = match &config.postal_code_column {
            Some(column) => run_check(CheckKind::PostalCode, || {
                check_rule(df, column, &self.postal_rule)
            }),
            None => CheckOutcome::skipped("no postal code column configured"),
        };

        let phone_numbers = match &config.phone_column {
            Some(column) => run_check(CheckKind::Phone, || {
                check_rule(df, column, &self.phone_rule)
            }),
            None => CheckOutcome::skipped("no phone column configured"),
        };

        let report = QualityReport {
            total_rows: df.height(),
            total_columns: df.width(),
            today,
            freshness,
            presence,
            postal_codes,
            phone_numbers,
        };
        info!(
            findings = report.finding_count(),
            failed_checks = report.failed_checks().len(),
            "report assembled"
        );
        report
    }
}

/// Builds a report in one call.
pub fn build_report(
    df: &DataFrame,
    config: &CheckConfig,
    today: NaiveDate,
) -> Result<QualityReport, ConfigError> {
    Ok(ReportAssembler::new(config.clone())?.run(df, today))
}

fn run_check<T>(
    kind: CheckKind,
    check: impl FnOnce() -> Result<T, CheckError>,
) -> CheckOutcome<T> {
    let span = info_span!("check", check = kind.label());
    let _guard = span.enter();
    let start = Instant::now();
    let result = check();
    match &result {
        Ok(_) => debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "check completed"
        ),
        Err(error) => warn!(%error, "check failed, recorded in report"),
    }
    CheckOutcome::from_result(result)
}
