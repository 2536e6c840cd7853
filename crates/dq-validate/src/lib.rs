//! Data-quality checks for tabular client records.
//!
//! Three independent checkers scan the same read-only table:
//!
//! - **Freshness**: records whose date is older than a threshold
//! - **Presence**: missing-value counts for required columns
//! - **Coherence**: postal-code length and phone-number format
//!
//! The [`ReportAssembler`] runs all of them and folds per-check failures
//! into the report instead of aborting.

pub mod checks;
mod report;

pub use checks::coherence::{
    CellRule, PhoneRule, PostalCodeRule, check_phone_numbers, check_postal_codes, check_rule,
    invalid_frame,
};
pub use checks::freshness::{check_freshness, classify_date, parse_date_value};
pub use checks::presence::check_presence;
pub use report::{ReportAssembler, build_report};
