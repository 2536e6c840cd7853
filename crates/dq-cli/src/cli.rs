//! CLI argument definitions for the data-quality checker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dq_cli::config::{ConfigOverrides, split_column_list};

#[derive(Parser)]
#[command(
    name = "dq-check",
    version,
    about = "Data-quality report for client-record tables",
    long_about = "Check a CSV or spreadsheet of client records for stale rows,\n\
                  missing values in required columns, malformed postal codes\n\
                  and malformed phone numbers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the quality checks on a table and print the report.
    Check(CheckArgs),

    /// List the columns of a table with null counts and sample values.
    Columns(ColumnsArgs),
}

/// How to read the input file.
#[derive(Parser)]
pub struct InputArgs {
    /// CSV, TSV or spreadsheet (xls, xlsx, xlsm, xlsb, ods) file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Worksheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Field delimiter for delimited text, e.g. ';' or 'tab'.
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Infer column types instead of reading every column as text.
    ///
    /// Inference drops leading zeros from codes such as postal codes.
    #[arg(long = "infer-types")]
    pub infer_types: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// TOML file with the check configuration; flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Column holding the record date.
    #[arg(long = "date-column", value_name = "COLUMN")]
    pub date_column: Option<String>,

    /// Records older than this many years are obsolete.
    #[arg(long = "threshold-years", value_name = "YEARS")]
    pub threshold_years: Option<u32>,

    /// Comma-separated columns that must be populated.
    #[arg(long = "required", value_name = "COLUMNS")]
    pub required: Option<String>,

    /// Column holding postal codes.
    #[arg(long = "postal-column", value_name = "COLUMN")]
    pub postal_column: Option<String>,

    /// Expected postal code length.
    #[arg(long = "postal-length", value_name = "N")]
    pub postal_length: Option<usize>,

    /// Column holding phone numbers.
    #[arg(long = "phone-column", value_name = "COLUMN")]
    pub phone_column: Option<String>,

    /// Regular expression a valid phone number must match.
    #[arg(long = "phone-pattern", value_name = "REGEX")]
    pub phone_pattern: Option<String>,

    /// Reference date for record ages (default: the local date).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Maximum rows shown per detail table.
    #[arg(long = "max-rows", value_name = "N", default_value_t = 20)]
    pub max_rows: usize,

    /// Exit with status 1 when any finding is reported.
    ///
    /// Without this flag the exit status is 1 only when a check could not run
    /// or a required column is absent from the table. Findings (obsolete
    /// rows, missing values, invalid postal codes or phone numbers) exit 0.
    #[arg(long = "strict")]
    pub strict: bool,
}

impl CheckArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            date_column: self.date_column.clone(),
            threshold_years: self.threshold_years,
            required_columns: self.required.as_deref().map(split_column_list),
            postal_code_column: self.postal_column.clone(),
            postal_code_length: self.postal_length,
            phone_column: self.phone_column.clone(),
            phone_pattern: self.phone_pattern.clone(),
        }
    }
}

#[derive(Parser)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of sample values shown per column.
    #[arg(long = "samples", value_name = "N", default_value_t = 3)]
    pub samples: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
                _ => Err(format!("expected a single ASCII character, got {value:?}")),
            }
        }
    }
}
