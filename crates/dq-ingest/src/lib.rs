//! Table loading for the data-quality checks.
//!
//! This crate turns a delimited-text or spreadsheet file into a Polars
//! `DataFrame`, the in-memory table every checker scans.
//!
//! # Features
//!
//! - **Format dispatch**: pick the reader from the file extension
//! - **Null normalization**: empty cells and common null markers become null
//! - **Text-first reading**: columns are read as text unless type inference is asked for
//! - **Column hints**: per-column null and cardinality statistics for previews
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dq_ingest::{load_table, build_column_hints};
//!
//! let df = load_table(Path::new("clients.csv"))?;
//! for hint in build_column_hints(&df) {
//!     println!("{}: {} nulls", hint.name, hint.null_count);
//! }
//! ```

mod csv;
mod error;
mod format;
mod hints;
mod loader;
mod options;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use format::TableFormat;
pub use loader::{load_table, load_table_with_options};
pub use options::{DEFAULT_NULL_VALUES, LoadOptions};

// === Column Hints ===
pub use hints::{ColumnHint, build_column_hints, get_sample_values};
