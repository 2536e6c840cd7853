//! Shared utilities for the data-quality crates.
//!
//! This crate provides the Polars cell helpers every checker relies on to
//! read a table cell as text.

pub mod polars;

pub use polars::{any_to_string, cell_text, format_numeric, is_missing_value};
