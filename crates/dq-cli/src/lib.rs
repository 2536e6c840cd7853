//! CLI library components for the data-quality checker.

pub mod config;
pub mod logging;
