//! Shared fixtures for the checker tests.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

pub fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

pub fn owned_df(columns: Vec<(&str, Vec<Option<String>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn today() -> NaiveDate {
    date(2024, 6, 1)
}

/// `today()` minus `days`, formatted as ISO text.
pub fn days_ago(days: u64) -> String {
    (today() - Days::new(days)).format("%Y-%m-%d").to_string()
}
