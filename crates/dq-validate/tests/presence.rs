//! Integration tests for the presence check.

mod common;

use dq_model::CheckError;
use dq_validate::check_presence;

use common::{owned_df, test_df};

#[test]
fn test_two_missing_emails_out_of_hundred() {
    let emails: Vec<Option<String>> = (0..100)
        .map(|idx| (idx % 50 != 0).then(|| format!("client{idx}@example.com")))
        .collect();
    let df = owned_df(vec![("email", emails)]);

    let report = check_presence(&df, &["email"]);
    let stats = report.get("email").and_then(|entry| entry.stats()).unwrap();

    assert_eq!(report.total_rows, 100);
    assert_eq!(stats.missing_count, 2);
    assert_eq!(stats.missing_percentage, 2.0);
}

#[test]
fn test_fully_populated_and_fully_empty_columns() {
    let df = test_df(vec![
        ("name", vec![Some("Alice"), Some("Bob"), Some("Carol")]),
        ("fax", vec![None, None, None]),
    ]);

    let report = check_presence(&df, &["name", "fax"]);

    let name = report.get("name").and_then(|e| e.stats()).unwrap();
    assert_eq!(name.missing_count, 0);
    assert_eq!(name.missing_percentage, 0.0);

    let fax = report.get("fax").and_then(|e| e.stats()).unwrap();
    assert_eq!(fax.missing_count, 3);
    assert_eq!(fax.missing_percentage, 100.0);
    assert_eq!(report.total_missing(), 3);
}

#[test]
fn test_absent_column_does_not_stop_the_others() {
    let df = test_df(vec![
        ("name", vec![Some("Alice"), None]),
        ("email", vec![None, None]),
    ]);

    let report = check_presence(&df, &["name", "telephone", "email"]);

    let order: Vec<&str> = report.columns.iter().map(|e| e.column.as_str()).collect();
    assert_eq!(order, vec!["name", "telephone", "email"]);
    assert_eq!(
        report.get("telephone").unwrap().outcome,
        Err(CheckError::MissingColumn {
            column: "telephone".to_string()
        })
    );
    assert_eq!(report.missing_columns(), vec!["telephone"]);
    assert_eq!(report.get("name").and_then(|e| e.stats()).unwrap().missing_count, 1);
    assert_eq!(report.get("email").and_then(|e| e.stats()).unwrap().missing_count, 2);
}

#[test]
fn test_repeated_names_reported_once() {
    let df = test_df(vec![("name", vec![Some("Alice")])]);

    let report = check_presence(&df, &["name", "name"]);

    assert_eq!(report.columns.len(), 1);
}

#[test]
fn test_empty_string_is_a_value() {
    // The loader turns blanks into nulls; anything left is a real value.
    let df = test_df(vec![("name", vec![Some(""), None])]);

    let report = check_presence(&df, &["name"]);

    assert_eq!(report.get("name").and_then(|e| e.stats()).unwrap().missing_count, 1);
}

#[test]
fn test_empty_table_has_zero_percentage() {
    let df = test_df(vec![("name", vec![])]);

    let report = check_presence(&df, &["name"]);
    let stats = report.get("name").and_then(|e| e.stats()).unwrap();

    assert_eq!(report.total_rows, 0);
    assert_eq!(stats.missing_count, 0);
    assert_eq!(stats.missing_percentage, 0.0);
}

#[test]
fn test_no_required_columns() {
    let df = test_df(vec![("name", vec![Some("Alice")])]);

    let report = check_presence::<&str>(&df, &[]);

    assert!(report.columns.is_empty());
    assert_eq!(report.total_missing(), 0);
}
