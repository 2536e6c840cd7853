//! End-to-end tests for the dq-check binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CLIENTS: &str = "\
name,email,telephone,postal_code,last_updated
Alice,alice@example.com,+33612345678,75001,2024-01-15
Bob,,0612345678,7500,2019-03-01
Carol,carol@example.com,+14155552671,06000,2023-11-30
";

fn write_clients(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("clients.csv");
    fs::write(&path, CLIENTS).unwrap();
    path
}

fn dq_check(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dq-check"))
        .args(["--color", "never"])
        .args(args.iter().take(1))
        .arg(file)
        .args(args.iter().skip(1))
        .args(["--today", "2024-06-01"])
        .output()
        .unwrap()
}

#[test]
fn test_clean_run_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir);

    let output = dq_check(
        &["check", "--date-column", "last_updated", "--required", "name,email"],
        &file,
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Freshness"));
    assert!(stdout.contains("1 obsolete"));
}

#[test]
fn test_strict_fails_on_findings() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir);

    let output = dq_check(&["check", "--postal-column", "postal_code", "--strict"], &file);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_column_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir);

    let output = dq_check(
        &["check", "--phone-column", "phone", "--postal-column", "postal_code"],
        &file,
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("column 'phone' not found"));
}

#[test]
fn test_absent_required_column_exits_one() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir);

    let output = dq_check(&["check", "--required", "name,fax"], &file);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required column 'fax' not found"));
}

#[test]
fn test_json_output_keeps_leading_zeros() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir);

    let output = dq_check(
        &["check", "--postal-column", "postal_code", "--format", "json"],
        &file,
    );

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_rows"], 3);
    assert_eq!(json["findings"], 1);
    assert_eq!(json["postal_codes"]["status"], "completed");
    assert_eq!(json["postal_codes"]["detail"]["invalid_count"], 1);
    assert_eq!(json["freshness"]["status"], "skipped");
}

#[test]
fn test_unreadable_input_exits_one() {
    let dir = TempDir::new().unwrap();

    let output = dq_check(&["check"], &dir.path().join("absent.csv"));

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
