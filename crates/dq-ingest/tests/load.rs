//! Integration tests for table loading.

use std::io::Write;
use std::path::Path;

use dq_common::cell_text;
use dq_ingest::{IngestError, LoadOptions, load_table, load_table_with_options};
use polars::prelude::DataType;
use tempfile::{Builder, NamedTempFile};

fn temp_table(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn loads_csv_as_text_with_nulls() {
    let file = temp_table(
        ".csv",
        "name,postal_code,telephone\nAda,01234,+14155552671\nBob,,NA\nCyd,75001,\n",
    );
    let df = load_table(file.path()).unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);

    let postal = df.column("postal_code").unwrap();
    assert_eq!(postal.dtype(), &DataType::String);
    assert_eq!(cell_text(postal, 0), Some("01234".to_string()));
    assert_eq!(postal.null_count(), 1);

    let phone = df.column("telephone").unwrap();
    assert_eq!(phone.null_count(), 2);
}

#[test]
fn loads_tsv_with_tab_separator() {
    let file = temp_table(".tsv", "a\tb\n1\t2\n");
    let df = load_table(file.path()).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(cell_text(df.column("b").unwrap(), 0), Some("2".to_string()));
}

#[test]
fn delimiter_override_applies_to_csv() {
    let file = temp_table(".csv", "a;b\n1;2\n3;4\n");
    let options = LoadOptions::new().with_delimiter(b';');
    let df = load_table_with_options(file.path(), &options).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(df.height(), 2);
}

#[test]
fn infer_types_reads_numbers() {
    let file = temp_table(".csv", "id,score\n1,2.5\n2,3.5\n");
    let options = LoadOptions::new().with_infer_types(true);
    let df = load_table_with_options(file.path(), &options).unwrap();

    assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("score").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn header_only_csv_is_an_empty_table() {
    let file = temp_table(".csv", "name,telephone\n");
    let df = load_table(file.path()).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn empty_file_is_rejected() {
    let file = temp_table(".csv", "");
    let result = load_table(file.path());

    assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let result = load_table(Path::new("/does/not/exist/clients.json"));

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedFormat { ref extension, .. }) if extension == "json"
    ));
}

#[test]
fn missing_file_is_reported() {
    let result = load_table(Path::new("/does/not/exist/clients.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn corrupt_spreadsheet_is_reported() {
    let file = temp_table(".xlsx", "this is not a workbook");
    let result = load_table(file.path());

    assert!(matches!(result, Err(IngestError::Spreadsheet { .. })));
}

fn clients_workbook() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/clients.xlsx")
}

fn column_texts(df: &polars::prelude::DataFrame, name: &str) -> Vec<Option<String>> {
    let column = df.column(name).unwrap();
    (0..df.height()).map(|idx| cell_text(column, idx)).collect()
}

#[test]
fn loads_first_sheet_of_workbook_as_text() {
    let df = load_table(&clients_workbook()).unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(
        df.get_column_names_str(),
        vec!["name", "postal_code", "telephone", "last_updated", "score"]
    );
    for column in df.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
    }
    assert_eq!(
        column_texts(&df, "name"),
        vec![Some("Ada".into()), Some("Bob".into()), Some("Cyd".into())]
    );
}

#[test]
fn spreadsheet_cells_keep_codes_and_drop_null_markers() {
    let df = load_table(&clients_workbook()).unwrap();

    assert_eq!(
        column_texts(&df, "postal_code"),
        vec![Some("01234".into()), Some("75001".into()), None]
    );
    assert_eq!(
        column_texts(&df, "telephone"),
        vec![Some("+14155552671".into()), None, Some("33612345678".into())]
    );
    assert_eq!(
        column_texts(&df, "score"),
        vec![Some("1.5".into()), Some("2".into()), None]
    );
}

#[test]
fn spreadsheet_dates_render_as_iso_text() {
    let df = load_table(&clients_workbook()).unwrap();

    assert_eq!(
        column_texts(&df, "last_updated"),
        vec![
            Some("2024-01-01".into()),
            Some("2019-01-01".into()),
            Some("2024-01-01 12:00:00".into()),
        ]
    );
}

#[test]
fn named_sheet_is_selected() {
    let options = LoadOptions::new().with_sheet("Archive");
    let df = load_table_with_options(&clients_workbook(), &options).unwrap();

    assert_eq!(df.get_column_names_str(), vec!["id"]);
    assert_eq!(column_texts(&df, "id"), vec![Some("7".into())]);
}

#[test]
fn unknown_sheet_is_reported() {
    let options = LoadOptions::new().with_sheet("Missing");
    let err = load_table_with_options(&clients_workbook(), &options).unwrap_err();

    assert!(
        matches!(&err, IngestError::SheetNotFound { sheet, .. } if sheet == "Missing"),
        "unexpected error: {err}"
    );
}
