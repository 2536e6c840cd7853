use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use dq_model::{
    CheckKind, CheckOutcome, CoherenceReport, FreshnessReport, FreshnessStatus, PresenceReport,
    QualityReport,
};

/// Distinct invalid values listed under each coherence table.
const TOP_INVALID_VALUES: usize = 5;

pub fn print_report(file: &Path, report: &QualityReport, max_rows: usize) {
    println!("File: {}", file.display());
    println!(
        "Rows: {}  Columns: {}  Reference date: {}",
        report.total_rows, report.total_columns, report.today
    );
    print_overview(report);

    if let CheckOutcome::Completed(freshness) = &report.freshness {
        print_freshness(freshness, max_rows);
    }
    if let CheckOutcome::Completed(presence) = &report.presence {
        print_presence(presence);
    }
    for (kind, outcome) in [
        (CheckKind::PostalCode, &report.postal_codes),
        (CheckKind::Phone, &report.phone_numbers),
    ] {
        if let CheckOutcome::Completed(coherence) = outcome {
            print_coherence(kind, coherence, max_rows);
        }
    }

    let failed = report.failed_checks();
    let absent = report.missing_required_columns();
    if !failed.is_empty() || !absent.is_empty() {
        eprintln!("Errors:");
        for (kind, error) in failed {
            eprintln!("- {}: {error}", kind.label());
        }
        for column in absent {
            eprintln!(
                "- {}: required column '{column}' not found in table",
                CheckKind::Presence.label()
            );
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    findings: u64,
    #[serde(flatten)]
    report: &'a QualityReport,
}

pub fn print_json(file: &Path, report: &QualityReport) -> Result<()> {
    let output = JsonReport {
        file: file.display().to_string(),
        findings: report.finding_count(),
        report,
    };
    let json = serde_json::to_string_pretty(&output).context("serialize report")?;
    println!("{json}");
    Ok(())
}

fn print_overview(report: &QualityReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Status"),
        header_cell("Column"),
        header_cell("Findings"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);

    table.add_row(overview_row(
        CheckKind::Freshness,
        &report.freshness,
        |f| f.column.clone(),
        |f| f.summary.obsolete as u64,
        |f| format!("older than {} years", f.threshold_years),
    ));
    table.add_row(overview_row(
        CheckKind::Presence,
        &report.presence,
        |p| format!("{} required", p.columns.len()),
        |p| p.total_missing() + p.missing_columns().len() as u64,
        |p| format!("{} missing cells", p.total_missing()),
    ));
    for (kind, outcome) in [
        (CheckKind::PostalCode, &report.postal_codes),
        (CheckKind::Phone, &report.phone_numbers),
    ] {
        table.add_row(overview_row(
            kind,
            outcome,
            |c| c.column.clone(),
            |c| c.invalid_count as u64,
            |c| c.rule_description.clone(),
        ));
    }
    println!("{table}");
}

fn overview_row<T>(
    kind: CheckKind,
    outcome: &CheckOutcome<T>,
    column: impl Fn(&T) -> String,
    findings: impl Fn(&T) -> u64,
    detail: impl Fn(&T) -> String,
) -> Vec<Cell> {
    let check = Cell::new(kind.label()).add_attribute(Attribute::Bold);
    match outcome {
        CheckOutcome::Completed(value) => vec![
            check,
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
            Cell::new(column(value)),
            count_cell(findings(value), Color::Yellow),
            Cell::new(detail(value)),
        ],
        CheckOutcome::Failed { error } => vec![
            check,
            Cell::new("FAILED").fg(Color::Red).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(error).fg(Color::Red),
        ],
        CheckOutcome::Skipped { reason } => vec![
            check,
            dim_cell("skipped"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell(reason),
        ],
    }
}

fn print_freshness(report: &FreshnessReport, max_rows: usize) {
    let summary = &report.summary;
    println!();
    println!(
        "Freshness of '{}' (older than {} years is obsolete): {} current, {} obsolete, {} unknown",
        report.column, report.threshold_years, summary.current, summary.obsolete, summary.unknown
    );
    if summary.unparseable > 0 {
        println!("  {} dates could not be parsed", summary.unparseable);
    }

    let groups: Vec<_> = report
        .counts_by_date()
        .into_iter()
        .filter(|((status, _), _)| *status != FreshnessStatus::Current)
        .collect();
    if groups.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Date"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for ((status, date), count) in groups.iter().take(max_rows) {
        table.add_row(vec![
            status_cell(*status),
            match date {
                Some(date) => Cell::new(date),
                None => dim_cell("-"),
            },
            Cell::new(count),
        ]);
    }
    println!("{table}");
    print_truncation(groups.len(), max_rows, "dates");
}

fn print_presence(report: &PresenceReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &report.columns {
        match &entry.outcome {
            Ok(stats) => table.add_row(vec![
                Cell::new(&entry.column),
                count_cell(stats.missing_count, Color::Yellow),
                Cell::new(format!("{:.2}", stats.missing_percentage)),
            ]),
            Err(error) => table.add_row(vec![
                Cell::new(&entry.column),
                Cell::new(error).fg(Color::Red),
                dim_cell("-"),
            ]),
        };
    }
    println!();
    println!("Missing data ({} rows):", report.total_rows);
    println!("{table}");
}

fn print_coherence(kind: CheckKind, report: &CoherenceReport, max_rows: usize) {
    println!();
    println!(
        "{} '{}' ({}): {} invalid of {} rows",
        kind.label(),
        report.column,
        report.rule_description,
        report.invalid_count,
        report.total_rows
    );
    let Some(first) = report.invalid_rows.first() else {
        return;
    };

    let mut table = Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(first.values.iter().map(|(name, _)| {
        if *name == report.column {
            header_cell(name).fg(Color::Red)
        } else {
            header_cell(name)
        }
    }));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in report.invalid_rows.iter().take(max_rows) {
        let mut cells = vec![Cell::new(row.row)];
        cells.extend(row.values.iter().map(|(name, value)| {
            let cell = value_cell(value.as_deref());
            if *name == report.column {
                cell.fg(Color::Red)
            } else {
                cell
            }
        }));
        table.add_row(cells);
    }
    println!("{table}");
    print_truncation(report.invalid_rows.len(), max_rows, "rows");

    let top: Vec<String> = report
        .value_counts()
        .into_iter()
        .take(TOP_INVALID_VALUES)
        .map(|(value, count)| format!("{} ({count})", value.as_deref().unwrap_or("<null>")))
        .collect();
    println!("  Most frequent invalid values: {}", top.join(", "));
}

fn print_truncation(total: usize, shown: usize, noun: &str) {
    if total > shown {
        println!("  ... {} more {noun} not shown", total - shown);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: FreshnessStatus) -> Cell {
    match status {
        FreshnessStatus::Current => Cell::new(status.label()).fg(Color::Green),
        FreshnessStatus::Obsolete => Cell::new(status.label()).fg(Color::Yellow),
        FreshnessStatus::Unknown => dim_cell(status.label()),
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("<null>"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
