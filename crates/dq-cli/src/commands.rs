use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use dq_cli::config::resolve_config;
use dq_ingest::{LoadOptions, build_column_hints, get_sample_values, load_table_with_options};
use dq_model::QualityReport;
use dq_validate::ReportAssembler;

use crate::cli::{CheckArgs, ColumnsArgs, InputArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

pub fn run_check(args: &CheckArgs) -> Result<QualityReport> {
    let file = &args.input.file;
    let span = info_span!("check", file = %file.display());
    let _guard = span.enter();

    let config = resolve_config(args.config.as_deref(), &args.overrides())?;
    let assembler =
        ReportAssembler::new(config).context("invalid check configuration")?;
    let df = load_input(&args.input)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let start = Instant::now();
    let report = assembler.run(&df, today);
    info!(
        today = %today,
        findings = report.finding_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "checks finished"
    );
    Ok(report)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let df = load_input(&args.input)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
        header_cell("Null %"),
        header_cell("Unique %"),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for hint in build_column_hints(&df) {
        let samples = get_sample_values(&df, &hint.name, args.samples).join(", ");
        table.add_row(vec![
            Cell::new(&hint.name),
            Cell::new(&hint.dtype),
            Cell::new(hint.null_count),
            Cell::new(format!("{:.1}", hint.null_ratio * 100.0)),
            Cell::new(format!("{:.1}", hint.unique_ratio * 100.0)),
            Cell::new(samples),
        ]);
    }
    println!(
        "{}: {} rows, {} columns",
        args.input.file.display(),
        df.height(),
        df.width()
    );
    println!("{table}");
    Ok(())
}

fn load_input(input: &InputArgs) -> Result<DataFrame> {
    let mut options = LoadOptions::new().with_infer_types(input.infer_types);
    if let Some(delimiter) = input.delimiter {
        options = options.with_delimiter(delimiter);
    }
    if let Some(sheet) = &input.sheet {
        options = options.with_sheet(sheet.clone());
    }
    load_table_with_options(&input.file, &options)
        .with_context(|| format!("load {}", input.file.display()))
}
