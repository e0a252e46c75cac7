use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use gridkey_core::{Extractor, combine_layouts, compile_specs};
use gridkey_ingest::{Workbook, load_spec_file, read_grid};
use gridkey_model::{Axis, ExtractedRecord, ExtractionSpecs, GridSnapshot};
use gridkey_reports::{attendance_entries, summarize_workbook};
use serde::Serialize;
use tracing::{info, info_span, trace};

use crate::cli::{
    AttendanceArgs, ExtractArgs, LayoutArgs, OutputArgs, OutputFormatArg, SalesArgs,
};
use crate::logging::redact_value;
use crate::render::{
    attendance_table, layouts_table, records_table, render_json, sales_table,
};

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let span = info_span!("extract", grid = %args.grid.display());
    let _guard = span.enter();

    let grid = load_grid(&args.grid)?;
    let specs = load_specs(&args.spec)?;
    let records = Extractor::new(&grid, &specs).extract();
    info!(records = records.len(), "extracted records");
    trace_records(&records);

    emit(&args.output, &records, || records_table(&records))
}

pub fn run_layout(args: &LayoutArgs) -> Result<()> {
    let axis = Axis::from(args.axis);
    let span = info_span!("layout", grid = %args.grid.display(), %axis);
    let _guard = span.enter();

    let grid = load_grid(&args.grid)?;
    let specs = load_specs(&args.spec)?;
    let layouts = combine_layouts(&grid, axis, specs.specs(axis));
    let complete = layouts.iter().filter(|layout| layout.complete).count();
    info!(positions = layouts.len(), complete, "resolved axis layout");

    emit(&args.output, &layouts, || layouts_table(&layouts))
}

pub fn run_attendance(args: &AttendanceArgs) -> Result<()> {
    let span = info_span!("attendance", grid = %args.grid.display());
    let _guard = span.enter();

    let grid = load_grid(&args.grid)?;
    let entries = attendance_entries(&grid);
    info!(entries = entries.len(), "read attendance sheet");

    emit(&args.output, &entries, || attendance_table(&entries))
}

pub fn run_sales(args: &SalesArgs) -> Result<()> {
    let span = info_span!("sales", workbook = %args.workbook.display());
    let _guard = span.enter();

    let workbook = Workbook::open(&args.workbook)
        .with_context(|| format!("open workbook {}", args.workbook.display()))?;
    if workbook.sheet(&args.grab_sheet).is_none() {
        tracing::warn!(sheet = %args.grab_sheet, "platform sheet not found");
    }
    let summaries = summarize_workbook(&workbook, &args.grab_sheet);
    info!(days = summaries.len(), "summarized sales");

    match args.output.format {
        OutputFormatArg::Json => {
            let simple: Vec<_> = summaries.iter().map(|summary| summary.simple()).collect();
            write_output(args.output.output.as_deref(), &render_json(&simple)?)
        }
        OutputFormatArg::Table => write_output(
            args.output.output.as_deref(),
            &format!("{}\n", sales_table(&summaries)),
        ),
    }
}

fn load_grid(path: &Path) -> Result<GridSnapshot> {
    read_grid(path).with_context(|| format!("read grid {}", path.display()))
}

fn load_specs(path: &Path) -> Result<ExtractionSpecs> {
    let config = load_spec_file(path).with_context(|| format!("load spec {}", path.display()))?;
    compile_specs(&config).with_context(|| format!("compile spec {}", path.display()))
}

fn trace_records(records: &[ExtractedRecord]) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    for record in records {
        let keys = record
            .keys
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("$");
        trace!(keys = %keys, value = %redact_value(&record.display_value), "record");
    }
}

fn emit<T, F>(output: &OutputArgs, value: &T, table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    let text = match output.format {
        OutputFormatArg::Json => render_json(value)?,
        OutputFormatArg::Table => format!("{}\n", table()),
    };
    write_output(output.output.as_deref(), &text)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}
