//! Daily sales workbooks.
//!
//! A sales workbook holds one `Daily Sales - Mon YYYY` sheet per month and a
//! delivery-platform sheet (`GRAB` by default). Month sheets carry one date
//! per column in header row 1 and a two-level line label in columns 0 and 1.
//! The platform sheet repeats a `DATE, Amount, 25%, Original Price, Total`
//! block side by side, one row per day.

use std::collections::BTreeMap;
use std::sync::Arc;

use gridkey_core::{date_key, extract, extract_date, parse_month_sheet_name};
use gridkey_ingest::Workbook;
use gridkey_model::{
    Axis, CellValue, ExtractedRecord, ExtractionSpecs, GridSnapshot, HeaderSpec, KeyMap,
};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::group::group_by_key;

pub const DEFAULT_GRAB_SHEET: &str = "GRAB";
pub const GROSS_LINE: &str = "Total Gross:";
pub const PROFIT_LINE: &str = "Profit:";

const DATE_LABEL: &str = "date";
const LINE_LABEL: &str = "line";
const FIELD_LABEL: &str = "field";
const GROUP_LABEL: &str = "group";
const GROUP_START: &str = "DATE";

/// `"{title}:{subtitle}" -> value` for one day.
pub type Sales = KeyMap;

/// One day of delivery-platform sales.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrabSales {
    pub date: Option<String>,
    pub amount: Option<f64>,
    /// The platform's 25% cut.
    pub less: Option<f64>,
    pub original_price: Option<f64>,
    pub total: Option<f64>,
}

/// In-store and platform sales for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySalesSummary {
    pub date: String,
    pub sales: Sales,
    pub grab: Option<GrabSales>,
}

/// Compact view of a [`DailySalesSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleSummary {
    pub date: String,
    pub sales: GrossProfit<CellValue>,
    pub grab: GrossProfit<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrossProfit<T> {
    pub gross: Option<T>,
    pub profit: Option<T>,
}

impl DailySalesSummary {
    pub fn gross(&self) -> Option<&CellValue> {
        self.sales.get(GROSS_LINE)
    }

    pub fn profit(&self) -> Option<&CellValue> {
        self.sales.get(PROFIT_LINE)
    }

    pub fn grab_gross(&self) -> Option<f64> {
        self.grab.as_ref().and_then(|grab| grab.amount)
    }

    pub fn grab_profit(&self) -> Option<f64> {
        self.grab.as_ref().and_then(|grab| grab.total)
    }

    pub fn simple(&self) -> SimpleSummary {
        SimpleSummary {
            date: self.date.clone(),
            sales: GrossProfit {
                gross: self.gross().cloned(),
                profit: self.profit().cloned(),
            },
            grab: GrossProfit {
                gross: self.grab_gross(),
                profit: self.grab_profit(),
            },
        }
    }
}

// === Month sheets ===

/// Line keys for every row: the title in column 0 carries down until a row
/// blank in both label columns; such rows get no key.
fn line_keys(grid: &GridSnapshot) -> Vec<CellValue> {
    let mut title = String::new();
    (0..grid.height())
        .map(|row| {
            let raw_title = grid.display(row, 0).unwrap_or_default();
            let subtitle = grid.display(row, 1).unwrap_or_default();
            if raw_title.is_empty() && subtitle.is_empty() {
                title.clear();
                return CellValue::Empty;
            }
            if !raw_title.is_empty() {
                title = raw_title.to_string();
            }
            CellValue::Text(format!("{title}:{subtitle}"))
        })
        .collect()
}

pub fn daily_sales_specs(grid: &GridSnapshot) -> ExtractionSpecs {
    let lines = Arc::new(line_keys(grid));
    ExtractionSpecs::new()
        .with_colwise(
            HeaderSpec::new(DATE_LABEL)
                .at(1)
                .with_transform(|value, _| date_key(value)),
        )
        .with_rowwise(
            HeaderSpec::new(LINE_LABEL)
                .at(1)
                .with_transform(move |_, position| {
                    lines.get(position).cloned().unwrap_or_default()
                }),
        )
}

/// `date -> Sales` for one month sheet. When two columns carry the same
/// date, the later column wins.
pub fn extract_daily_sales(grid: &GridSnapshot) -> BTreeMap<String, Sales> {
    let records = extract(grid, &daily_sales_specs(grid));
    let mut by_date = BTreeMap::new();
    for column in group_by_key(&records, Axis::Column.position_label()).values() {
        let Some(date) = column.first().and_then(|record| record.key_text(DATE_LABEL)) else {
            continue;
        };
        let mut sales = Sales::new();
        for record in column {
            if let Some(line) = record.key_text(LINE_LABEL) {
                sales.insert(line, record.value.clone());
            }
        }
        by_date.insert(date, sales);
    }
    by_date
}

// === Platform sheet ===

/// Block ordinal of every column: a new block starts at each `DATE` header.
fn group_ordinals(grid: &GridSnapshot) -> Vec<CellValue> {
    let mut ordinal = 0i64;
    (0..grid.width())
        .map(|col| {
            if col > 0 && grid.display(0, col) == Some(GROUP_START) {
                ordinal += 1;
            }
            CellValue::Integer(ordinal)
        })
        .collect()
}

pub fn grab_sales_specs(grid: &GridSnapshot) -> ExtractionSpecs {
    let groups = Arc::new(group_ordinals(grid));
    ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new(FIELD_LABEL).at(0).with_transform(|value, _| {
            if value.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(value.to_string())
            }
        }))
        .with_colwise(HeaderSpec::new(GROUP_LABEL).with_transform(move |_, position| {
            groups.get(position).cloned().unwrap_or_default()
        }))
}

/// Reads a number cell, accepting thousands separators in text cells.
fn amount(value: &CellValue) -> Option<f64> {
    value.as_f64().or_else(|| {
        value
            .as_text()
            .and_then(|text| text.replace(',', "").trim().parse().ok())
    })
}

fn apply_field(sales: &mut GrabSales, record: &ExtractedRecord) {
    let Some(field) = record.key_text(FIELD_LABEL) else {
        return;
    };
    match field.as_str() {
        "DATE" => sales.date = extract_date(&record.value),
        "Amount" => sales.amount = amount(&record.value),
        "25%" => sales.less = amount(&record.value),
        "Original Price" => sales.original_price = amount(&record.value),
        "Total" => sales.total = amount(&record.value),
        _ => {}
    }
}

/// `date -> GrabSales` for the platform sheet. Blocks without a date are
/// dropped; a later block or row for the same date wins.
pub fn extract_grab_sales(grid: &GridSnapshot) -> BTreeMap<String, GrabSales> {
    let records = extract(grid, &grab_sales_specs(grid));
    let row_label = Axis::Row.position_label();

    let mut blocks: BTreeMap<(i64, i64), GrabSales> = BTreeMap::new();
    for record in &records {
        let row = record.key(row_label).and_then(integer_key);
        let group = record.key(GROUP_LABEL).and_then(integer_key);
        let (Some(row), Some(group)) = (row, group) else {
            continue;
        };
        apply_field(blocks.entry((row, group)).or_default(), record);
    }

    let mut by_date = BTreeMap::new();
    for sales in blocks.into_values() {
        if let Some(date) = sales.date.clone() {
            by_date.insert(date, sales);
        }
    }
    by_date
}

fn integer_key(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Integer(value) => Some(*value),
        _ => None,
    }
}

// === Workbook ===

/// Merges every month sheet with the platform sheet, sorted by date.
///
/// Sheets that are neither the platform sheet nor a month sheet are skipped.
pub fn summarize_workbook(workbook: &Workbook, grab_sheet: &str) -> Vec<DailySalesSummary> {
    let span = info_span!("summarize_workbook", path = %workbook.root.display());
    let _guard = span.enter();

    let mut grab = BTreeMap::new();
    let mut sales = BTreeMap::new();
    for sheet in &workbook.sheets {
        if sheet.name == grab_sheet {
            info!(sheet = %sheet.name, "parsing platform sheet");
            grab = extract_grab_sales(&sheet.grid);
        } else if parse_month_sheet_name(&sheet.name).is_some() {
            info!(sheet = %sheet.name, "parsing daily sales sheet");
            sales.extend(extract_daily_sales(&sheet.grid));
        } else {
            debug!(sheet = %sheet.name, "skipping sheet");
        }
    }

    sales
        .into_iter()
        .map(|(date, sales)| DailySalesSummary {
            grab: grab.get(&date).cloned(),
            date,
            sales,
        })
        .collect()
}
