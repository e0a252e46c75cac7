//! Employee attendance sheets.
//!
//! Row 0 names each employee over a merged block of columns, row 1 names the
//! sub-columns (time in, time out, ...) and column 1 carries the date of each
//! data row.

use gridkey_core::{date_key, extract};
use gridkey_model::{CellValue, ExtractedRecord, ExtractionSpecs, GridSnapshot, HeaderSpec};
use serde::Serialize;
use tracing::info;

pub const EMPLOYEE_LABEL: &str = "employee";
pub const SUBCOLUMN_LABEL: &str = "subcolumns";
pub const DATE_LABEL: &str = "date";

pub fn attendance_specs() -> ExtractionSpecs {
    ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new(EMPLOYEE_LABEL).at(0).cascading())
        .with_colwise(HeaderSpec::new(SUBCOLUMN_LABEL).at(1))
        .with_rowwise(
            HeaderSpec::new(DATE_LABEL)
                .at(1)
                .with_transform(|value, _| date_key(value)),
        )
}

/// One attendance cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    pub employee: String,
    pub subcolumn: String,
    pub date: String,
    pub value: CellValue,
    pub display_value: String,
}

impl AttendanceEntry {
    /// Typed view of a record produced with [`attendance_specs`].
    pub fn from_record(record: &ExtractedRecord) -> Option<Self> {
        Some(Self {
            employee: record.key_text(EMPLOYEE_LABEL)?,
            subcolumn: record.key_text(SUBCOLUMN_LABEL)?,
            date: record.key_text(DATE_LABEL)?,
            value: record.value.clone(),
            display_value: record.display_value.clone(),
        })
    }
}

/// Every cell of an attendance sheet keyed by employee, sub-column and date.
pub fn extract_attendance(grid: &GridSnapshot) -> Vec<ExtractedRecord> {
    let records = extract(grid, &attendance_specs());
    info!(records = records.len(), "extracted attendance");
    records
}

/// [`extract_attendance`] as typed entries.
pub fn attendance_entries(grid: &GridSnapshot) -> Vec<AttendanceEntry> {
    extract_attendance(grid)
        .iter()
        .filter_map(AttendanceEntry::from_record)
        .collect()
}
