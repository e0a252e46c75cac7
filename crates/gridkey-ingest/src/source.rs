//! Raw file access and cell inference shared by the grid readers.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use gridkey_model::{CellValue, GridSnapshot};

use crate::error::{IngestError, Result};

/// Maximum file size for grid loading (500 MB).
pub const MAX_GRID_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads a whole file, rejecting UTF-16 input and dropping a UTF-8 BOM.
pub(crate) fn read_source_bytes(path: &Path) -> Result<Vec<u8>> {
    check_file_size_with_limit(path, MAX_GRID_FILE_SIZE)?;
    let mut bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(bytes)
}

/// Display form of a raw text cell: trimmed, BOM removed.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim_start_matches('\u{FEFF}').trim().to_string()
}

/// Infers a typed value from a normalized cell string.
pub fn infer_cell_value(text: &str) -> CellValue {
    if text.is_empty() {
        return CellValue::Empty;
    }
    if text.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(value) = text.parse::<i64>() {
        return CellValue::Integer(value);
    }
    // Rules out "inf" and "NaN", which f64 parsing accepts.
    if text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() {
                return CellValue::Number(value);
            }
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return CellValue::Date(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return CellValue::DateTime(datetime);
        }
    }
    CellValue::Text(text.to_string())
}

/// Pads ragged rows to the widest one and builds the snapshot.
pub(crate) fn build_grid(
    path: &Path,
    mut cells: Vec<Vec<CellValue>>,
    mut display: Vec<Vec<String>>,
) -> Result<GridSnapshot> {
    let width = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut padded = 0usize;
    for (row, text) in cells.iter_mut().zip(display.iter_mut()) {
        if row.len() < width {
            padded += 1;
            row.resize(width, CellValue::Empty);
            text.resize(width, String::new());
        }
    }
    if padded > 0 {
        tracing::debug!(path = %path.display(), rows = padded, width, "padded ragged rows");
    }
    GridSnapshot::new(cells, display).map_err(|source| IngestError::InvalidGrid {
        path: path.to_path_buf(),
        source,
    })
}
