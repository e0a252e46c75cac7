//! JSON sheets: an array of rows, each an array of scalars.

use std::path::Path;

use gridkey_model::{CellValue, GridSnapshot};
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::{build_grid, infer_cell_value, normalize_cell, read_source_bytes};

pub fn read_json_grid(path: &Path) -> Result<GridSnapshot> {
    let bytes = read_source_bytes(path)?;
    parse_json_grid(path, &bytes)
}

pub(crate) fn parse_json_grid(path: &Path, bytes: &[u8]) -> Result<GridSnapshot> {
    let document: Value = serde_json::from_slice(bytes).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(rows) = document else {
        return Err(format_error(path, "top level is not an array".to_string()));
    };

    let mut cells = Vec::with_capacity(rows.len());
    let mut display = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let Value::Array(items) = row else {
            return Err(format_error(path, format!("row {row_index} is not an array")));
        };
        let (row_cells, row_display): (Vec<CellValue>, Vec<String>) = items
            .iter()
            .enumerate()
            .map(|(col_index, item)| {
                json_cell(item).ok_or_else(|| {
                    format_error(
                        path,
                        format!("cell ({row_index}, {col_index}) is not a scalar"),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unzip();
        cells.push(row_cells);
        display.push(row_display);
    }

    let grid = build_grid(path, cells, display)?;
    debug!(
        path = %path.display(),
        rows = grid.height(),
        cols = grid.width(),
        "loaded JSON grid"
    );
    Ok(grid)
}

/// Typed value and display text of one scalar.
///
/// Strings keep their normalized source text as display, like CSV cells.
fn json_cell(item: &Value) -> Option<(CellValue, String)> {
    match item {
        Value::Null => Some((CellValue::Empty, String::new())),
        Value::Bool(value) => Some((CellValue::Bool(*value), value.to_string())),
        Value::Number(number) => number
            .as_i64()
            .map(CellValue::Integer)
            .or_else(|| number.as_f64().map(CellValue::Number))
            .map(|value| (value, number.to_string())),
        Value::String(text) => {
            let text = normalize_cell(text);
            Some((infer_cell_value(&text), text))
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn format_error(path: &Path, reason: String) -> IngestError {
    IngestError::GridFormat {
        path: path.to_path_buf(),
        reason,
    }
}
