//! Headerless CSV sheets.

use std::path::Path;

use gridkey_model::GridSnapshot;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::{build_grid, infer_cell_value, normalize_cell, read_source_bytes};

/// Reads a CSV file as a grid. Every line is a grid row, including the first.
pub fn read_csv_grid(path: &Path) -> Result<GridSnapshot> {
    let bytes = read_source_bytes(path)?;
    parse_csv_grid(path, &bytes)
}

pub(crate) fn parse_csv_grid(path: &Path, bytes: &[u8]) -> Result<GridSnapshot> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut cells = Vec::new();
    let mut display = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let texts: Vec<String> = record.iter().map(normalize_cell).collect();
        cells.push(texts.iter().map(|text| infer_cell_value(text)).collect());
        display.push(texts);
    }

    let grid = build_grid(path, cells, display)?;
    debug!(
        path = %path.display(),
        rows = grid.height(),
        cols = grid.width(),
        "loaded CSV grid"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkey_model::CellValue;

    #[test]
    fn test_parse_pads_ragged_rows() {
        let grid = parse_csv_grid(Path::new("mem.csv"), b",Jan,Feb\nAlice,8\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.value(1, 1), Some(&CellValue::Integer(8)));
        assert_eq!(grid.value(1, 2), Some(&CellValue::Empty));
        assert_eq!(grid.display(1, 2), Some(""));
    }

    #[test]
    fn test_parse_quoted_cells() {
        let grid = parse_csv_grid(Path::new("mem.csv"), b"\"Total, all\",\" 12 \"\n").unwrap();
        assert_eq!(grid.display(0, 0), Some("Total, all"));
        assert_eq!(grid.value(0, 1), Some(&CellValue::Integer(12)));
    }

    #[test]
    fn test_parse_empty_input() {
        let grid = parse_csv_grid(Path::new("mem.csv"), b"").unwrap();
        assert!(grid.is_empty());
    }
}
