//! Cross-join extraction.

use gridkey_model::{
    Axis, ExtractedRecord, ExtractionSpecs, GridSnapshot, HeaderLayout, HeaderSpec,
};
use tracing::{debug, info_span};

use crate::layout::axis_layout;

/// Default data region: strictly below the last header row and strictly right
/// of the last header column. A side without indexed specs is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultRange {
    pub last_header_row: Option<usize>,
    pub last_header_col: Option<usize>,
}

impl DefaultRange {
    pub fn from_specs(specs: &ExtractionSpecs) -> Self {
        Self {
            last_header_row: max_index(&specs.colwise),
            last_header_col: max_index(&specs.rowwise),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.last_header_row.is_none_or(|last| row > last)
            && self.last_header_col.is_none_or(|last| col > last)
    }
}

fn max_index(specs: &[HeaderSpec]) -> Option<usize> {
    specs.iter().filter_map(|spec| spec.index).max()
}

/// Reads one grid with one set of specs.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    grid: &'a GridSnapshot,
    specs: &'a ExtractionSpecs,
}

impl<'a> Extractor<'a> {
    pub fn new(grid: &'a GridSnapshot, specs: &'a ExtractionSpecs) -> Self {
        Self { grid, specs }
    }

    /// Complete layouts of one axis.
    pub fn layouts(&self, axis: Axis) -> Vec<HeaderLayout> {
        axis_layout(self.grid, axis, self.specs.specs(axis))
    }

    /// Whether `(row, col)` is part of the data region.
    pub fn within_range(&self, row: usize, col: usize) -> bool {
        self.in_range(&DefaultRange::from_specs(self.specs), row, col)
    }

    fn in_range(&self, default_range: &DefaultRange, row: usize, col: usize) -> bool {
        match &self.specs.within_range {
            Some(predicate) => predicate(row, col),
            None => default_range.contains(row, col),
        }
    }

    /// One record per (column layout, row layout) pair inside the range.
    ///
    /// Column layouts drive the outer loop; row keys overwrite column keys
    /// with the same label.
    pub fn extract(&self) -> Vec<ExtractedRecord> {
        let span = info_span!(
            "extract",
            rows = self.grid.height(),
            cols = self.grid.width()
        );
        let _guard = span.enter();
        let columns = self.layouts(Axis::Column);
        let rows = self.layouts(Axis::Row);
        let default_range = DefaultRange::from_specs(self.specs);

        let mut records = Vec::new();
        for column in &columns {
            let col = column.position;
            for row_layout in &rows {
                let row = row_layout.position;
                if !self.in_range(&default_range, row, col) {
                    continue;
                }
                let mut keys = column.keys.clone();
                for (label, value) in &row_layout.keys {
                    keys.insert(label.clone(), value.clone());
                }
                records.push(ExtractedRecord {
                    keys,
                    value: self.grid.value(row, col).cloned().unwrap_or_default(),
                    display_value: self.grid.display(row, col).unwrap_or_default().to_string(),
                });
            }
        }
        debug!(
            column_layouts = columns.len(),
            row_layouts = rows.len(),
            records = records.len(),
            "extraction complete"
        );
        records
    }
}

/// Extracts every keyed record from `grid`.
pub fn extract(grid: &GridSnapshot, specs: &ExtractionSpecs) -> Vec<ExtractedRecord> {
    Extractor::new(grid, specs).extract()
}
