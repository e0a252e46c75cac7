//! Immutable grid snapshots.

use crate::error::{GridError, Result};
use crate::spec::Axis;
use crate::value::CellValue;

/// A rectangular matrix of raw values and their display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridSnapshot {
    cells: Vec<Vec<CellValue>>,
    display: Vec<Vec<String>>,
    width: usize,
}

impl GridSnapshot {
    /// Builds a snapshot from parallel value and display matrices.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] when rows differ in length and
    /// [`GridError::ShapeMismatch`] when the two matrices disagree.
    pub fn new(cells: Vec<Vec<CellValue>>, display: Vec<Vec<String>>) -> Result<Self> {
        let width = check_rectangular(cells.iter().map(Vec::len))?;
        let display_width = check_rectangular(display.iter().map(Vec::len))?;
        if cells.len() != display.len() || (!cells.is_empty() && width != display_width) {
            return Err(GridError::ShapeMismatch {
                rows: cells.len(),
                cols: width,
                display_rows: display.len(),
                display_cols: display_width,
            });
        }
        Ok(Self {
            cells,
            display,
            width,
        })
    }

    /// Builds a snapshot whose display strings are the values' `Display` form.
    pub fn from_values(cells: Vec<Vec<CellValue>>) -> Result<Self> {
        let display = cells
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        Self::new(cells, display)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() || self.width == 0
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cells.get(row).and_then(|cells| cells.get(col))
    }

    pub fn display(&self, row: usize, col: usize) -> Option<&str> {
        self.display
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
    }

    /// Number of positions along `axis`: columns for column-wise headers,
    /// rows for row-wise headers.
    pub fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Column => self.width,
            Axis::Row => self.height(),
        }
    }

    /// Header values at `index` across the full length of `axis`.
    ///
    /// An out-of-range index yields `Empty` at every position.
    pub fn header_values(&self, axis: Axis, index: usize) -> Vec<CellValue> {
        let len = self.axis_len(axis);
        (0..len)
            .map(|position| {
                let cell = match axis {
                    Axis::Column => self.value(index, position),
                    Axis::Row => self.value(position, index),
                };
                cell.cloned().unwrap_or_default()
            })
            .collect()
    }
}

fn check_rectangular(mut lengths: impl Iterator<Item = usize>) -> Result<usize> {
    let Some(expected) = lengths.next() else {
        return Ok(0);
    };
    for (offset, found) in lengths.enumerate() {
        if found != expected {
            return Err(GridError::RaggedRow {
                row: offset + 1,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}
