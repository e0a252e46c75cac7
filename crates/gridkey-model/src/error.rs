//! Error types for grid construction and spec validation.

use thiserror::Error;

use crate::spec::Axis;

/// Errors raised while building a [`GridSnapshot`](crate::GridSnapshot).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same number of cells as the first row.
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raw values and display strings disagree on the grid shape.
    #[error("display matrix is {display_rows}x{display_cols}, values are {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        display_rows: usize,
        display_cols: usize,
    },
}

/// Errors raised while validating a declarative spec document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("{axis} header spec #{position} has an empty label")]
    EmptyLabel { axis: Axis, position: usize },

    #[error("range bound {name} is inverted: {lower} > {upper}")]
    InvertedRange {
        name: &'static str,
        lower: usize,
        upper: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
