//! Runtime header specifications.
//!
//! A [`HeaderSpec`] says where one header dimension lives on one axis and how
//! its values turn into keys. Callbacks are shared function values; the
//! engine never catches a panic raised inside them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Maps a raw (possibly cascaded) header value to the key used in records.
pub type HeaderTransform = Arc<dyn Fn(&CellValue, usize) -> CellValue + Send + Sync>;

/// Drops an axis position when it returns true.
pub type HeaderExclude = Arc<dyn Fn(&CellValue, usize) -> bool + Send + Sync>;

/// Decides whether a `(row, col)` pair lies in the data region.
pub type RangePredicate = Arc<dyn Fn(usize, usize) -> bool + Send + Sync>;

/// One of the two grid dimensions headers are declared along.
///
/// `Column` specs key columns and read their values from a header *row*;
/// `Row` specs key rows and read from a header *column*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    /// Label of the positional key prepended to every layout on this axis.
    pub const fn position_label(self) -> &'static str {
        match self {
            Self::Column => "col-position",
            Self::Row => "row-position",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "colwise",
            Self::Row => "rowwise",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct HeaderSpec {
    /// Row (column-wise specs) or column (row-wise specs) holding the header
    /// values. `None` keys each position by its own ordinal.
    pub index: Option<usize>,
    /// Empty values inherit the nearest preceding non-empty value.
    pub cascading: bool,
    pub label: String,
    pub exclude: Option<HeaderExclude>,
    pub transform: Option<HeaderTransform>,
}

impl HeaderSpec {
    /// A spec without an index: keys are the bare axis positions.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            index: None,
            cascading: false,
            label: label.into(),
            exclude: None,
            transform: None,
        }
    }

    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    #[must_use]
    pub fn cascading(mut self) -> Self {
        self.cascading = true;
        self
    }

    #[must_use]
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&CellValue, usize) -> CellValue + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    #[must_use]
    pub fn with_exclude<F>(mut self, exclude: F) -> Self
    where
        F: Fn(&CellValue, usize) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Arc::new(exclude));
        self
    }
}

impl fmt::Debug for HeaderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderSpec")
            .field("index", &self.index)
            .field("cascading", &self.cascading)
            .field("label", &self.label)
            .field("exclude", &self.exclude.is_some())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Everything one extraction needs besides the grid.
#[derive(Clone, Default)]
pub struct ExtractionSpecs {
    pub colwise: Vec<HeaderSpec>,
    pub rowwise: Vec<HeaderSpec>,
    /// Replaces the default header-region filter when set.
    pub within_range: Option<RangePredicate>,
}

impl ExtractionSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colwise(mut self, spec: HeaderSpec) -> Self {
        self.colwise.push(spec);
        self
    }

    #[must_use]
    pub fn with_rowwise(mut self, spec: HeaderSpec) -> Self {
        self.rowwise.push(spec);
        self
    }

    #[must_use]
    pub fn with_range<F>(mut self, predicate: F) -> Self
    where
        F: Fn(usize, usize) -> bool + Send + Sync + 'static,
    {
        self.within_range = Some(Arc::new(predicate));
        self
    }

    pub fn specs(&self, axis: Axis) -> &[HeaderSpec] {
        match axis {
            Axis::Column => &self.colwise,
            Axis::Row => &self.rowwise,
        }
    }
}

impl fmt::Debug for ExtractionSpecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionSpecs")
            .field("colwise", &self.colwise)
            .field("rowwise", &self.rowwise)
            .field("within_range", &self.within_range.is_some())
            .finish()
    }
}
