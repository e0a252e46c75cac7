//! Declarative spec documents (TOML / JSON).
//!
//! Closures cannot live in a file, so transforms and exclusions are named
//! here and turned into callbacks when the document is compiled.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::spec::Axis;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecConfig {
    #[serde(default)]
    pub headers: HeadersConfig,
    /// Replaces the default header-region filter when present.
    #[serde(default)]
    pub range: Option<RangeConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadersConfig {
    #[serde(default)]
    pub colwise: Vec<HeaderSpecConfig>,
    #[serde(default)]
    pub rowwise: Vec<HeaderSpecConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderSpecConfig {
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub cascading: bool,
    pub label: String,
    #[serde(default)]
    pub transform: Option<TransformKind>,
    #[serde(default)]
    pub exclude: Option<ExcludeRule>,
}

/// Named header transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Canonical `YYYY-MM-DD`, or empty when the value is not a date.
    Date,
    Trim,
    Upper,
    Lower,
    /// Display form of the value as text.
    Text,
}

/// Positions to drop from an axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExcludeRule {
    /// Matched against the display form of the raw header value.
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub positions: Vec<usize>,
    /// Drop positions whose header value is empty.
    #[serde(default)]
    pub empty: bool,
}

/// Inclusive data-region bounds; an absent bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    #[serde(default)]
    pub min_row: Option<usize>,
    #[serde(default)]
    pub max_row: Option<usize>,
    #[serde(default)]
    pub min_col: Option<usize>,
    #[serde(default)]
    pub max_col: Option<usize>,
}

impl RangeConfig {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.min_row.is_none_or(|min| row >= min)
            && self.max_row.is_none_or(|max| row <= max)
            && self.min_col.is_none_or(|min| col >= min)
            && self.max_col.is_none_or(|max| col <= max)
    }
}

impl SpecConfig {
    /// Checks labels and range bounds.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpecError`] found.
    pub fn validate(&self) -> Result<(), SpecError> {
        for (axis, specs) in [
            (Axis::Column, &self.headers.colwise),
            (Axis::Row, &self.headers.rowwise),
        ] {
            if let Some(position) = specs.iter().position(|spec| spec.label.trim().is_empty()) {
                return Err(SpecError::EmptyLabel { axis, position });
            }
        }
        if let Some(range) = &self.range {
            check_bounds("row", range.min_row, range.max_row)?;
            check_bounds("col", range.min_col, range.max_col)?;
        }
        Ok(())
    }
}

fn check_bounds(
    name: &'static str,
    lower: Option<usize>,
    upper: Option<usize>,
) -> Result<(), SpecError> {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower > upper => Err(SpecError::InvertedRange {
            name,
            lower,
            upper,
        }),
        _ => Ok(()),
    }
}
