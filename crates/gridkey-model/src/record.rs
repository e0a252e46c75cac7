//! Axis fragments, header layouts and extracted records.

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::CellValue;

/// Ordered `label -> value` mapping; insertion order is spec declaration order.
pub type KeyMap = IndexMap<String, CellValue>;

/// One spec's contribution to one axis position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisFragment {
    pub position: usize,
    /// Label of the spec that produced this fragment.
    pub header: String,
    pub value: CellValue,
    pub exclude: bool,
}

/// One axis position with the keys of every spec declared on that axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderLayout {
    pub position: usize,
    pub keys: KeyMap,
    pub complete: bool,
}

impl HeaderLayout {
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// `$`-joined key values, stable across calls.
    pub fn serialized(&self) -> String {
        self.keys
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("$")
    }
}

/// A single data cell together with its full header key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    pub keys: KeyMap,
    pub value: CellValue,
    pub display_value: String,
}

impl ExtractedRecord {
    pub fn key(&self, label: &str) -> Option<&CellValue> {
        self.keys.get(label)
    }

    /// Display form of a key, `None` when the key is absent or empty.
    pub fn key_text(&self, label: &str) -> Option<String> {
        self.key(label)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    }
}
