//! Grid file discovery and format dispatch.

use std::path::{Path, PathBuf};

use gridkey_model::GridSnapshot;

use crate::csv_grid::read_csv_grid;
use crate::error::{IngestError, Result};
use crate::json_grid::read_json_grid;

/// On-disk grid formats, chosen by extension (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFileKind {
    Csv,
    Json,
}

impl GridFileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str())?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Reads a CSV or JSON grid, picking the reader by extension.
pub fn read_grid(path: &Path) -> Result<GridSnapshot> {
    match GridFileKind::from_path(path) {
        Some(GridFileKind::Csv) => read_csv_grid(path),
        Some(GridFileKind::Json) => read_json_grid(path),
        None => Err(IngestError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: "csv or json",
        }),
    }
}

/// Lists all grid files (CSV or JSON) in a directory.
///
/// Returns files sorted by filename.
pub fn list_sheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && GridFileKind::from_path(&path).is_some() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
