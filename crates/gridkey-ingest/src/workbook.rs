//! Workbook folders: one sheet per grid file.

use std::path::{Path, PathBuf};

use gridkey_model::GridSnapshot;
use tracing::info;

use crate::discovery::{list_sheet_files, read_grid};
use crate::error::{IngestError, Result};

/// A named grid loaded from one file of a workbook folder.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// File stem, e.g. `Daily Sales - Jan 2024`.
    pub name: String,
    pub path: PathBuf,
    pub grid: GridSnapshot,
}

/// Every sheet of a workbook folder, in file-name order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub root: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Loads every CSV or JSON file under `dir` as a sheet.
    ///
    /// # Errors
    ///
    /// Fails when the folder cannot be listed, a sheet cannot be read, or two
    /// files share a stem.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut sheets: Vec<Sheet> = Vec::new();
        for path in list_sheet_files(dir)? {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            if sheets.iter().any(|sheet| sheet.name == name) {
                return Err(IngestError::DuplicateSheet { name, path });
            }
            let grid = read_grid(&path)?;
            sheets.push(Sheet { name, path, grid });
        }
        info!(path = %dir.display(), sheets = sheets.len(), "opened workbook");
        Ok(Self {
            root: dir.to_path_buf(),
            sheets,
        })
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}
