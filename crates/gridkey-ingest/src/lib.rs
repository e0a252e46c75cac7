//! Grid ingestion utilities.
//!
//! This crate turns files on disk into [`GridSnapshot`](gridkey_model::GridSnapshot)s
//! and [`SpecConfig`](gridkey_model::SpecConfig)s for the extraction engine.
//!
//! # Features
//!
//! - **CSV Grids**: headerless, ragged-tolerant CSV with typed cell inference
//! - **JSON Grids**: arrays of rows of scalars
//! - **Workbooks**: a folder of grid files, one sheet per file
//! - **Spec Files**: TOML or JSON header spec documents
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gridkey_ingest::{Workbook, load_spec_file, read_grid};
//!
//! let grid = read_grid(Path::new("hours.csv"))?;
//! let config = load_spec_file(Path::new("hours.toml"))?;
//! let workbook = Workbook::open(Path::new("sales/"))?;
//! ```

mod csv_grid;
mod discovery;
mod error;
mod json_grid;
mod source;
mod spec_file;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Grid Reading ===
pub use csv_grid::read_csv_grid;
pub use json_grid::read_json_grid;
pub use source::{MAX_GRID_FILE_SIZE, check_file_size_with_limit, infer_cell_value, normalize_cell};

// === File Discovery ===
pub use discovery::{GridFileKind, list_sheet_files, read_grid};

// === Workbooks ===
pub use workbook::{Sheet, Workbook};

// === Spec Files ===
pub use spec_file::load_spec_file;
