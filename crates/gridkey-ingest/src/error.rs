//! Error types for grid ingestion.

use std::path::PathBuf;

use gridkey_model::{GridError, SpecError};
use thiserror::Error;

/// Errors that can occur while loading grids, workbooks and spec files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Grid or spec file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte-order mark we cannot decode.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Extension is neither a grid nor a spec format.
    #[error("unsupported file extension for {path} (expected {expected})")]
    UnsupportedExtension {
        path: PathBuf,
        expected: &'static str,
    },

    // === Parsing Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed TOML.
    #[error("failed to parse TOML {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON grid is not an array of arrays of scalars.
    #[error("unexpected grid layout in {path}: {reason}")]
    GridFormat { path: PathBuf, reason: String },

    // === Model Errors ===
    /// Parsed cells do not form a valid grid.
    #[error("invalid grid in {path}: {source}")]
    InvalidGrid {
        path: PathBuf,
        #[source]
        source: GridError,
    },

    /// Spec document parsed but failed validation.
    #[error("invalid spec file {path}: {source}")]
    InvalidSpec {
        path: PathBuf,
        #[source]
        source: SpecError,
    },

    // === Workbook Errors ===
    /// Two files in one workbook share a stem.
    #[error("duplicate sheet '{name}' in {path}")]
    DuplicateSheet { name: String, path: PathBuf },
}

impl IngestError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
