//! Loading declarative spec documents from disk.

use std::path::Path;

use gridkey_model::SpecConfig;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads and validates a TOML or JSON spec document.
pub fn load_spec_file(path: &Path) -> Result<SpecConfig> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;

    let config: SpecConfig = match ext.as_deref() {
        Some("toml") => toml::from_str(&text).map_err(|source| IngestError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&text).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?,
        _ => {
            return Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: "toml or json",
            });
        }
    };

    config.validate().map_err(|source| IngestError::InvalidSpec {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        colwise = config.headers.colwise.len(),
        rowwise = config.headers.rowwise.len(),
        custom_range = config.range.is_some(),
        "loaded spec file"
    );
    Ok(config)
}
