//! Document loading from files and strings.

use std::path::Path;

use serde_json::Value;

use crate::error::{DecodeError, FixtureError};

/// Read a document's raw bytes from a file.
///
/// # Errors
///
/// Returns `FixtureError::FileNotFound` if the file doesn't exist, or
/// `FixtureError::ReadError` if it can't be read.
pub fn read_document(path: &Path) -> Result<Vec<u8>, FixtureError> {
    if !path.exists() {
        return Err(FixtureError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| FixtureError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Load a file as an untyped JSON tree.
///
/// # Errors
///
/// IO errors as for [`read_document`], or `FixtureError::Decode` if the file
/// isn't valid JSON.
pub fn load_value(path: &Path) -> Result<Value, FixtureError> {
    let bytes = read_document(path)?;
    parse_value(&bytes)
}

/// Parse raw bytes as an untyped JSON tree.
pub fn parse_value(bytes: &[u8]) -> Result<Value, FixtureError> {
    serde_json::from_slice(bytes).map_err(|e| FixtureError::Decode(DecodeError::from(e)))
}

/// Parse a JSON string as an untyped JSON tree.
pub fn load_value_str(content: &str) -> Result<Value, FixtureError> {
    parse_value(content.as_bytes())
}
