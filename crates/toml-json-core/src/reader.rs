//! Reading and parsing TOML documents.
//!
//! The whole file is read into memory before parsing; the handle is dropped
//! as soon as `std::fs::read` returns, on success and failure alike. Grammar
//! rules (duplicate keys, table redefinition, date/time literal validity) are
//! the `toml` crate's, which implements TOML 1.0.

use crate::error::{ConversionError, Result};
use std::path::Path;
use tracing::debug;

/// Placeholder path reported in errors for documents parsed from memory.
pub const INLINE_SOURCE: &str = "<string>";

/// Read the file at `path` and parse it as a TOML document.
pub fn read_document(path: &Path) -> Result<toml::Table> {
    let bytes = std::fs::read(path).map_err(|source| ConversionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    parse_bytes(&bytes, path)
}

/// Parse a TOML document held in memory.
pub fn parse_document(text: &str) -> Result<toml::Table> {
    parse_text(text, Path::new(INLINE_SOURCE))
}

/// Decode raw bytes as UTF-8, then parse. `origin` is only used for errors.
pub fn parse_bytes(bytes: &[u8], origin: &Path) -> Result<toml::Table> {
    let text = std::str::from_utf8(bytes).map_err(|source| ConversionError::Encoding {
        path: origin.to_path_buf(),
        source,
    })?;
    parse_text(text, origin)
}

fn parse_text(text: &str, origin: &Path) -> Result<toml::Table> {
    let table = toml::from_str::<toml::Table>(text).map_err(|source| ConversionError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    debug!(keys = table.len(), "parsed TOML document");
    Ok(table)
}
