//! The full pipeline: path → bytes → TOML document → JSON text.
//!
//! Every stage completes before the next begins and the result is returned
//! as one string, so callers never see partial output on failure.

use crate::error::Result;
use crate::reader::{parse_document, read_document};
use crate::render::render;
use crate::style::OutputStyle;
use std::path::Path;
use tracing::debug;

/// Convert the TOML file at `path` into 2-space-indented JSON with sorted keys.
///
/// # Errors
///
/// [`ConversionError::Io`](crate::ConversionError::Io) if the file cannot be
/// read; a parse-class error (see
/// [`ConversionError::is_parse_error`](crate::ConversionError::is_parse_error))
/// if it is not a convertible TOML document.
pub fn convert(path: impl AsRef<Path>) -> Result<String> {
    convert_with(path, OutputStyle::default())
}

/// Same as [`convert`] with an explicit output style.
pub fn convert_with(path: impl AsRef<Path>, style: OutputStyle) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?style, "converting file");
    let document = read_document(path)?;
    render(&document, style)
}

/// Convert TOML text held in memory into 2-space-indented JSON.
///
/// ```
/// let json = toml_json_core::convert_str("title = \"Example\"").unwrap();
/// assert_eq!(json, "{\n  \"title\": \"Example\"\n}");
/// ```
pub fn convert_str(toml: &str) -> Result<String> {
    convert_str_with(toml, OutputStyle::default())
}

/// Same as [`convert_str`] with an explicit output style.
pub fn convert_str_with(toml: &str, style: OutputStyle) -> Result<String> {
    let document = parse_document(toml)?;
    render(&document, style)
}
