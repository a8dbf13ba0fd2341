//! JSON text output.
//!
//! Picks the `serde_json` formatter for the requested [`OutputStyle`] and runs
//! the encoder through it. Pretty output uses `PrettyFormatter::with_indent`
//! so the indent width is explicit rather than the formatter's default.

use crate::encoder::encode_document;
use crate::error::{ConversionError, Result};
use crate::style::{OutputStyle, MAX_INDENT};
use serde_json::ser::{CompactFormatter, PrettyFormatter};
use std::io::{self, Write};

/// Render a TOML document as a JSON string in the given style.
///
/// No trailing newline is appended.
pub fn render(table: &toml::Table, style: OutputStyle) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    write_json(&mut buf, table, style)?;
    String::from_utf8(buf)
        .map_err(|e| ConversionError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write a TOML document as JSON into `writer` in the given style.
///
/// Indents wider than [`MAX_INDENT`] are capped.
pub fn write_json<W: Write>(mut writer: W, table: &toml::Table, style: OutputStyle) -> Result<()> {
    let written = match style {
        OutputStyle::Pretty { indent } => {
            let indent = vec![b' '; indent.min(MAX_INDENT)];
            encode_document(&mut writer, &mut PrettyFormatter::with_indent(&indent), table)
        }
        OutputStyle::Compact => encode_document(&mut writer, &mut CompactFormatter, table),
    };
    written.map_err(ConversionError::Write)
}
