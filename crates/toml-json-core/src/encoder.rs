//! TOML → JSON encoder.
//!
//! Walks a parsed TOML document and writes the equivalent JSON through a
//! `serde_json::ser::Formatter`, which owns all layout decisions (indentation,
//! separators). The walk owns the value mapping:
//!
//! - **Tables** (standard, inline, and array-of-tables elements) become objects
//!   whose keys are written in sorted order, whatever the source order
//! - **Arrays** keep their element order
//! - **Integers** stay integers, **floats** stay floats (`1.0` is not folded to `1`)
//! - **nan / inf / -inf** are written as the bare tokens `NaN`, `Infinity`,
//!   `-Infinity`, the same extension JavaScript and Python emit
//! - **Date/time** values become their RFC 3339 text, e.g. `1979-05-27T07:32:00Z`
//! - **Strings** escape only `"`, `\` and control characters; non-ASCII is
//!   written as raw UTF-8
//!
//! The walk does not go through `serde_json::Value` because `Value` cannot hold
//! a non-finite float, and `serde_json`'s serializer turns them into `null`
//! before the formatter sees them.
//!
//! # Example
//! ```
//! use serde_json::ser::CompactFormatter;
//! use toml_json_core::encoder::encode_document;
//!
//! let doc: toml::Table = toml::from_str("b = 1\na = inf").unwrap();
//! let mut out = Vec::new();
//! encode_document(&mut out, &mut CompactFormatter, &doc).unwrap();
//! assert_eq!(out, br#"{"a":Infinity,"b":1}"#);
//! ```

use serde_json::ser::{CharEscape, Formatter};
use std::io::{self, Write};

/// Write a whole TOML document (its root table) as a JSON object.
pub fn encode_document<W, F>(writer: &mut W, formatter: &mut F, table: &toml::Table) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    encode_table(writer, formatter, table)
}

/// Write a single TOML value as JSON.
pub fn encode_value<W, F>(writer: &mut W, formatter: &mut F, value: &toml::Value) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    match value {
        toml::Value::String(s) => encode_str(writer, formatter, s),
        toml::Value::Integer(i) => formatter.write_i64(writer, *i),
        toml::Value::Float(f) => encode_float(writer, formatter, *f),
        toml::Value::Boolean(b) => formatter.write_bool(writer, *b),
        toml::Value::Datetime(dt) => encode_str(writer, formatter, &dt.to_string()),
        toml::Value::Array(arr) => encode_array(writer, formatter, arr),
        toml::Value::Table(table) => encode_table(writer, formatter, table),
    }
}

fn encode_float<W, F>(writer: &mut W, formatter: &mut F, f: f64) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    if f.is_nan() {
        formatter.write_raw_fragment(writer, "NaN")
    } else if f.is_infinite() {
        let token = if f > 0.0 { "Infinity" } else { "-Infinity" };
        formatter.write_raw_fragment(writer, token)
    } else {
        formatter.write_f64(writer, f)
    }
}

fn encode_array<W, F>(writer: &mut W, formatter: &mut F, arr: &[toml::Value]) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    formatter.begin_array(writer)?;
    for (i, item) in arr.iter().enumerate() {
        formatter.begin_array_value(writer, i == 0)?;
        encode_value(writer, formatter, item)?;
        formatter.end_array_value(writer)?;
    }
    formatter.end_array(writer)
}

/// Emit an object with keys in sorted order, independent of source order.
fn encode_table<W, F>(writer: &mut W, formatter: &mut F, table: &toml::Table) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    let mut entries: Vec<(&String, &toml::Value)> = table.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    formatter.begin_object(writer)?;
    for (i, (key, child)) in entries.into_iter().enumerate() {
        formatter.begin_object_key(writer, i == 0)?;
        encode_str(writer, formatter, key)?;
        formatter.end_object_key(writer)?;
        formatter.begin_object_value(writer)?;
        encode_value(writer, formatter, child)?;
        formatter.end_object_value(writer)?;
    }
    formatter.end_object(writer)
}

/// Write a quoted JSON string. Unescaped runs go out as fragments; escapes
/// only ever sit on ASCII bytes, so slicing at them stays on char boundaries.
fn encode_str<W, F>(writer: &mut W, formatter: &mut F, value: &str) -> io::Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    formatter.begin_string(writer)?;
    let mut start = 0;
    for (i, byte) in value.bytes().enumerate() {
        let Some(escape) = char_escape(byte) else {
            continue;
        };
        if start < i {
            formatter.write_string_fragment(writer, &value[start..i])?;
        }
        formatter.write_char_escape(writer, escape)?;
        start = i + 1;
    }
    if start < value.len() {
        formatter.write_string_fragment(writer, &value[start..])?;
    }
    formatter.end_string(writer)
}

fn char_escape(byte: u8) -> Option<CharEscape> {
    let escape = match byte {
        b'"' => CharEscape::Quote,
        b'\\' => CharEscape::ReverseSolidus,
        b'\x08' => CharEscape::Backspace,
        b'\x0c' => CharEscape::FormFeed,
        b'\n' => CharEscape::LineFeed,
        b'\r' => CharEscape::CarriageReturn,
        b'\t' => CharEscape::Tab,
        0x00..=0x1f => CharEscape::AsciiControl(byte),
        _ => return None,
    };
    Some(escape)
}
