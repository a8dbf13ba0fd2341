//! # toml-json-core
//!
//! Converts **TOML** configuration documents into **JSON** with a fixed,
//! deterministic layout:
//!
//! - object keys sorted at every nesting level, whatever the source order
//! - non-ASCII text written literally, never as `\uXXXX`
//! - pretty-printed with 2 spaces per level (configurable via [`OutputStyle`])
//! - date/time values rendered as RFC 3339 strings
//! - `nan` / `inf` written as `NaN` / `Infinity`, as JavaScript and Python do
//!
//! ## Quick start
//!
//! ```rust
//! use toml_json_core::convert_str;
//!
//! let toml = "title = \"Example\"\n\n[owner]\nname = \"Tom\"\n";
//! let json = convert_str(toml).unwrap();
//! assert_eq!(
//!     json,
//!     "{\n  \"owner\": {\n    \"name\": \"Tom\"\n  },\n  \"title\": \"Example\"\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`reader`] — file / text → `toml::Table`
//! - [`encoder`] — `toml::Table` → JSON through a `serde_json` formatter, sorted keys
//! - [`render`] — formatter selection, JSON text out
//! - [`convert`] — the whole pipeline in one call
//! - [`style`] — pretty vs compact layout
//! - [`error`] — error types for read/parse/encode failures

pub mod convert;
pub mod encoder;
pub mod error;
pub mod reader;
pub mod render;
pub mod style;

pub use convert::{convert, convert_str, convert_str_with, convert_with};
pub use error::ConversionError;
pub use style::{OutputStyle, DEFAULT_INDENT, MAX_INDENT};
