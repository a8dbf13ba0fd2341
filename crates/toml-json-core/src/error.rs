//! Error types for TOML → JSON conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, parsing, or writing a document.
///
/// Messages name the file; the underlying cause is exposed via
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The input file could not be read (missing, unreadable, a directory, ...).
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not UTF-8. TOML documents must be UTF-8 encoded.
    #[error("{} is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The input text is not a well-formed TOML document.
    /// The parser's message carries the line, column, and an excerpt.
    #[error("invalid TOML in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Writing the JSON text failed.
    #[error("failed to write JSON")]
    Write(#[source] std::io::Error),
}

impl ConversionError {
    /// True when the input was read but is not convertible, as opposed to
    /// an I/O failure while reading or writing.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Encoding { .. } | Self::Parse { .. })
    }
}

/// Convenience alias used throughout toml-json-core.
pub type Result<T> = std::result::Result<T, ConversionError>;
