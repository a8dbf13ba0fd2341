/// Reader tests: file access and TOML grammar failures.
use std::error::Error as _;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use toml_json_core::reader::{parse_bytes, parse_document, read_document, INLINE_SOURCE};
use toml_json_core::ConversionError;

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// The parser's message, which carries the location and excerpt.
fn parse_message(err: &ConversionError) -> String {
    err.source()
        .map(|source| source.to_string())
        .unwrap_or_default()
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn read_valid_file() {
    let file = temp_file(b"title = \"Example\"\n[owner]\nname = \"Tom\"\n");
    let table = read_document(file.path()).unwrap();
    assert_eq!(table["title"].as_str(), Some("Example"));
    assert_eq!(table["owner"]["name"].as_str(), Some("Tom"));
}

#[test]
fn read_empty_file_gives_empty_table() {
    let file = temp_file(b"");
    assert!(read_document(file.path()).unwrap().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let err = read_document(&path).unwrap_err();
    match &err {
        ConversionError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!err.is_parse_error());
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_document(dir.path()).unwrap_err();
    assert!(matches!(err, ConversionError::Io { .. }), "got {err:?}");
}

#[test]
fn invalid_utf8_is_encoding_error() {
    let file = temp_file(b"name = \"\xff\xfe\"\n");
    let err = read_document(file.path()).unwrap_err();
    assert!(matches!(err, ConversionError::Encoding { .. }), "got {err:?}");
    assert!(err.is_parse_error());
}

#[test]
fn parse_error_names_the_file() {
    let file = temp_file(b"title = \"unterminated\n");
    let err = read_document(file.path()).unwrap_err();
    let ConversionError::Parse { path, .. } = &err else {
        panic!("expected Parse, got {err:?}");
    };
    assert_eq!(path, file.path());
}

#[test]
fn parse_bytes_uses_given_origin() {
    let err = parse_bytes(b"= 1", Path::new("inline.toml")).unwrap_err();
    assert!(err.to_string().contains("inline.toml"), "got: {err}");
}

// ============================================================================
// Grammar violations
// ============================================================================

#[test]
fn unterminated_string_fails() {
    let err = parse_document("title = \"abc\n").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
    assert!(err.to_string().contains(INLINE_SOURCE));
    assert!(parse_message(&err).contains("line 1"), "got: {}", parse_message(&err));
}

#[test]
fn duplicate_key_fails_with_location() {
    let err = parse_document("a = 1\nb = 2\na = 3\n").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
    assert!(parse_message(&err).contains("line 3"), "got: {}", parse_message(&err));
}

#[test]
fn redefined_table_fails() {
    let err = parse_document("[fruit]\napple = 1\n[fruit]\norange = 2\n").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
}

#[test]
fn key_defined_as_value_then_table_fails() {
    let err = parse_document("fruit = 1\n[fruit]\napple = 2\n").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
}

#[test]
fn invalid_date_fails() {
    let err = parse_document("d = 1979-13-27\n").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
}

#[test]
fn bare_value_without_key_fails() {
    assert!(parse_document("\"just a string\"\n").is_err());
}

#[test]
fn comments_are_dropped() {
    let table = parse_document("# header\na = 1 # trailing\n").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table["a"].as_integer(), Some(1));
}
