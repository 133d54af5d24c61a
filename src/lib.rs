//! # armaconfig
//!
//! A reader and writer for the class-based config format used by game engine
//! configuration files (`config.cpp`, `description.ext`, `mission.sqm`).
//!
//! ## What does the format look like?
//!
//! ```text
//! // comments are ignored
//! class CfgVehicles {
//!     class Car { maxSpeed = 120; };
//!     class Truck : Car {
//!         displayName = "Heavy truck";
//!         maxSpeed = 90;
//!         wheels[] = {{0, 1.5}, {0, -1.5}};
//!     };
//! };
//! ```
//!
//! Documents hold nested `class Name : Parent { ... };` blocks containing
//! `name = value;` and `name[] = {...};` properties.
//!
//! ## Key Features
//!
//! - **Typed values**: scalars are normalized to integers, floats or text,
//!   arrays nest arbitrarily
//! - **Inheritance-aware lookup**: members missing from a class are looked up
//!   in its parent chain
//! - **Two encoders**: back to config text, or to an ordered mapping that any
//!   serde serializer can write
//! - **Explicit caching**: [`DocumentCache`] parses each file once
//!
//! ## Quick Start
//!
//! ```rust
//! use armaconfig::{from_str, to_string, Value};
//!
//! let doc = from_str(r#"
//!     class Base { side = 1; };
//!     class Mission_1 : Base { template = "co10_escape.Altis"; };
//! "#).unwrap();
//!
//! let mission = doc.lookup("Mission_1").unwrap();
//! assert_eq!(
//!     mission.lookup("template").unwrap().value(),
//!     Some(&Value::from("co10_escape.Altis"))
//! );
//! assert_eq!(mission.lookup("side").unwrap().value(), Some(&Value::from(1)));
//!
//! assert_eq!(
//!     to_string(&doc).unwrap(),
//!     r#"class Base{side=1;};class Mission_1: Base{template="co10_escape.Altis";};"#
//! );
//! ```
//!
//! ### Structural encoding
//!
//! ```rust
//! let doc = armaconfig::from_str("class A { x = 1; }; class B : A { y[] = {2, 3}; };").unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"{"A":{"x":1},"B":{"x":1,"y":[2,3]}}"#);
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first problem; there is no partial document. See
//! [`Error`] for the categories.

pub mod ast;
pub mod cache;
pub mod error;
pub mod grammar;
pub mod map;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod ser;
pub mod value;

pub use ast::{ClassNode, Document, Member, Parent, PropertyNode};
pub use cache::{CacheStatistics, DocumentCache};
pub use error::{Error, Result};
pub use map::ConfigMap;
pub use options::{DirectivePolicy, EncodeOptions, ParseOptions};
pub use parser::Parser;
pub use ser::{to_value, Encoder};
pub use value::{Number, Value};

use std::io;
use std::path::Path;

/// Parse a complete document from config text.
///
/// # Examples
///
/// ```rust
/// let doc = armaconfig::from_str("class A { x = 1; };").unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns the first lexical, grammar or parent resolution error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_options(s, ParseOptions::default())
}

/// Parse a complete document with custom parser options.
///
/// # Errors
///
/// Returns the first lexical, grammar or parent resolution error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Document> {
    Parser::with_options(s, options).parse()
}

/// Parse a document from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parse a document from an I/O stream with custom parser options.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(mut reader: R, options: ParseOptions) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str_with_options(&string, options)
}

/// Parse a document from bytes of config text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

/// Read and parse the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    from_path_with_options(path, ParseOptions::default())
}

/// Read and parse the file at `path` with custom parser options.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path_with_options(path: impl AsRef<Path>, options: ParseOptions) -> Result<Document> {
    let text = std::fs::read_to_string(path.as_ref())?;
    from_str_with_options(&text, options)
}

/// Encode a document as compact config text with no line breaks.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, EncodeOptions::default())
}

/// Encode a document with one statement per line and indented class bodies.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(document: &Document) -> Result<String> {
    to_string_with_options(document, EncodeOptions::pretty())
}

/// Encode a document as config text with custom options.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(document: &Document, options: EncodeOptions) -> Result<String> {
    let mut encoder = Encoder::new(options);
    encoder.encode_document(document)?;
    Ok(encoder.into_inner())
}

/// Encode a document as compact config text into a writer.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, EncodeOptions::default())
}

/// Encode a document as config text into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    document: &Document,
    options: EncodeOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(document, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        // mission list
        class Missions {
            class Base { side = 1; difficulty = "regular"; };
            class Mission_1 : Base {
                template = "co10_escape.Altis";
                positions[] = {{1, 2.5}, {3, 4}};
            };
        };
    "#;

    #[test]
    fn test_text_round_trip() {
        let doc = from_str(SAMPLE).unwrap();
        let text = to_string(&doc).unwrap();
        let doc_back = from_str(&text).unwrap();
        assert_eq!(to_value(&doc), to_value(&doc_back));
        assert_eq!(text, to_string(&doc_back).unwrap());
    }

    #[test]
    fn test_pretty_round_trip() {
        let doc = from_str(SAMPLE).unwrap();
        let text = to_string_pretty(&doc).unwrap();
        assert_eq!(to_value(&from_str(&text).unwrap()), to_value(&doc));
    }

    #[test]
    fn test_from_reader_and_slice() {
        let doc = from_reader(std::io::Cursor::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(doc, from_slice(SAMPLE.as_bytes()).unwrap());
        assert!(matches!(from_slice(&[0xff, 0xfe]), Err(Error::Io(_))));
    }

    #[test]
    fn test_reader_and_path_with_options() {
        let input = "#include \"a.hpp\"\nx = 1;";
        let reject = ParseOptions::new().with_directives(DirectivePolicy::Reject);

        assert!(from_reader(input.as_bytes()).is_ok());
        assert_eq!(
            from_reader_with_options(input.as_bytes(), reject.clone()).unwrap_err(),
            Error::UnsupportedDirective { line: 1 }
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.cpp");
        std::fs::write(&path, input).unwrap();
        assert_eq!(from_path(&path).unwrap().len(), 1);
        assert_eq!(
            from_path_with_options(&path, reject).unwrap_err(),
            Error::UnsupportedDirective { line: 1 }
        );
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("x = 1;").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"x=1;");
    }

    #[test]
    fn test_lookup_through_inheritance() {
        let doc = from_str(SAMPLE).unwrap();
        let side = doc.lookup_path(&["Missions", "Mission_1", "side"]).unwrap();
        assert_eq!(side.value(), Some(&Value::from(1)));
    }
}
