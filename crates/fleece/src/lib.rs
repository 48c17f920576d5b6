//! # fleece
//!
//! Typed navigation over JSON documents whose shape is not known up front.
//!
//! A [`Document`] is loaded from raw bytes without declaring a schema. Values are then
//! fetched by a path of object keys and narrowed to a concrete type at run time.
//! Every lookup returns either the typed value or an [`AccessError`] describing why it
//! failed. Nothing is coerced: a number is never returned as a string, and a string
//! `"true"` is never returned as a boolean.
//!
//! ```rust
//! use fleece::{AccessError, Document, Kind, PathError};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = Document::load(r#"{
//!     "float": 3.3,
//!     "complex-array": [{"dub": "bub"}, {"answer": 42}]
//! }"#)?;
//!
//! // Numbers are narrowed to integers by truncation
//! assert_eq!(document.get_int(&["float"])?, 3);
//! assert_eq!(document.get_float(&["float"])?, 3.3);
//!
//! let second = document.get_indexed_map(1, &["complex-array"])?;
//! assert_eq!(second["answer"].as_f64(), Some(42.0));
//!
//! assert_eq!(
//!     document.get_bool(&["float"]),
//!     Err(AccessError::TypeMismatch { expected: Kind::Bool, found: Kind::Number })
//! );
//! assert_eq!(
//!     document.get_int(&["blah"]),
//!     Err(AccessError::PathFailed(PathError::KeyNotFound { key: "blah".into(), position: 0 }))
//! );
//! // Fall back to a default explicitly
//! assert_eq!(document.get_int(&["blah"]).unwrap_or_default(), 0);
//! # Ok(())
//! # }
//! # example().expect("Example works");
//! ```
mod access;
mod document;
mod error;
mod options;
mod path;
mod value;

pub use access::{narrow, Narrow};
pub use document::Document;
pub use error::{AccessError, ParseError, PathError};
pub use options::DocumentOptions;
pub use path::{parse_index, pointer, resolve, unescape_segment};
pub use value::{Kind, Map, Value};

/// Create [`DocumentOptions`] to configure how documents are loaded.
#[must_use]
pub const fn options() -> DocumentOptions {
    DocumentOptions::new()
}

/// Parse raw bytes into a [`Document`] with default options.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not well-formed JSON.
pub fn load(bytes: impl Into<Vec<u8>>) -> Result<Document, ParseError> {
    Document::load(bytes)
}

/// Parse text into a [`Document`] with default options.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not well-formed JSON.
pub fn load_str(text: &str) -> Result<Document, ParseError> {
    Document::load_str(text)
}
