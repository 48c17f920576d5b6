//! A loaded JSON document.
use core::str::FromStr;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

use crate::{
    access::{indexed_map, narrow, Narrow},
    path::{pointer, resolve},
    AccessError, DocumentOptions, Map, ParseError, PathError, Value,
};

/// A parsed JSON document together with the bytes it was parsed from.
///
/// The document is never modified after loading, so shared references to it can be
/// used from any number of threads.
///
/// ```rust
/// use fleece::Document;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let document = Document::load_str(r#"{"map": {"map2": {"num3": 99}}}"#)?;
/// assert_eq!(document.get_int(&["map", "map2", "num3"])?, 99);
/// assert!(document.get_str(&["map", "map2", "num3"]).is_err());
/// # Ok(())
/// # }
/// # example().expect("Loads");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    raw: Box<[u8]>,
    root: Value,
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Document>();
};

impl Document {
    pub(crate) fn new(raw: Box<[u8]>, root: Value) -> Self {
        Self { raw, root }
    }

    /// Parse raw bytes with the default [`DocumentOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input is not well-formed JSON.
    pub fn load(bytes: impl Into<Vec<u8>>) -> Result<Self, ParseError> {
        DocumentOptions::default().load(bytes)
    }

    /// Parse text with the default [`DocumentOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input is not well-formed JSON.
    pub fn load_str(text: &str) -> Result<Self, ParseError> {
        DocumentOptions::default().load_str(text)
    }

    /// The exact bytes this document was loaded from.
    #[must_use]
    pub fn dump(&self) -> &[u8] {
        &self.raw
    }

    /// Serialize the parsed tree, indenting every nesting level by `indent` spaces.
    ///
    /// Object keys keep their input order.
    ///
    /// # Panics
    ///
    /// Never in practice: serializing a [`Value`] into memory has no failure mode.
    #[must_use]
    pub fn dump_pretty(&self, indent: usize) -> String {
        tracing::trace!(indent, "Pretty-printing document");
        let indent = " ".repeat(indent);
        let mut serializer = Serializer::with_formatter(
            Vec::with_capacity(self.raw.len()),
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        self.root
            .serialize(&mut serializer)
            .map(|()| serializer.into_inner())
            .and_then(|output| String::from_utf8(output).map_err(serde::ser::Error::custom))
            .expect("In-memory JSON output is infallible")
    }

    /// The root value.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consume the document, keeping only the parsed tree.
    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }

    /// Follow `path` through nested objects from the root.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::resolve).
    pub fn resolve(&self, path: &[&str]) -> Result<&Value, PathError> {
        resolve(&self.root, path)
    }

    /// Look up a value by an RFC 6901 JSON Pointer.
    ///
    /// # Errors
    ///
    /// See [`pointer`](crate::pointer).
    pub fn pointer(&self, pointer_str: &str) -> Result<&Value, PathError> {
        pointer(&self.root, pointer_str)
    }

    /// Resolve `path` and narrow the value there to `T`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::PathFailed`] if the path does not resolve;
    /// - [`AccessError::TypeMismatch`] if the value is not of `T`'s kind.
    pub fn get<'a, T: Narrow<'a>>(&'a self, path: &[&str]) -> Result<T, AccessError> {
        narrow(self.resolve(path)?)
    }

    /// Get a number truncated toward zero.
    ///
    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_int(&self, path: &[&str]) -> Result<i64, AccessError> {
        self.get(path)
    }

    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_float(&self, path: &[&str]) -> Result<f64, AccessError> {
        self.get(path)
    }

    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_str(&self, path: &[&str]) -> Result<&str, AccessError> {
        self.get(path)
    }

    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_bool(&self, path: &[&str]) -> Result<bool, AccessError> {
        self.get(path)
    }

    /// Get an array, its elements are not narrowed.
    ///
    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_array(&self, path: &[&str]) -> Result<&[Value], AccessError> {
        self.get(path)
    }

    /// Get an object, its values are not narrowed.
    ///
    /// # Errors
    ///
    /// See [`Document::get`].
    pub fn get_map(&self, path: &[&str]) -> Result<&Map, AccessError> {
        self.get(path)
    }

    /// Get the object at `index` of the array at `path`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::PathFailed`] if the path does not resolve;
    /// - [`AccessError::TypeMismatch`] if the value at `path` is not an array or
    ///   the element is not an object;
    /// - [`AccessError::IndexOutOfRange`] if the array is too short.
    pub fn get_indexed_map(&self, index: usize, path: &[&str]) -> Result<&Map, AccessError> {
        indexed_map(self.get_array(path)?, index)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Document::load_str(text)
    }
}
