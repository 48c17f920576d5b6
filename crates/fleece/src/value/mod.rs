mod de;
mod ser;

use core::fmt;

use ahash::RandomState;
use indexmap::IndexMap;

use crate::{
    access::{narrow, Narrow},
    path::{pointer, resolve},
    AccessError, PathError,
};

/// Insertion-ordered JSON object.
pub type Map = IndexMap<String, Value, RandomState>;

/// A parsed JSON value.
///
/// Every JSON number is stored as `f64`, there is no separate integer variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The kind of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Follow `path` through nested objects starting at this value.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::resolve).
    pub fn resolve(&self, path: &[&str]) -> Result<&Value, PathError> {
        resolve(self, path)
    }

    /// Look up a value by an RFC 6901 JSON Pointer.
    ///
    /// # Errors
    ///
    /// See [`pointer`](crate::pointer).
    pub fn pointer(&self, pointer_str: &str) -> Result<&Value, PathError> {
        pointer(self, pointer_str)
    }

    /// Resolve `path` and narrow the value found there to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::PathFailed`] if the path does not resolve and
    /// [`AccessError::TypeMismatch`] if the value is not of `T`'s kind.
    pub fn get<'a, T: Narrow<'a>>(&'a self, path: &[&str]) -> Result<T, AccessError> {
        narrow(self.resolve(path)?)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&compact)
    }
}
