//! Error types for loading and navigating documents.
use core::fmt;
use std::error::Error as StdError;

use crate::Kind;

/// Failure to turn raw bytes into a [`Document`](crate::Document).
#[derive(Debug)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    Syntax(serde_json::Error),
    /// The input is larger than the configured limit.
    TooLarge { size: usize, limit: usize },
    /// The parsed tree nests containers deeper than the configured limit.
    TooDeep { limit: usize },
}

impl ParseError {
    /// One-based line of the syntax error, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax(error) => Some(error.line()),
            _ => None,
        }
    }

    /// One-based column of the syntax error, if known.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            ParseError::Syntax(error) => Some(error.column()),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(_) => f.write_str("Input is not valid JSON"),
            ParseError::TooLarge { size, limit } => {
                write!(f, "Input of {size} bytes exceeds the limit of {limit} bytes")
            }
            ParseError::TooDeep { limit } => {
                write!(f, "Input nests deeper than the limit of {limit} levels")
            }
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ParseError::Syntax(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        ParseError::Syntax(error)
    }
}

/// Failure to follow a path or a JSON Pointer through a value.
///
/// `position` is the zero-based index of the failing segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The object at this point has no such key.
    KeyNotFound { key: String, position: usize },
    /// A segment was applied to a value that can not be descended into.
    NotTraversable {
        key: String,
        found: Kind,
        position: usize,
    },
    /// A JSON Pointer that is neither empty nor starts with `/`.
    InvalidPointer { pointer: String },
    /// A JSON Pointer token used on an array is not a canonical index.
    InvalidIndex { token: String, position: usize },
    /// A JSON Pointer index points past the end of an array.
    IndexOutOfRange {
        index: usize,
        length: usize,
        position: usize,
    },
}

impl PathError {
    pub(crate) fn key_not_found(key: &str, position: usize) -> Self {
        PathError::KeyNotFound {
            key: key.to_string(),
            position,
        }
    }

    pub(crate) fn not_traversable(key: &str, found: Kind, position: usize) -> Self {
        PathError::NotTraversable {
            key: key.to_string(),
            found,
            position,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::KeyNotFound { key, position } => {
                write!(f, "Key '{key}' does not exist (segment {position})")
            }
            PathError::NotTraversable {
                key,
                found,
                position,
            } => write!(
                f,
                "Can not look up '{key}' in a value of type {found} (segment {position})"
            ),
            PathError::InvalidPointer { pointer } => {
                write!(f, "Invalid JSON Pointer '{pointer}': must start with '/'")
            }
            PathError::InvalidIndex { token, position } => {
                write!(f, "'{token}' is not a valid array index (segment {position})")
            }
            PathError::IndexOutOfRange {
                index,
                length,
                position,
            } => write!(
                f,
                "Index {index} is out of range for array of length {length} (segment {position})"
            ),
        }
    }
}

impl StdError for PathError {}

/// Failure of a typed accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The path did not resolve.
    PathFailed(PathError),
    /// The resolved value is of a different kind than requested.
    TypeMismatch { expected: Kind, found: Kind },
    /// The requested array element does not exist.
    IndexOutOfRange { index: usize, length: usize },
}

impl AccessError {
    pub(crate) fn type_mismatch(expected: Kind, found: Kind) -> Self {
        AccessError::TypeMismatch { expected, found }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::PathFailed(_) => f.write_str("Could not follow path"),
            AccessError::TypeMismatch { expected, found } => {
                write!(f, "Expected {expected}, found {found}")
            }
            AccessError::IndexOutOfRange { index, length } => {
                write!(
                    f,
                    "Index {index} is out of range for array of length {length}"
                )
            }
        }
    }
}

impl StdError for AccessError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AccessError::PathFailed(error) => Some(error),
            _ => None,
        }
    }
}

impl From<PathError> for AccessError {
    fn from(error: PathError) -> Self {
        AccessError::PathFailed(error)
    }
}
