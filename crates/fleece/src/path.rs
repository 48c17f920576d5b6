use std::borrow::Cow;

use crate::{PathError, Value};

/// Follow `path` from `root` through nested objects.
///
/// Every segment is an object key, arrays are never indexed by a path segment.
/// An empty path resolves to `root` itself.
///
/// # Errors
///
/// - [`PathError::NotTraversable`] if a segment is applied to a non-object value;
/// - [`PathError::KeyNotFound`] if an object has no entry for a segment.
pub fn resolve<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, PathError> {
    path.iter()
        .enumerate()
        .try_fold(root, |current, (position, key)| match current {
            Value::Object(map) => map
                .get(*key)
                .ok_or_else(|| PathError::key_not_found(key, position)),
            other => Err(PathError::not_traversable(key, other.kind(), position)),
        })
}

/// Look up a value by an RFC 6901 JSON Pointer.
///
/// Unlike [`resolve`], pointer tokens may index arrays.
///
/// # Errors
///
/// - [`PathError::InvalidPointer`] if a non-empty pointer does not start with `/`;
/// - [`PathError::KeyNotFound`] / [`PathError::NotTraversable`] as in [`resolve`];
/// - [`PathError::InvalidIndex`] if a token applied to an array is not a canonical index;
/// - [`PathError::IndexOutOfRange`] if an index is past the end of an array.
pub fn pointer<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value, PathError> {
    if pointer.is_empty() {
        return Ok(root);
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(PathError::InvalidPointer {
            pointer: pointer.to_string(),
        });
    };
    rest.split('/')
        .map(unescape_segment)
        .enumerate()
        .try_fold(root, |target, (position, token)| match target {
            Value::Object(map) => map
                .get(&*token)
                .ok_or_else(|| PathError::key_not_found(&token, position)),
            Value::Array(items) => {
                let index = parse_index(&token).ok_or_else(|| PathError::InvalidIndex {
                    token: token.to_string(),
                    position,
                })?;
                items.get(index).ok_or(PathError::IndexOutOfRange {
                    index,
                    length: items.len(),
                    position,
                })
            }
            other => Err(PathError::not_traversable(&token, other.kind(), position)),
        })
}

/// Unescape a JSON Pointer token (`~1` to `/`, then `~0` to `~`).
#[must_use]
pub fn unescape_segment(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}

// Taken from `serde_json`.
#[must_use]
pub fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        return None;
    }
    s.parse().ok()
}
