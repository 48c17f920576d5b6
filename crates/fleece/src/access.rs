//! Narrowing generic values to concrete kinds.
use crate::{AccessError, Kind, Map, Value};

/// A type that a [`Value`] can be narrowed to.
///
/// Narrowing never coerces across kinds: a string `"true"` is not a boolean and
/// a number is never a string.
pub trait Narrow<'a>: Sized {
    /// The only kind of value this type can be narrowed from.
    const KIND: Kind;

    /// Returns `None` if `value` is not of [`Self::KIND`].
    fn narrow(value: &'a Value) -> Option<Self>;
}

/// Narrow `value` to `T`.
///
/// # Errors
///
/// Returns [`AccessError::TypeMismatch`] if `value` is not of `T::KIND`.
pub fn narrow<'a, T: Narrow<'a>>(value: &'a Value) -> Result<T, AccessError> {
    T::narrow(value).ok_or_else(|| AccessError::type_mismatch(T::KIND, value.kind()))
}

/// Truncates toward zero, saturating at the `i64` bounds.
impl Narrow<'_> for i64 {
    const KIND: Kind = Kind::Number;

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(value: &Value) -> Option<Self> {
        value.as_f64().map(|number| number.trunc() as i64)
    }
}

impl Narrow<'_> for f64 {
    const KIND: Kind = Kind::Number;

    fn narrow(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Narrow<'_> for bool {
    const KIND: Kind = Kind::Bool;

    fn narrow(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> Narrow<'a> for &'a str {
    const KIND: Kind = Kind::String;

    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Narrow<'a> for &'a [Value] {
    const KIND: Kind = Kind::Array;

    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> Narrow<'a> for &'a Map {
    const KIND: Kind = Kind::Object;

    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

/// Narrow element `index` of `items` to an object.
///
/// # Errors
///
/// - [`AccessError::IndexOutOfRange`] if `index >= items.len()`;
/// - [`AccessError::TypeMismatch`] if the element is not an object.
pub(crate) fn indexed_map(items: &[Value], index: usize) -> Result<&Map, AccessError> {
    let element = items.get(index).ok_or(AccessError::IndexOutOfRange {
        index,
        length: items.len(),
    })?;
    narrow(element)
}
