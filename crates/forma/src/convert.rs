//! Conversions between [`Value`] and Rust types.
//!
//! A field's Rust type must implement both traits: [`FromValue`] turns a
//! validated constructor argument into the stored value, and [`IntoValue`]
//! turns the stored value back into a [`Value`] for getters by name, setters'
//! guard checks and nested-struct snapshots.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::field_map::Fields;
use crate::value::{StructValue, Value};

/// Fallible conversion out of a [`Value`].
pub trait FromValue: Sized {
    /// Converts a value, failing with a type or range error.
    fn from_value(value: &Value) -> Result<Self>;

    /// Returns true if `value` converts to `Self`.
    ///
    /// This is the guard used for fields that do not declare one.
    fn accepts(value: &Value) -> bool {
        Self::from_value(value).is_ok()
    }
}

/// Infallible conversion into a [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.describe(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn accepts(_: &Value) -> bool {
        true
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! integer_from_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                let Value::Int(i) = value else {
                    return Err(mismatch("integer", value));
                };
                <$ty>::try_from(*i).map_err(|_| Error::OutOfRange {
                    value: i.to_string(),
                    target: stringify!($ty),
                })
            }
        }
    )*};
}

integer_from_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! integer_into_value {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::Int(i128::from(self))
            }
        }
    )*};
}

integer_into_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// No `From<isize | usize> for i128`; both are at most 64 bits wide.
impl IntoValue for isize {
    fn into_value(self) -> Value {
        Value::Int(self as i128)
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        Value::Int(self as i128)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_float().ok_or_else(|| mismatch("number", value))
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        let f = value.as_float().ok_or_else(|| mismatch("number", value))?;
        if f.is_finite() && f.abs() > f64::from(f32::MAX) {
            return Err(Error::OutOfRange {
                value: f.to_string(),
                target: "f32",
            });
        }
        Ok(f as f32)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self> {
        let mut chars = value
            .as_str()
            .ok_or_else(|| mismatch("single-character string", value))?
            .chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(mismatch("single-character string", value)),
        }
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_list()
            .ok_or_else(|| mismatch("list", value))?
            .iter()
            .map(T::from_value)
            .collect()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_map()
            .ok_or_else(|| mismatch("map", value))?
            .iter()
            .map(|(k, v)| T::from_value(v).map(|v| (k.to_owned(), v)))
            .collect()
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().collect())
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_map()
            .ok_or_else(|| mismatch("map", value))?
            .iter()
            .map(|(k, v)| T::from_value(v).map(|v| (k.to_owned(), v)))
            .collect()
    }
}

impl<T: IntoValue> IntoValue for HashMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().collect())
    }
}

impl FromValue for Fields {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_map().cloned().ok_or_else(|| mismatch("map", value))
    }
}

impl IntoValue for Fields {
    fn into_value(self) -> Value {
        Value::Map(self)
    }
}

impl IntoValue for StructValue {
    fn into_value(self) -> Value {
        Value::Struct(self)
    }
}
