//! Builtin type guards.
//!
//! Each guard is a plain `fn(&Value) -> bool`, usable directly in
//! `#[field(guard = forma::guards::is_integer)]`. [`by_name`] resolves them
//! from strings for schemas declared outside Rust source.

use crate::guard::{Guard, Predicate};
use crate::value::Value;

pub const fn is_null(value: &Value) -> bool {
    value.is_null()
}

pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub const fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

pub const fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

/// Integer or float.
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Float(_))
}

pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

pub const fn is_list(value: &Value) -> bool {
    matches!(value, Value::List(_))
}

pub const fn is_map(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

/// Instance of any generated struct.
pub const fn is_struct(value: &Value) -> bool {
    matches!(value, Value::Struct(_))
}

pub const fn is_any(_: &Value) -> bool {
    true
}

pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

pub const fn is_non_negative_integer(value: &Value) -> bool {
    matches!(value, Value::Int(i) if *i >= 0)
}

pub const fn is_positive_integer(value: &Value) -> bool {
    matches!(value, Value::Int(i) if *i > 0)
}

const BUILTINS: &[(&str, Predicate)] = &[
    ("is_null", is_null),
    ("is_boolean", is_boolean),
    ("is_integer", is_integer),
    ("is_float", is_float),
    ("is_number", is_number),
    ("is_string", is_string),
    ("is_list", is_list),
    ("is_map", is_map),
    ("is_struct", is_struct),
    ("is_any", is_any),
    ("is_non_empty_string", is_non_empty_string),
    ("is_non_negative_integer", is_non_negative_integer),
    ("is_positive_integer", is_positive_integer),
];

/// Names of all builtin guards.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Resolves a builtin guard by name.
///
/// Accepts the function name (`is_integer`), its suffix (`integer`), or a
/// path whose last segment is either (`forma::guards::is_integer`).
///
/// ```rust
/// use forma::{Value, guards};
///
/// let guard = guards::by_name("forma::guards::is_integer").unwrap();
/// assert!(guard.check(&Value::Int(1)));
/// assert_eq!(guards::by_name("integer").unwrap().name(), "is_integer");
/// assert!(guards::by_name("is_email").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Guard> {
    let last = name.rsplit("::").next().unwrap_or(name).trim();
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == last || builtin.strip_prefix("is_") == Some(last))
        .map(|(builtin, check)| Guard::new(builtin, *check))
}
