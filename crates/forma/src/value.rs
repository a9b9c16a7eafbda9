//! Dynamic values.
//!
//! [`Value`] is what generated constructors receive and what type guards
//! inspect. A generated struct instance is represented as
//! [`Value::Struct`], so "is an instance of struct `X`" is a name check on
//! the [`StructValue`].
//!
//! ```rust
//! use forma::{IntoValue, Value, ValueKind};
//!
//! let v = 5_i64.into_value();
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert_eq!(v.to_string(), "5");
//! assert!(Value::Null.is_null());
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::field_map::Fields;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer. Wide enough for every Rust integer type up to `i128`
    /// and `u64`.
    Int(i128),
    /// A floating point number.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed map of values.
    Map(Fields),
    /// An instance of a generated struct.
    Struct(StructValue),
}

/// Snapshot of a generated struct instance: its type name and field values.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    name: String,
    fields: Fields,
}

impl StructValue {
    /// Creates an instance value for the struct named `name`.
    pub fn new(name: impl Into<String>, fields: Fields) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Fully qualified name of the struct this value is an instance of.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instance's field values.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the value, returning its fields.
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Returns true if this is an instance of the struct named `name`.
    pub fn is_instance_of(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Classification of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    List,
    Map,
    Struct,
}

impl ValueKind {
    /// Get the kind of a value.
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Int(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Str(_) => Self::String,
            Value::List(_) => Self::List,
            Value::Map(_) => Self::Map,
            Value::Struct(_) => Self::Struct,
        }
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Struct => "struct",
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64`, widening integers.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_map(&self) -> Option<&Fields> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub const fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Short description used in error messages, e.g. `string "x"`.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::List(items) => format!("list of {} item(s)", items.len()),
            Self::Map(map) => format!("map with {} entr(ies)", map.len()),
            Self::Struct(s) => format!("instance of `{}`", s.name()),
            Self::Str(s) => format!("string {s:?}"),
            other => format!("{} {other}", other.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => write_entries(f, map),
            Self::Struct(s) => {
                write!(f, "{} ", s.name())?;
                write_entries(f, s.fields())
            }
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, fields: &Fields) -> fmt::Result {
    f.write_str("{")?;
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, " {name}: {value}")?;
    }
    if fields.is_empty() {
        f.write_str("}")
    } else {
        f.write_str(" }")
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => match i64::try_from(*i) {
                Ok(i) => serializer.serialize_i64(i),
                Err(_) => serializer.serialize_i128(*i),
            },
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(map) => map.serialize(serializer),
            Self::Struct(s) => s.fields().serialize(serializer),
        }
    }
}
