//! JSON interop.
//!
//! Plain JSON has no notion of struct instances, so [`fields_from_json`]
//! uses a schema to turn objects supplied for nested fields into
//! [`Value::Struct`] snapshots of the declared nested type.

use serde_json::{Map, Number};

use crate::error::{Error, Result};
use crate::field_map::Fields;
use crate::schema::StructSchema;
use crate::value::{StructValue, Value};

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::Str(s.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => {
                Self::Map(map.iter().map(|(k, v)| (k.clone(), Self::from(v))).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from(&json)
    }
}

impl Value {
    /// Converts to JSON. Non-finite floats become `null`; struct instances
    /// become plain objects.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => int_to_json(*i),
            Self::Float(f) => {
                Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(fields) => object(fields),
            Self::Struct(instance) => object(instance.fields()),
        }
    }
}

fn int_to_json(i: i128) -> serde_json::Value {
    if let Ok(i) = i64::try_from(i) {
        return serde_json::Value::Number(i.into());
    }
    if let Ok(u) = u64::try_from(i) {
        return serde_json::Value::Number(u.into());
    }
    Number::from_f64(i as f64).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

fn object(fields: &Fields) -> serde_json::Value {
    serde_json::Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_json()))
            .collect::<Map<_, _>>(),
    )
}

/// Converts a JSON object into constructor input for `schema`.
///
/// Objects supplied for nested fields become instances of the nested struct,
/// recursively. Everything else converts as plain data; validation is left to
/// the schema.
pub fn fields_from_json(schema: &StructSchema, json: &serde_json::Value) -> Result<Fields> {
    let serde_json::Value::Object(map) = json else {
        return Err(Error::TypeMismatch {
            expected: "object",
            found: Value::from(json).describe(),
        });
    };

    let mut fields = Fields::with_capacity(map.len());
    for (name, json) in map {
        let nested = schema.get(name).and_then(|spec| spec.nested_schema());
        let value = match (nested, json) {
            (Some(nested), serde_json::Value::Object(_)) => Value::Struct(StructValue::new(
                nested.name(),
                fields_from_json(nested, json)?,
            )),
            _ => Value::from(json),
        };
        fields.insert(name.as_str(), value);
    }
    Ok(fields)
}
