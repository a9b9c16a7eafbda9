//! The trait implemented by every generated struct.

use std::sync::Arc;

use crate::convert::{FromValue, IntoValue};
use crate::error::{Error, FieldViolation, Result, ViolationKind};
use crate::field_map::Fields;
use crate::schema::{StructSchema, conversion_violation};
use crate::value::Value;

/// A fixed-shape struct whose construction and mutation are checked against
/// its [`StructSchema`].
///
/// Implemented by `typed_struct!` and `#[derive(TypedStruct)]`; there is
/// rarely a reason to implement it by hand.
///
/// ```rust
/// use forma::{TypedStruct, Value, fields, typed_struct};
///
/// typed_struct! {
///     pub struct Point {
///         #[field(guard = forma::guards::is_integer)]
///         x: i64,
///         #[field(guard = forma::guards::is_integer)]
///         y: i64,
///     }
/// }
///
/// let p = Point::new(fields! { "x" => 1, "y" => 2 }).unwrap();
/// assert_eq!(p.get_field("y"), Some(Value::Int(2)));
/// assert_eq!(Point::FIELD_NAMES, &["x", "y"]);
/// ```
pub trait TypedStruct: Sized + Clone + FromValue + IntoValue {
    /// Fully qualified type name, `module_path!()::Ident`.
    const NAME: &'static str;

    /// Declared field names, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// The struct's schema, built on first use.
    fn schema() -> &'static Arc<StructSchema>;

    /// Validates `fields` and builds an instance, reporting every violation.
    fn from_fields(fields: Fields) -> Result<Self>;

    /// Snapshot of every field as a [`Value`].
    fn to_fields(&self) -> Fields;

    /// Getter by name.
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Setter by name, returning a new instance.
    fn put_field(&self, name: &str, value: Value) -> Result<Self>;

    fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Rebuilds an instance from a struct snapshot of this type.
    fn instance_of(value: &Value) -> Result<Self> {
        match value {
            Value::Struct(instance) if instance.is_instance_of(Self::NAME) => {
                Self::from_fields(instance.fields().clone())
            }
            other => Err(Error::NotAnInstance {
                expected: Self::NAME.to_owned(),
                found: other.describe(),
            }),
        }
    }

    /// Reads field `name` from a dynamic instance of this type.
    fn read_field(value: &Value, name: &str) -> Result<Value> {
        Self::instance_of(value)?
            .get_field(name)
            .ok_or_else(|| Error::UnknownField {
                strukt: Self::NAME.to_owned(),
                field: name.to_owned(),
            })
    }

    /// Writes field `name` of a dynamic instance, returning the new instance.
    fn write_field(value: &Value, name: &str, new: Value) -> Result<Value> {
        Ok(Self::instance_of(value)?.put_field(name, new)?.to_value())
    }

    /// Builds an instance from a JSON object.
    fn from_json(json: &serde_json::Value) -> Result<Self> {
        Self::from_fields(crate::json::fields_from_json(Self::schema(), json)?)
    }

    fn to_json(&self) -> serde_json::Value {
        self.to_value().to_json()
    }
}

/// Reads declared fields out of constructor input while collecting
/// violations.
///
/// Generated constructors read every field in declaration order and then
/// call [`finish`](Self::finish), so a single error lists every offending
/// field.
#[derive(Debug)]
pub struct FieldReader<'a> {
    schema: &'a StructSchema,
    fields: &'a Fields,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(schema: &'a StructSchema, fields: &'a Fields) -> Self {
        schema.log_unknown(fields);
        Self {
            schema,
            fields,
            violations: Vec::new(),
        }
    }

    /// Checks and converts field `name`.
    ///
    /// Returns `None` when the field is absent or rejected; rejections are
    /// recorded for [`finish`](Self::finish).
    pub fn read<T: FromValue>(&mut self, name: &str) -> Option<T> {
        let value = self.fields.get(name);
        let checked = self
            .schema
            .get(name)
            .map_or(Err(ViolationKind::Missing), |spec| spec.check(value));
        if let Err(kind) = checked {
            self.violations.push(FieldViolation::new(name, kind));
            return None;
        }

        match T::from_value(value?) {
            Ok(converted) => Some(converted),
            Err(error) => {
                self.violations
                    .push(FieldViolation::new(name, conversion_violation(error)));
                None
            }
        }
    }

    /// Fails with every violation recorded so far.
    pub fn finish(self) -> Result<()> {
        self.schema.conclude(self.violations).map_err(Error::from)
    }
}
