//! Runtime descriptions of typed structs.
//!
//! Every generated struct exposes a [`StructSchema`] built from its field
//! descriptors. The same types can be assembled at run time (see the CLI's
//! descriptor files) and grouped in a [`SchemaRegistry`].

use std::sync::Arc;

use indexmap::IndexMap;

use crate::convert::FromValue;
use crate::error::{Error, FieldViolation, Result, ValidationError, ViolationKind};
use crate::field_map::Fields;
use crate::guard::{Conversion, Guard};
use crate::value::Value;

/// Descriptor of one field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    guard: Guard,
    conversion: Option<Conversion>,
    nullable: bool,
    nested: Option<Arc<StructSchema>>,
}

impl FieldSpec {
    /// A non-nullable, non-nested field checked by `guard`.
    pub fn new(name: impl Into<String>, guard: Guard) -> Self {
        Self {
            name: name.into(),
            guard,
            conversion: None,
            nullable: false,
            nested: None,
        }
    }

    /// Adds a conversion check run after the guard passes.
    #[must_use = "builder methods must be chained or built"]
    pub fn converts(mut self, conversion: Conversion) -> Self {
        self.conversion = Some(conversion);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Declares the field as holding instances of another struct.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested(mut self, schema: Arc<StructSchema>) -> Self {
        self.nested = Some(schema);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn guard(&self) -> &Guard {
        &self.guard
    }

    pub const fn conversion(&self) -> Option<&Conversion> {
        self.conversion.as_ref()
    }

    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Schema of the nested struct type, if declared.
    pub fn nested_schema(&self) -> Option<&Arc<StructSchema>> {
        self.nested.as_ref()
    }

    /// Applies the constructor policy to one supplied value.
    ///
    /// `None` means the caller did not supply the field. Null passes only a
    /// nullable field. For a nested field the instance check replaces the
    /// guard: the value must be an instance of the nested struct and is
    /// validated against its schema. Otherwise the guard runs first, then
    /// the conversion check if one is declared.
    pub fn check(&self, value: Option<&Value>) -> Result<(), ViolationKind> {
        let Some(value) = value else {
            return if self.nullable {
                Ok(())
            } else {
                Err(ViolationKind::Missing)
            };
        };

        if value.is_null() && self.nullable {
            return Ok(());
        }

        if let Some(nested) = &self.nested {
            return match value {
                Value::Struct(instance) if instance.is_instance_of(nested.name()) => nested
                    .validate(instance.fields())
                    .map_err(|error| ViolationKind::Nested {
                        error: Box::new(error),
                    }),
                Value::Null => Err(ViolationKind::NullNotAllowed),
                other => Err(ViolationKind::NotAnInstance {
                    expected: nested.name().to_owned(),
                    found: other.describe(),
                }),
            };
        }

        if self.guard.check(value) {
            self.conversion
                .as_ref()
                .map_or(Ok(()), |conversion| conversion.check(value))
                .map_err(conversion_violation)
        } else if value.is_null() {
            Err(ViolationKind::NullNotAllowed)
        } else {
            Err(ViolationKind::GuardRejected {
                guard: self.guard.name().to_owned(),
                found: value.describe(),
            })
        }
    }
}

/// Descriptor of a whole struct.
#[derive(Debug, Clone)]
pub struct StructSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl StructSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field descriptors in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a descriptor by field name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Checks every declared field against `fields`, collecting all
    /// violations. Keys naming no declared field are ignored.
    pub fn validate(&self, fields: &Fields) -> Result<(), ValidationError> {
        self.log_unknown(fields);
        let violations: Vec<FieldViolation> = self
            .fields
            .iter()
            .filter_map(|spec| {
                spec.check(fields.get(&spec.name))
                    .err()
                    .map(|kind| FieldViolation::new(&spec.name, kind))
            })
            .collect();
        self.conclude(violations)
    }

    /// Checks a single value against the field `name`.
    pub fn check_field(&self, name: &str, value: &Value) -> Result<()> {
        let spec = self.require(name)?;
        spec.check(Some(value))
            .map_err(|kind| self.reject(name, kind).into())
    }

    /// Checks a single value against the field `name` and converts it.
    pub fn accept<T: FromValue>(&self, name: &str, value: &Value) -> Result<T> {
        self.check_field(name, value)?;
        T::from_value(value).map_err(|error| self.reject(name, conversion_violation(error)).into())
    }

    fn require(&self, name: &str) -> Result<&FieldSpec> {
        self.get(name).ok_or_else(|| Error::UnknownField {
            strukt: self.name.clone(),
            field: name.to_owned(),
        })
    }

    fn reject(&self, field: &str, kind: ViolationKind) -> ValidationError {
        tracing::debug!(strukt = %self.name, field, reason = %kind, "field rejected");
        ValidationError::single(&self.name, field, kind)
    }

    pub(crate) fn log_unknown(&self, fields: &Fields) {
        for name in fields.names().filter(|name| !self.contains(name)) {
            tracing::debug!(strukt = %self.name, field = name, "ignoring undeclared field");
        }
    }

    pub(crate) fn conclude(&self, violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
        if violations.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            strukt = %self.name,
            violations = violations.len(),
            "constructor input rejected"
        );
        Err(ValidationError::new(&self.name, violations))
    }
}

/// Maps a conversion failure onto a field violation.
pub(crate) fn conversion_violation(error: Error) -> ViolationKind {
    match error {
        Error::Validation(error) => ViolationKind::Nested {
            error: Box::new(error),
        },
        other => ViolationKind::Conversion {
            message: other.to_string(),
        },
    }
}

/// Named collection of schemas, used to resolve nested struct types of
/// dynamically described input.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Arc<StructSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its own name, replacing any previous one.
    pub fn insert(&mut self, schema: impl Into<Arc<StructSchema>>) -> Arc<StructSchema> {
        let schema = schema.into();
        tracing::trace!(strukt = %schema.name(), "schema registered");
        self.schemas
            .insert(schema.name().to_owned(), Arc::clone(&schema));
        schema
    }

    pub fn get(&self, name: &str) -> Option<&Arc<StructSchema>> {
        self.schemas.get(name)
    }

    /// Like [`get`](Self::get), failing with [`Error::UnknownStruct`].
    pub fn require(&self, name: &str) -> Result<&Arc<StructSchema>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownStruct(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validates a JSON object against the schema registered as `name`.
    pub fn validate_json(&self, name: &str, json: &serde_json::Value) -> Result<Fields> {
        let schema = self.require(name)?;
        let fields = crate::json::fields_from_json(schema, json)?;
        schema.validate(&fields)?;
        Ok(fields)
    }
}
