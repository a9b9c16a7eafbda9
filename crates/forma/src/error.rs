//! Error types.
//!
//! Construction and mutation failures are reported as a
//! [`ValidationError`]: the struct name plus one [`FieldViolation`] per
//! offending field, so callers never have to guess which argument was wrong.
//! Its `Display` still leads with the classic generic message.

use std::fmt;

use serde::Serialize;

/// Leading text of every [`ValidationError`] message.
pub const GENERIC_MESSAGE: &str =
    "type mismatch for constructor parameter(s) or required parameters are missing";

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// One or more fields violated their descriptor.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A dynamic getter or setter was handed something that is not an
    /// instance of the expected struct.
    #[error("expected an instance of `{expected}`, found {found}")]
    NotAnInstance { expected: String, found: String },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("{value} is out of range for `{target}`")]
    OutOfRange { value: String, target: &'static str },

    #[error("`{strukt}` has no field named `{field}`")]
    UnknownField { strukt: String, field: String },

    #[error("`{0}` is not a builtin guard")]
    UnknownGuard(String),

    #[error("no schema registered for struct `{0}`")]
    UnknownStruct(String),
}

impl Error {
    /// Field violations carried by this error, empty for other kinds.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation(e) => e.violations(),
            _ => &[],
        }
    }

    /// Returns the validation error, if this is one.
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// A rejected construction or mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "struct")]
    strukt: String,
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(strukt: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self {
            strukt: strukt.into(),
            violations,
        }
    }

    /// Shorthand for an error with a single violation.
    pub fn single(strukt: impl Into<String>, field: impl Into<String>, kind: ViolationKind) -> Self {
        Self::new(strukt, vec![FieldViolation::new(field, kind)])
    }

    /// Name of the struct that rejected its input.
    pub fn strukt(&self) -> &str {
        &self.strukt
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }

    /// Violation reported for `field`, if any.
    pub fn violation(&self, field: &str) -> Option<&ViolationKind> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| &v.kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GENERIC_MESSAGE} for `{}`", self.strukt)?;
        for (i, violation) in self.violations.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// One field that failed its descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.field, self.kind)
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Not supplied, and the field is not nullable.
    Missing,
    /// Null supplied for a field that is not nullable.
    NullNotAllowed,
    /// The field's type guard returned false.
    GuardRejected { guard: String, found: String },
    /// A nested-struct field received something other than an instance of
    /// its declared struct.
    NotAnInstance { expected: String, found: String },
    /// The value passed its guard but does not convert to the field's type.
    Conversion { message: String },
    /// A nested instance failed its own validation.
    Nested { error: Box<ValidationError> },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required but was not supplied"),
            Self::NullNotAllowed => f.write_str("is not nullable"),
            Self::GuardRejected { guard, found } => write!(f, "rejected by `{guard}`: {found}"),
            Self::NotAnInstance { expected, found } => {
                write!(f, "expects an instance of `{expected}`, found {found}")
            }
            Self::Conversion { message } => write!(f, "cannot be converted: {message}"),
            Self::Nested { error } => write!(f, "is invalid ({error})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ValidationError {
        ValidationError::new(
            "app::Car",
            vec![
                FieldViolation::new("year", ViolationKind::Missing),
                FieldViolation::new(
                    "make",
                    ViolationKind::GuardRejected {
                        guard: "is_string".into(),
                        found: "integer 3".into(),
                    },
                ),
            ],
        )
    }

    #[test]
    fn display_starts_with_generic_message() {
        let message = sample().to_string();
        assert!(message.starts_with(GENERIC_MESSAGE));
        assert_eq!(
            message,
            format!(
                "{GENERIC_MESSAGE} for `app::Car`: `year` is required but was not supplied; \
                 `make` rejected by `is_string`: integer 3"
            )
        );
    }

    #[test]
    fn lookup_by_field() {
        let error = sample();
        assert_eq!(error.fields().collect::<Vec<_>>(), vec!["year", "make"]);
        assert_eq!(error.violation("year"), Some(&ViolationKind::Missing));
        assert_eq!(error.violation("model"), None);
    }

    #[test]
    fn error_exposes_violations() {
        let error = Error::from(sample());
        assert_eq!(error.violations().len(), 2);
        assert!(Error::UnknownGuard("x".into()).violations().is_empty());
    }

    #[test]
    fn serializes_with_reason_tags() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "struct": "app::Car",
                "violations": [
                    { "field": "year", "reason": "missing" },
                    {
                        "field": "make",
                        "reason": "guard_rejected",
                        "guard": "is_string",
                        "found": "integer 3"
                    }
                ]
            })
        );
    }
}
