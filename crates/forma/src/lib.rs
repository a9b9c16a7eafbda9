//! # forma
//!
//! Typed, validated structs from declarative field descriptors.
//!
//! Each field declares a type guard, a default, whether null is accepted and
//! optionally a nested struct type. The macros generate the struct, a
//! validating constructor, getters, and setters that return a new instance.
//!
//! ## Quick Start
//!
//! ```rust
//! use forma::{ViolationKind, fields, typed_struct};
//!
//! typed_struct! {
//!     pub struct Car {
//!         #[field(guard = forma::guards::is_integer, default = 2)]
//!         year: i64,
//!         #[field(nullable)]
//!         nickname: Option<String>,
//!     }
//! }
//!
//! let car = Car::new(fields! { "year" => 5 }).unwrap();
//! assert_eq!(*car.year(), 5);
//! assert_eq!(*car.nickname(), None);
//!
//! let older = car.set_year(1999).unwrap();
//! assert_eq!(*older.year(), 1999);
//! assert_eq!(*car.year(), 5);
//!
//! let error = Car::new(fields! { "year" => "x" }).unwrap_err();
//! assert!(matches!(
//!     error.as_validation().and_then(|e| e.violation("year")),
//!     Some(ViolationKind::GuardRejected { .. })
//! ));
//! assert!(Car::new(fields! {}).is_err());
//! ```
//!
//! ## Field attributes
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `guard = path` | `fn(&Value) -> bool` checked by the constructor and setters |
//! | `default = expr` | value used by `Default` and for absent nullable fields |
//! | `nullable` | null is accepted; the field must be `Option<T>` |
//! | `nested` | the field holds another generated struct |
//!
//! Fields without a guard accept whatever converts to their Rust type
//! ([`FromValue::accepts`]).

extern crate self as forma;

mod convert;
mod error;
mod field_map;
mod guard;
pub mod guards;
pub mod json;
pub mod prelude;
mod schema;
mod typed;
mod value;

pub use convert::{FromValue, IntoValue};
pub use error::{Error, FieldViolation, GENERIC_MESSAGE, Result, ValidationError, ViolationKind};
pub use field_map::Fields;
pub use guard::{Conversion, Guard, Predicate};
pub use schema::{FieldSpec, SchemaRegistry, StructSchema};
pub use typed::{FieldReader, TypedStruct};
pub use value::{StructValue, Value, ValueKind};

#[cfg(feature = "derive")]
pub use forma_macros::{TypedStruct, typed_struct};
