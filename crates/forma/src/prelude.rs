//! Prelude module for convenient imports.
//!
//! ```rust
//! use forma::prelude::*;
//!
//! let fields = fields! { "year" => 5 };
//! assert_eq!(fields.get("year"), Some(&Value::Int(5)));
//! ```

pub use crate::convert::{FromValue, IntoValue};
pub use crate::error::{Error, Result, ValidationError, ViolationKind};
pub use crate::field_map::Fields;
pub use crate::typed::TypedStruct;
pub use crate::value::{StructValue, Value, ValueKind};

pub use crate::fields;

#[cfg(feature = "derive")]
pub use forma_macros::{TypedStruct, typed_struct};
