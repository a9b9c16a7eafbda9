use std::fmt;
use std::sync::Arc;

use crate::convert::FromValue;
use crate::error::Result;
use crate::value::Value;

/// Signature of a type-guard predicate.
pub type Predicate = fn(&Value) -> bool;

/// A named type-guard predicate.
///
/// Generated code names a guard after the path written in `#[field(guard = ...)]`;
/// fields without one get [`Guard::accepts`] for their Rust type.
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    check: Predicate,
}

impl Guard {
    pub const fn new(name: &'static str, check: Predicate) -> Self {
        Self { name, check }
    }

    /// Guard that passes any value converting to `T`.
    pub fn accepts<T: FromValue>() -> Self {
        Self::new(std::any::type_name::<T>(), T::accepts)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the predicate.
    pub fn check(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

/// Check that a value converts to a field's Rust type.
///
/// Runs after the guard, so a field guarded by `is_integer` but declared
/// `u8` still rejects `1000`.
#[derive(Clone)]
pub struct Conversion {
    target: String,
    check: Arc<dyn Fn(&Value) -> Result<()> + Send + Sync>,
}

impl Conversion {
    pub fn new(
        target: impl Into<String>,
        check: impl Fn(&Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            check: Arc::new(check),
        }
    }

    /// Conversion through `T`'s [`FromValue`] impl.
    pub fn to<T: FromValue + 'static>() -> Self {
        Self::new(std::any::type_name::<T>(), |value| {
            T::from_value(value).map(drop)
        })
    }

    /// Name of the target type.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn check(&self, value: &Value) -> Result<()> {
        (self.check)(value)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Conversion").field(&self.target).finish()
    }
}
