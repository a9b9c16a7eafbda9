//! # forma-macros
//!
//! Proc-macros for `forma`. Use them through the `forma` crate, which
//! re-exports both.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`typed_struct!`](macro@typed_struct) | Emits the struct and all its impls |
//! | [`TypedStruct`](derive@TypedStruct) | Emits the impls for a struct you wrote |
//!
//! ## Field attributes (`#[field(...)]`)
//!
//! - `guard = path` - `fn(&Value) -> bool` the value must satisfy (default:
//!   "converts to the field type")
//! - `default = expr` - default value (default: `Default::default()`)
//! - `nullable` / `nullable = bool` - accept null; requires `Option<T>`
//! - `nested` / `nested = bool` - the field holds another typed struct
//!
//! ## Container attributes (`#[forma(...)]`)
//!
//! - `crate = "path"` - path of the runtime crate (default: `::forma`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod support;
mod typed_struct;

/// Declares a typed struct.
///
/// The struct gets `Debug`, `Clone` and `PartialEq`, private fields, a
/// validating `new`, a getter and a setter per field, `Default`, and the
/// `forma::TypedStruct` impl.
///
/// # Example
///
/// ```ignore
/// forma::typed_struct! {
///     /// A car.
///     pub struct Car {
///         #[field(guard = forma::guards::is_integer, default = 2)]
///         year: i64,
///         #[field(nullable)]
///         nickname: Option<String>,
///         #[field(nested)]
///         engine: Engine,
///     }
/// }
///
/// let car = Car::new(forma::fields! { "year" => 5, "engine" => Engine::default() })?;
/// assert_eq!(*car.year(), 5);
/// ```
#[proc_macro]
pub fn typed_struct(input: TokenStream) -> TokenStream {
    typed_struct::function(input)
}

/// Derive macro for the `forma::TypedStruct` trait.
///
/// Generates the same impls as [`typed_struct!`](macro@typed_struct) for a
/// struct you declare yourself. The struct must implement `Clone` and must
/// not derive `Default`, which is generated from the declared defaults.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, forma::TypedStruct)]
/// pub struct Engine {
///     #[field(guard = forma::guards::is_positive_integer, default = 4)]
///     cylinders: i64,
/// }
/// ```
#[proc_macro_derive(TypedStruct, attributes(field, forma))]
pub fn derive_typed_struct(input: TokenStream) -> TokenStream {
    typed_struct::derive(input)
}
