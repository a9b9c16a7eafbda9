//! # forma-codegen
//!
//! Expansion engine shared by `forma-macros` and the `forma` CLI.
//!
//! Both front ends build a [`StructDef`] (from Rust tokens or from a
//! descriptor file), and [`expand`] checks it and generates the struct, its
//! constructor, getters and setters, and the runtime trait impls.

#![forbid(unsafe_code)]

mod check;
mod expand;
mod model;
pub mod types;

pub use check::check;
pub use expand::expand;
pub use model::{FieldDef, Flag, StructDef, Surface, default_crate_path};
