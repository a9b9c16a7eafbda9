//! Descriptor model shared by the proc-macros and the CLI.

use proc_macro2::Span;
use syn::{Attribute, Expr, Generics, Ident, Path, Type, Visibility, parse_quote};

/// Which items the expansion emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The struct definition plus every impl (`typed_struct!`, `forma expand`).
    Struct,
    /// Impls only, for a struct the user wrote (`#[derive(TypedStruct)]`).
    Derive,
}

/// A boolean attribute together with where it was written.
#[derive(Debug, Clone, Copy)]
pub struct Flag {
    pub value: bool,
    pub span: Span,
}

impl Flag {
    pub const fn new(value: bool, span: Span) -> Self {
        Self { value, span }
    }
}

/// One field descriptor.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Attributes other than `#[field]`, carried onto the emitted field.
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub ty: Type,
    pub guard: Option<Expr>,
    pub default: Option<Expr>,
    /// Explicit `nullable` flag; `Option<T>` fields are nullable without it.
    pub nullable: Option<Flag>,
    pub nested: Option<Flag>,
}

impl FieldDef {
    pub fn new(ident: Ident, ty: Type) -> Self {
        Self {
            attrs: Vec::new(),
            vis: Visibility::Inherited,
            ident,
            ty,
            guard: None,
            default: None,
            nullable: None,
            nested: None,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.nested.is_some_and(|flag| flag.value)
    }
}

/// One struct descriptor.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Outer attributes carried onto the emitted struct (docs, derives).
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<FieldDef>,
    /// Path of the runtime crate in generated code.
    pub crate_path: Path,
    pub surface: Surface,
}

impl StructDef {
    pub fn new(ident: Ident, surface: Surface) -> Self {
        Self {
            attrs: Vec::new(),
            vis: Visibility::Inherited,
            ident,
            generics: Generics::default(),
            fields: Vec::new(),
            crate_path: default_crate_path(),
            surface,
        }
    }
}

/// `::forma`.
pub fn default_crate_path() -> Path {
    parse_quote!(::forma)
}
