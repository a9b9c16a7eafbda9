use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, FieldsNamed, Ident};

/// Ensure input is a struct and return its fields.
pub fn require_struct_fields(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(s) => Ok(&s.fields),
        _ => Err(syn::Error::new(
            input.ident.span(),
            "TypedStruct can only be derived for structs",
        )),
    }
}

/// Return named fields if the struct has them; otherwise error.
pub fn require_named<'a>(ident: &Ident, fields: &'a Fields) -> syn::Result<&'a FieldsNamed> {
    match fields {
        Fields::Named(named) => Ok(named),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "typed structs need named fields (e.g. `struct X { year: i64 }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            ident.span(),
            "typed structs need at least one named field",
        )),
    }
}

/// Attributes not named `name`.
pub fn without(attrs: &[Attribute], name: &str) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident(name))
        .cloned()
        .collect()
}
