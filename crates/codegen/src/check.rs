//! Descriptor checks run before expansion.
//!
//! Every problem is reported, each spanned at the offending tokens, so a
//! single compile shows all of them.

use std::collections::HashSet;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Error, Visibility};

use crate::model::{FieldDef, StructDef, Surface};
use crate::types;

/// Names of inherent items every typed struct gets.
const RESERVED: &[&str] = &["new", "NAME", "FIELD_NAMES"];

/// Rejects descriptors the expansion cannot honor.
pub fn check(def: &StructDef) -> syn::Result<()> {
    let mut errors = Errors::default();

    if !def.generics.params.is_empty() {
        errors.push(Error::new_spanned(
            &def.generics,
            "typed structs cannot be generic",
        ));
    } else if let Some(where_clause) = &def.generics.where_clause {
        errors.push(Error::new_spanned(
            where_clause,
            "typed structs cannot be generic",
        ));
    }

    if def.fields.is_empty() {
        errors.push(Error::new(
            def.ident.span(),
            "a typed struct needs at least one field",
        ));
    }

    let names: HashSet<String> = def
        .fields
        .iter()
        .map(|field| field.ident.unraw().to_string())
        .collect();
    let mut seen = HashSet::new();

    for field in &def.fields {
        let name = field.ident.unraw().to_string();
        if !seen.insert(name.clone()) {
            errors.push(Error::new(
                field.ident.span(),
                format!("duplicate field `{name}`"),
            ));
        }
        if RESERVED.contains(&name.as_str()) {
            errors.push(Error::new(
                field.ident.span(),
                format!("field name `{name}` clashes with a generated item"),
            ));
        }
        if let Some(base) = name.strip_prefix("set_")
            && names.contains(base)
        {
            errors.push(Error::new(
                field.ident.span(),
                format!("field `{name}` clashes with the setter of field `{base}`"),
            ));
        }
        if def.surface == Surface::Struct && !matches!(field.vis, Visibility::Inherited) {
            errors.push(Error::new(
                field.vis.span(),
                "typed struct fields are private; use the getter and setter instead",
            ));
        }
        check_field(field, &mut errors);
    }

    errors.finish()
}

fn check_field(field: &FieldDef, errors: &mut Errors) {
    let is_option = types::option_inner(&field.ty).is_some();

    match field.nullable {
        Some(flag) if flag.value && !is_option => errors.push(Error::new(
            flag.span,
            format!(
                "nullable field `{}` must be declared as `Option<T>`",
                field.ident.unraw()
            ),
        )),
        Some(flag) if !flag.value && is_option => errors.push(Error::new(
            flag.span,
            format!(
                "`Option` field `{}` is always nullable; remove `nullable = false`",
                field.ident.unraw()
            ),
        )),
        _ => {}
    }

    if field.is_nested()
        && let Some(guard) = &field.guard
    {
        errors.push(Error::new_spanned(
            guard,
            format!(
                "`guard` has no effect on nested field `{}`; the instance check replaces it",
                field.ident.unraw()
            ),
        ));
    }
}

#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn push(&mut self, error: Error) {
        match &mut self.0 {
            Some(first) => first.combine(error),
            None => self.0 = Some(error),
        }
    }

    fn finish(self) -> syn::Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}
