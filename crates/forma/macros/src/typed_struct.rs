use proc_macro::TokenStream;
use syn::{Attribute, DeriveInput, FieldsNamed, ItemStruct, parse_macro_input};

use forma_codegen::{FieldDef, StructDef, Surface};

use crate::support::{attrs, diag, utils};

const FIELD_KEYS: &[&str] = &["guard", "default", "nullable", "nested"];
const FIELD_VALUED: &[&str] = &["guard", "default"];
const CONTAINER_KEYS: &[&str] = &["crate"];

/// `#[derive(TypedStruct)]`
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_derive(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// `typed_struct! { ... }`
pub fn function(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ItemStruct);

    match expand_item(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand_derive(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = utils::require_named(&input.ident, utils::require_struct_fields(input)?)?;

    let mut def = StructDef::new(input.ident.clone(), Surface::Derive);
    def.vis = input.vis.clone();
    def.generics = input.generics.clone();
    apply_container(&mut def, &input.attrs)?;
    def.fields = field_defs(fields)?;

    forma_codegen::expand(&def)
}

fn expand_item(input: &ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let fields = utils::require_named(&input.ident, &input.fields)?;

    let mut def = StructDef::new(input.ident.clone(), Surface::Struct);
    def.attrs = utils::without(&input.attrs, "forma");
    def.vis = input.vis.clone();
    def.generics = input.generics.clone();
    apply_container(&mut def, &input.attrs)?;
    def.fields = field_defs(fields)?;

    forma_codegen::expand(&def)
}

fn apply_container(def: &mut StructDef, attrs: &[Attribute]) -> syn::Result<()> {
    let args = attrs::parse_attrs(attrs, "forma")?;
    args.reject_unknown(CONTAINER_KEYS, CONTAINER_KEYS)?;
    if let Some(path) = args.get_path("crate")? {
        def.crate_path = path;
    }
    Ok(())
}

fn field_defs(fields: &FieldsNamed) -> syn::Result<Vec<FieldDef>> {
    fields
        .named
        .iter()
        .map(|field| {
            let Some(ident) = field.ident.clone() else {
                return Err(diag::error_spanned(field, "expected a named field"));
            };
            let args = attrs::parse_attrs(&field.attrs, "field")?;
            args.reject_unknown(FIELD_KEYS, FIELD_VALUED)?;

            let mut def = FieldDef::new(ident, field.ty.clone());
            def.attrs = utils::without(&field.attrs, "field");
            def.vis = field.vis.clone();
            def.guard = args.get_expr("guard").cloned();
            def.default = args.get_expr("default").cloned();
            def.nullable = args.get_flag("nullable")?;
            def.nested = args.get_flag("nested")?;
            Ok(def)
        })
        .collect()
}
