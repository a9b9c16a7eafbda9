//! Token generation.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;

use crate::check::check;
use crate::model::{FieldDef, StructDef, Surface};
use crate::types;

/// Checks `def` and generates its items.
pub fn expand(def: &StructDef) -> syn::Result<TokenStream> {
    check(def)?;

    let strukt = match def.surface {
        Surface::Struct => emit_struct(def),
        Surface::Derive => TokenStream::new(),
    };
    let inherent = emit_inherent(def);
    let default = emit_default(def);
    let typed = emit_typed_struct(def);
    let conversions = emit_conversions(def);

    Ok(quote! {
        #strukt
        #inherent
        #default
        #typed
        #conversions
    })
}

/// Field name as seen at run time (`r#type` is `"type"`).
fn field_name(field: &FieldDef) -> String {
    field.ident.unraw().to_string()
}

fn emit_struct(def: &StructDef) -> TokenStream {
    let StructDef {
        attrs, vis, ident, ..
    } = def;
    let fields = def.fields.iter().map(|field| {
        let FieldDef {
            attrs, ident, ty, ..
        } = field;
        quote! {
            #(#attrs)*
            #ident: #ty
        }
    });

    quote! {
        #(#attrs)*
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::cmp::PartialEq)]
        #vis struct #ident {
            #(#fields,)*
        }
    }
}

fn emit_inherent(def: &StructDef) -> TokenStream {
    let StructDef {
        vis,
        ident,
        crate_path: krate,
        ..
    } = def;
    let type_name = ident.unraw().to_string();
    let names = def.fields.iter().map(field_name);

    let accessors = def.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        let name = field_name(field);
        let setter = format_ident!("set_{}", ident);
        let getter_doc = format!("Returns `{name}`.");
        let setter_doc = format!(
            "Returns a copy with `{name}` replaced, if `value` passes the field's checks."
        );

        quote! {
            #[doc = #getter_doc]
            #vis fn #ident(&self) -> &#ty {
                &self.#ident
            }

            #[doc = #setter_doc]
            #vis fn #setter(&self, value: #ty) -> #krate::Result<Self> {
                let schema = <Self as #krate::TypedStruct>::schema();
                schema.check_field(
                    #name,
                    &#krate::IntoValue::into_value(::core::clone::Clone::clone(&value)),
                )?;
                let mut next = ::core::clone::Clone::clone(self);
                next.#ident = value;
                ::core::result::Result::Ok(next)
            }
        }
    });

    quote! {
        impl #ident {
            /// Fully qualified type name.
            #vis const NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #type_name);

            /// Declared field names, in declaration order.
            #vis const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];

            /// Validates `fields` and builds an instance.
            ///
            /// Every declared field is checked; the error lists each one
            /// that was missing or rejected.
            #vis fn new(
                fields: impl ::core::convert::Into<#krate::Fields>,
            ) -> #krate::Result<Self> {
                <Self as #krate::TypedStruct>::from_fields(fields.into())
            }

            #(#accessors)*
        }
    }
}

fn default_expr(field: &FieldDef) -> TokenStream {
    field.default.as_ref().map_or_else(
        || quote!(::core::default::Default::default()),
        ToTokens::to_token_stream,
    )
}

fn emit_default(def: &StructDef) -> TokenStream {
    let ident = &def.ident;
    let inits = def.fields.iter().map(|field| {
        let ident = &field.ident;
        let value = default_expr(field);
        quote!(#ident: #value)
    });

    quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                Self {
                    #(#inits,)*
                }
            }
        }
    }
}

fn field_spec(def: &StructDef, field: &FieldDef) -> TokenStream {
    let krate = &def.crate_path;
    let name = field_name(field);
    let value_ty = types::value_type(&field.ty);
    let nullable = types::option_inner(&field.ty).is_some()
        || field.nullable.is_some_and(|flag| flag.value);

    // A declared guard says nothing about the Rust type, so the conversion
    // is checked separately; the default guard already is the conversion.
    let (guard, conversion) = match &field.guard {
        Some(guard) => {
            let label = guard.to_token_stream().to_string().replace(' ', "");
            (
                quote!(#krate::Guard::new(#label, #guard)),
                Some(quote!(.converts(#krate::Conversion::to::<#value_ty>()))),
            )
        }
        None => (quote!(#krate::Guard::accepts::<#value_ty>()), None),
    };
    let nested = field.is_nested().then(|| {
        quote! {
            .nested(::std::sync::Arc::clone(
                <#value_ty as #krate::TypedStruct>::schema(),
            ))
        }
    });

    quote! {
        #krate::FieldSpec::new(#name, #guard)
            .nullable(#nullable)
            #conversion
            #nested
    }
}

fn emit_typed_struct(def: &StructDef) -> TokenStream {
    let StructDef {
        ident,
        crate_path: krate,
        ..
    } = def;
    let count = def.fields.len();
    let specs = def.fields.iter().map(|field| field_spec(def, field));

    let locals: Vec<_> = def
        .fields
        .iter()
        .map(|field| format_ident!("__forma_{}", field.ident))
        .collect();
    let reads = def.fields.iter().zip(&locals).map(|(field, local)| {
        let ty = &field.ty;
        let name = field_name(field);
        quote!(let #local = __forma_reader.read::<#ty>(#name);)
    });
    let builds = def.fields.iter().zip(&locals).map(|(field, local)| {
        let ident = &field.ident;
        let default = default_expr(field);
        quote!(#ident: #local.unwrap_or_else(|| #default))
    });

    let inserts = def.fields.iter().map(|field| {
        let ident = &field.ident;
        let name = field_name(field);
        quote!(fields.insert(#name, ::core::clone::Clone::clone(&self.#ident));)
    });
    let gets = def.fields.iter().map(|field| {
        let ident = &field.ident;
        let name = field_name(field);
        quote! {
            #name => ::core::option::Option::Some(#krate::IntoValue::into_value(
                ::core::clone::Clone::clone(&self.#ident),
            )),
        }
    });
    let puts = def.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        let name = field_name(field);
        quote! {
            #name => {
                let mut next = ::core::clone::Clone::clone(self);
                next.#ident = schema.accept::<#ty>(#name, &value)?;
                ::core::result::Result::Ok(next)
            }
        }
    });

    quote! {
        impl #krate::TypedStruct for #ident {
            const NAME: &'static str = #ident::NAME;
            const FIELD_NAMES: &'static [&'static str] = #ident::FIELD_NAMES;

            fn schema() -> &'static ::std::sync::Arc<#krate::StructSchema> {
                static SCHEMA: ::std::sync::LazyLock<::std::sync::Arc<#krate::StructSchema>> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::sync::Arc::new(
                            #krate::StructSchema::new(#ident::NAME)
                                #(.field(#specs))*
                        )
                    });
                ::std::sync::LazyLock::force(&SCHEMA)
            }

            fn from_fields(__forma_fields: #krate::Fields) -> #krate::Result<Self> {
                let __forma_schema = <Self as #krate::TypedStruct>::schema();
                let mut __forma_reader = #krate::FieldReader::new(__forma_schema, &__forma_fields);
                #(#reads)*
                __forma_reader.finish()?;
                ::core::result::Result::Ok(Self {
                    #(#builds,)*
                })
            }

            fn to_fields(&self) -> #krate::Fields {
                let mut fields = #krate::Fields::with_capacity(#count);
                #(#inserts)*
                fields
            }

            fn get_field(&self, name: &str) -> ::core::option::Option<#krate::Value> {
                match name {
                    #(#gets)*
                    _ => ::core::option::Option::None,
                }
            }

            fn put_field(&self, name: &str, value: #krate::Value) -> #krate::Result<Self> {
                let schema = <Self as #krate::TypedStruct>::schema();
                match name {
                    #(#puts)*
                    _ => ::core::result::Result::Err(#krate::Error::UnknownField {
                        strukt: ::std::borrow::ToOwned::to_owned(#ident::NAME),
                        field: ::std::borrow::ToOwned::to_owned(name),
                    }),
                }
            }
        }
    }
}

fn emit_conversions(def: &StructDef) -> TokenStream {
    let StructDef {
        ident,
        crate_path: krate,
        ..
    } = def;

    quote! {
        impl #krate::FromValue for #ident {
            fn from_value(value: &#krate::Value) -> #krate::Result<Self> {
                <Self as #krate::TypedStruct>::instance_of(value)
            }
        }

        impl #krate::IntoValue for #ident {
            fn into_value(self) -> #krate::Value {
                let fields = <Self as #krate::TypedStruct>::to_fields(&self);
                #krate::Value::Struct(#krate::StructValue::new(#ident::NAME, fields))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Flag;
    use proc_macro2::Span;
    use syn::parse_quote;

    fn car(surface: Surface) -> StructDef {
        let mut year = FieldDef::new(parse_quote!(year), parse_quote!(i64));
        year.guard = Some(parse_quote!(forma::guards::is_integer));
        year.default = Some(parse_quote!(2));

        let mut engine = FieldDef::new(parse_quote!(engine), parse_quote!(Option<Engine>));
        engine.nested = Some(Flag::new(true, Span::call_site()));

        let mut def = StructDef::new(parse_quote!(Car), surface);
        def.vis = parse_quote!(pub);
        def.fields = vec![year, engine];
        def
    }

    fn compact(tokens: &TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn output_parses_as_items() {
        let tokens = expand(&car(Surface::Struct)).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        assert!(file.items.iter().any(|item| matches!(item, syn::Item::Struct(_))));
    }

    #[test]
    fn derive_surface_skips_struct() {
        let tokens = expand(&car(Surface::Derive)).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        assert!(!file.items.iter().any(|item| matches!(item, syn::Item::Struct(_))));
    }

    #[test]
    fn generates_accessors() {
        let out = compact(&expand(&car(Surface::Struct)).unwrap());
        assert!(out.contains("pubfnyear(&self)->&i64"));
        assert!(out.contains("pubfnset_year(&self,value:i64)->::forma::Result<Self>"));
        assert!(out.contains("pubfnset_engine(&self,value:Option<Engine>)"));
    }

    #[test]
    fn guard_and_defaults_flow_into_schema() {
        let out = compact(&expand(&car(Surface::Struct)).unwrap());
        assert!(out.contains(
            r#"::forma::Guard::new("forma::guards::is_integer",forma::guards::is_integer)"#
        ));
        assert!(out.contains(".nullable(false).converts(::forma::Conversion::to::<i64>())"));
        assert!(out.contains("year:2"));
        assert!(out.contains("engine:::core::default::Default::default()"));
        assert!(out.contains("<Engineas::forma::TypedStruct>::schema()"));
        assert!(out.contains(r#"::forma::FieldSpec::new("engine",::forma::Guard::accepts::<Engine>()).nullable(true)"#));
    }

    #[test]
    fn honors_crate_path() {
        let mut def = car(Surface::Derive);
        def.crate_path = parse_quote!(my::forma);
        let out = compact(&expand(&def).unwrap());
        assert!(out.contains("implmy::forma::TypedStructforCar"));
        assert_eq!(
            out.matches("::forma::").count(),
            out.matches("my::forma::").count()
        );
    }

    #[test]
    fn raw_identifiers_use_plain_names() {
        let mut def = StructDef::new(parse_quote!(Token), Surface::Struct);
        def.fields = vec![FieldDef::new(parse_quote!(r#type), parse_quote!(String))];
        let out = compact(&expand(&def).unwrap());
        assert!(out.contains(r#"&["type"]"#));
        assert!(out.contains("fnset_type("));
        assert!(out.contains("__forma_type"));
    }

    #[test]
    fn refuses_invalid_descriptors() {
        let def = StructDef::new(parse_quote!(Empty), Surface::Struct);
        assert!(expand(&def).is_err());
    }
}
