//! Descriptor files.
//!
//! ```toml
//! [[struct]]
//! name = "Car"
//! visibility = "pub"
//!
//! [[struct.field]]
//! name = "year"
//! type = "i64"
//! guard = "forma::guards::is_integer"
//! default = "2"
//! ```
//!
//! The same file drives `forma expand` (Rust source through the shared
//! codegen) and `forma validate` (runtime schemas).

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use forma::{Conversion, FieldSpec, Fields, Guard, SchemaRegistry, StructSchema, Value, guards};
use forma_codegen::{FieldDef, Flag, StructDef, Surface};
use proc_macro2::Span;
use serde::Deserialize;
use syn::{GenericArgument, PathArguments, Type};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorFile {
    #[serde(rename = "struct", default)]
    pub structs: Vec<StructDesc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructDesc {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldDesc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDesc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub guard: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub nullable: Option<bool>,
    #[serde(default)]
    pub nested: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

impl DescriptorFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let file = Self::parse(&text)
            .with_context(|| format!("invalid descriptor file `{}`", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            structs = file.structs.len(),
            "descriptors loaded"
        );
        Ok(file)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let file: Self = toml::from_str(text)?;
        if file.structs.is_empty() {
            bail!("no `[[struct]]` tables found");
        }
        Ok(file)
    }

    pub fn get(&self, name: &str) -> Option<&StructDesc> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Codegen descriptors for every struct, in file order.
    pub fn struct_defs(&self, crate_path: &syn::Path) -> anyhow::Result<Vec<StructDef>> {
        self.structs
            .iter()
            .map(|desc| {
                desc.struct_def(crate_path)
                    .with_context(|| format!("in struct `{}`", desc.name))
            })
            .collect()
    }

    /// Runtime schemas for every struct, with nested types resolved by name.
    ///
    /// Descriptors go through the same checks as `forma expand`.
    pub fn registry(&self) -> anyhow::Result<SchemaRegistry> {
        for def in self.struct_defs(&forma_codegen::default_crate_path())? {
            forma_codegen::check(&def).map_err(|e| codegen_error(&def, e))?;
        }

        let mut builder = RegistryBuilder {
            file: self,
            built: HashMap::new(),
            stack: Vec::new(),
        };
        let mut registry = SchemaRegistry::new();
        for desc in &self.structs {
            registry.insert(builder.build(&desc.name)?);
        }
        Ok(registry)
    }
}

/// Flattens combined codegen diagnostics into one message.
pub fn codegen_error(def: &StructDef, error: syn::Error) -> anyhow::Error {
    let messages: Vec<String> = error.into_iter().map(|e| e.to_string()).collect();
    anyhow::anyhow!("struct `{}`: {}", def.ident, messages.join("; "))
}

impl StructDesc {
    fn struct_def(&self, crate_path: &syn::Path) -> anyhow::Result<StructDef> {
        let ident = syn::parse_str::<syn::Ident>(&self.name)
            .with_context(|| format!("`{}` is not a valid struct name", self.name))?;

        let mut def = StructDef::new(ident, Surface::Struct);
        def.crate_path = crate_path.clone();
        if let Some(vis) = &self.visibility {
            def.vis = syn::parse_str(vis).with_context(|| format!("invalid visibility `{vis}`"))?;
        }
        if let Some(doc) = &self.doc {
            def.attrs.push(syn::parse_quote!(#[doc = #doc]));
        }
        def.fields = self
            .fields
            .iter()
            .map(|field| {
                field
                    .field_def()
                    .with_context(|| format!("in field `{}`", field.name))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(def)
    }
}

impl FieldDesc {
    fn field_def(&self) -> anyhow::Result<FieldDef> {
        let ident = syn::parse_str::<syn::Ident>(&self.name)
            .with_context(|| format!("`{}` is not a valid field name", self.name))?;
        let mut def = FieldDef::new(ident, self.parse_type()?);

        if let Some(guard) = &self.guard {
            def.guard = Some(
                syn::parse_str(guard).with_context(|| format!("invalid guard `{guard}`"))?,
            );
        }
        if let Some(default) = &self.default {
            def.default = Some(
                syn::parse_str(default).with_context(|| format!("invalid default `{default}`"))?,
            );
        }
        if let Some(doc) = &self.doc {
            def.attrs.push(syn::parse_quote!(#[doc = #doc]));
        }
        def.nullable = self.nullable.map(|value| Flag::new(value, Span::call_site()));
        def.nested = self.nested.then(|| Flag::new(true, Span::call_site()));
        Ok(def)
    }

    fn parse_type(&self) -> anyhow::Result<Type> {
        syn::parse_str(&self.ty).with_context(|| format!("invalid type `{}`", self.ty))
    }

    fn is_nullable(&self, ty: &Type) -> bool {
        self.nullable.unwrap_or(false) || forma_codegen::types::option_inner(ty).is_some()
    }

    /// Guard for runtime validation: the declared builtin, or one inferred
    /// from the field type.
    fn guard(&self, ty: &Type) -> anyhow::Result<Guard> {
        if let Some(name) = &self.guard {
            return guards::by_name(name)
                .ok_or_else(|| forma::Error::UnknownGuard(name.clone()).into());
        }
        infer_guard(forma_codegen::types::value_type(ty))
            .with_context(|| format!("cannot infer a guard for type `{}`; declare one", self.ty))
    }
}

/// Last path segment of a type, e.g. `Vec` for `std::vec::Vec<u8>`.
fn type_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        Type::Reference(reference) => type_ident(&reference.elem),
        _ => None,
    }
}

fn infer_guard(ty: &Type) -> Option<Guard> {
    let guard = match type_ident(ty)?.as_str() {
        "i8" => Guard::accepts::<i8>(),
        "i16" => Guard::accepts::<i16>(),
        "i32" => Guard::accepts::<i32>(),
        "i64" => Guard::accepts::<i64>(),
        "i128" => Guard::accepts::<i128>(),
        "isize" => Guard::accepts::<isize>(),
        "u8" => Guard::accepts::<u8>(),
        "u16" => Guard::accepts::<u16>(),
        "u32" => Guard::accepts::<u32>(),
        "u64" => Guard::accepts::<u64>(),
        "usize" => Guard::accepts::<usize>(),
        "f32" | "f64" => Guard::new("is_number", guards::is_number),
        "bool" => Guard::new("is_boolean", guards::is_boolean),
        "String" | "str" => Guard::new("is_string", guards::is_string),
        "char" => Guard::accepts::<char>(),
        "Vec" => Guard::new("is_list", guards::is_list),
        "BTreeMap" | "HashMap" | "Fields" => Guard::new("is_map", guards::is_map),
        "Value" => Guard::new("is_any", guards::is_any),
        _ => return None,
    };
    Some(guard)
}

/// Generic type arguments of the last path segment, e.g. `K, V` for
/// `BTreeMap<K, V>`.
fn type_args(ty: &Type) -> Vec<&Type> {
    let Type::Path(path) = ty else {
        return Vec::new();
    };
    let Some(PathArguments::AngleBracketed(args)) =
        path.path.segments.last().map(|segment| &segment.arguments)
    else {
        return Vec::new();
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}

/// Runtime counterpart of the field type's `FromValue` impl, so `validate`
/// rejects what the generated constructor rejects. `None` for types that
/// take any value or that this file cannot know about.
fn infer_conversion(ty: &Type) -> Option<Conversion> {
    let conversion = match type_ident(ty)?.as_str() {
        "i8" => Conversion::to::<i8>(),
        "i16" => Conversion::to::<i16>(),
        "i32" => Conversion::to::<i32>(),
        "i64" => Conversion::to::<i64>(),
        "i128" => Conversion::to::<i128>(),
        "isize" => Conversion::to::<isize>(),
        "u8" => Conversion::to::<u8>(),
        "u16" => Conversion::to::<u16>(),
        "u32" => Conversion::to::<u32>(),
        "u64" => Conversion::to::<u64>(),
        "usize" => Conversion::to::<usize>(),
        "f32" => Conversion::to::<f32>(),
        "f64" => Conversion::to::<f64>(),
        "bool" => Conversion::to::<bool>(),
        "String" | "str" => Conversion::to::<String>(),
        "char" => Conversion::to::<char>(),
        "Fields" => Conversion::to::<Fields>(),
        "Option" => {
            let inner = infer_conversion(type_args(ty).first()?)?;
            Conversion::new(format!("Option<{}>", inner.target()), move |value| {
                if value.is_null() {
                    Ok(())
                } else {
                    inner.check(value)
                }
            })
        }
        "Vec" => {
            let inner = infer_conversion(type_args(ty).first()?)?;
            Conversion::new(format!("Vec<{}>", inner.target()), move |value| {
                value
                    .as_list()
                    .ok_or_else(|| mismatch("list", value))?
                    .iter()
                    .try_for_each(|item| inner.check(item))
            })
        }
        "BTreeMap" | "HashMap" => {
            let inner = infer_conversion(type_args(ty).get(1)?)?;
            Conversion::new(format!("map of {}", inner.target()), move |value| {
                value
                    .as_map()
                    .ok_or_else(|| mismatch("map", value))?
                    .iter()
                    .try_for_each(|(_, item)| inner.check(item))
            })
        }
        _ => return None,
    };
    Some(conversion)
}

fn mismatch(expected: &'static str, found: &Value) -> forma::Error {
    forma::Error::TypeMismatch {
        expected,
        found: found.describe(),
    }
}

struct RegistryBuilder<'a> {
    file: &'a DescriptorFile,
    built: HashMap<String, Arc<StructSchema>>,
    stack: Vec<String>,
}

impl RegistryBuilder<'_> {
    fn build(&mut self, name: &str) -> anyhow::Result<Arc<StructSchema>> {
        if let Some(schema) = self.built.get(name) {
            return Ok(Arc::clone(schema));
        }
        if self.stack.iter().any(|s| s == name) {
            bail!(
                "nested structs form a cycle: {} -> {name}",
                self.stack.join(" -> ")
            );
        }
        let desc = self
            .file
            .get(name)
            .ok_or_else(|| forma::Error::UnknownStruct(name.to_owned()))?;

        self.stack.push(name.to_owned());
        let mut schema = StructSchema::new(name);
        for field in &desc.fields {
            let spec = self
                .field_spec(field)
                .with_context(|| format!("in field `{name}.{}`", field.name))?;
            schema = schema.field(spec);
        }
        self.stack.pop();

        let schema = Arc::new(schema);
        self.built.insert(name.to_owned(), Arc::clone(&schema));
        Ok(schema)
    }

    fn field_spec(&mut self, field: &FieldDesc) -> anyhow::Result<FieldSpec> {
        let ty = field.parse_type()?;
        let nullable = field.is_nullable(&ty);

        if field.nested {
            let value_ty = forma_codegen::types::value_type(&ty);
            let Some(nested) = type_ident(value_ty) else {
                bail!("nested field type `{}` does not name a struct", field.ty);
            };
            let schema = self.build(&nested)?;
            return Ok(FieldSpec::new(&field.name, Guard::new("is_struct", guards::is_struct))
                .nullable(nullable)
                .nested(schema));
        }

        let spec = FieldSpec::new(&field.name, field.guard(&ty)?).nullable(nullable);
        Ok(match infer_conversion(forma_codegen::types::value_type(&ty)) {
            Some(conversion) => spec.converts(conversion),
            None => spec,
        })
    }
}
