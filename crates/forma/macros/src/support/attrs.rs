use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::{
    Attribute, Expr, ExprLit, Ident, Lit, Meta, Path, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

use forma_codegen::Flag;

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `nullable` or `nested`
    Flag(Ident),
    /// Key-value pair like `guard = path` or `default = expr`
    KeyValue { key: Ident, value: Expr },
}

impl AttrItem {
    pub const fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_expr(&self, key: &str) -> Option<&Expr> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string literal value by key.
    pub fn get_string(&self, key: &str) -> Result<Option<(String, Span)>> {
        match self.get_expr(key) {
            None => Ok(None),
            Some(Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            })) => Ok(Some((s.value(), s.span()))),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected a string literal for `{key}`"),
            )),
        }
    }

    /// Parse a path from a string value, like `crate = "my::forma"`.
    pub fn get_path(&self, key: &str) -> Result<Option<Path>> {
        let Some((value, span)) = self.get_string(key)? else {
            return Ok(None);
        };
        syn::parse_str::<Path>(&value)
            .map(Some)
            .map_err(|e| syn::Error::new(span, format!("invalid path for `{key}`: {e}")))
    }

    /// A boolean written either as a bare flag or as `key = true|false`.
    pub fn get_flag(&self, key: &str) -> Result<Option<Flag>> {
        for item in &self.items {
            match item {
                AttrItem::Flag(k) if k == key => return Ok(Some(Flag::new(true, k.span()))),
                AttrItem::KeyValue { key: k, value } if k == key => {
                    return match value {
                        Expr::Lit(ExprLit {
                            lit: Lit::Bool(b), ..
                        }) => Ok(Some(Flag::new(b.value, value.span()))),
                        other => Err(diag::error_spanned(
                            other,
                            format!("expected `true` or `false` for `{key}`"),
                        )),
                    };
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Fail on keys outside `known`, and on flags given as bare words where
    /// a value is required.
    pub fn reject_unknown(&self, known: &[&str], valued: &[&str]) -> Result<()> {
        for item in &self.items {
            let key = item.key();
            if !known.iter().any(|k| key == k) {
                return Err(diag::error_spanned(
                    key,
                    format!(
                        "unknown attribute `{}`; expected one of: {}",
                        key.unraw(),
                        known.join(", ")
                    ),
                ));
            }
            if let AttrItem::Flag(key) = item
                && valued.iter().any(|k| key == k)
            {
                return Err(diag::error_spanned(
                    key,
                    format!("`{key}` needs a value: `{key} = ...`"),
                ));
            }
        }
        let mut seen: Vec<&Ident> = Vec::new();
        for item in &self.items {
            let key = item.key();
            if seen.contains(&key) {
                return Err(diag::error_spanned(
                    key,
                    format!("`{}` given more than once", key.unraw()),
                ));
            }
            seen.push(key);
        }
        Ok(())
    }
}

/// Parse attribute like `#[field(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] or #[{expected}] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = if input.is_empty() {
            vec![]
        } else {
            Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
                .into_iter()
                .map(|x| x.0)
                .collect()
        };
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        // `crate` is a keyword, so accept any identifier here.
        let key = Ident::parse_any(input)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Expr = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
