use proc_macro2::Span;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, spanned::Spanned};

use crate::{CTY_ATTRIBUTE_NAME, HCL_ATTRIBUTE_NAME, REFLECT_ATTRIBUTE_NAME};

/// The attributes of a named field.
///
/// Examples:
/// - `#[reflect(embed)]`
/// - `#[cty("name,omitempty")]`
/// - `#[hcl = "name"]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub embed: Option<Span>,
    pub cty_tag: Option<LitStr>,
    pub hcl_tag: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            let path = attr.path();
            if path.is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("embed") {
                        if this.embed.is_some() {
                            return Err(meta.error("duplicate `embed` attribute"));
                        }
                        this.embed = Some(meta.path.span());
                        Ok(())
                    } else {
                        Err(meta.error("unknown field attribute, expected `embed`"))
                    }
                })?;
            } else if path.is_ident(CTY_ATTRIBUTE_NAME) {
                set_tag(&mut this.cty_tag, attr)?;
            } else if path.is_ident(HCL_ATTRIBUTE_NAME) {
                set_tag(&mut this.hcl_tag, attr)?;
            }
        }
        Ok(this)
    }
}

/// Parse `#[tag("...")]` or `#[tag = "..."]`.
fn set_tag(slot: &mut Option<LitStr>, attr: &Attribute) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(attr.span(), "duplicate tag attribute"));
    }

    let tag = match &attr.meta {
        Meta::List(_) => attr.parse_args::<LitStr>()?,
        Meta::NameValue(pair) => match &pair.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => lit_str.clone(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected a string literal tag",
                ));
            }
        },
        Meta::Path(path) => {
            return Err(syn::Error::new(
                path.span(),
                "expected a tag, e.g. `#[cty(\"name\")]`",
            ));
        }
    };

    *slot = Some(tag);
    Ok(())
}
