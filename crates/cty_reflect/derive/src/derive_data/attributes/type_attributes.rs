use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitBool};

use super::{HookFlags, TraitImplSwitches};
use crate::REFLECT_ATTRIBUTE_NAME;

/// The `#[reflect(...)]` attributes of a type.
///
/// Examples:
/// - `#[reflect(opaque)]`
/// - `#[reflect(default, serialize, deserialize)]`
/// - `#[reflect(typed = false)]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub opaque: Option<Span>,
    pub impl_switchs: TraitImplSwitches,
    pub hooks: HookFlags,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(&meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("expected an identifier"));
        };
        let span = ident.span();

        let slot = match ident.to_string().as_str() {
            "typed" => {
                self.impl_switchs.impl_typed = parse_bool(meta)?;
                return Ok(());
            }
            "reflect" => {
                self.impl_switchs.impl_reflect = parse_bool(meta)?;
                return Ok(());
            }
            "embed" => {
                return Err(meta.error("`embed` can only be applied to fields"));
            }
            "opaque" => &mut self.opaque,
            "default" => &mut self.hooks.default,
            "marshal_value" => &mut self.hooks.marshal_value,
            "unmarshal_value" => &mut self.hooks.unmarshal_value,
            "serialize" => &mut self.hooks.serialize,
            "deserialize" => &mut self.hooks.deserialize,
            "marshal_text" => &mut self.hooks.marshal_text,
            "unmarshal_text" => &mut self.hooks.unmarshal_text,
            other => {
                return Err(meta.error(format!("unknown reflect attribute `{other}`")));
            }
        };

        if slot.is_some() {
            return Err(meta.error(format!("duplicate `{ident}` attribute")));
        }
        *slot = Some(span);
        Ok(())
    }
}

/// Parse `name = true` or `name = false`.
fn parse_bool(meta: &ParseNestedMeta) -> syn::Result<bool> {
    let lit: LitBool = meta.value()?.parse()?;
    Ok(lit.value)
}
