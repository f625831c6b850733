use syn::{Data, DeriveInput, Fields};

use super::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The shape a derived type is reflected as.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        let shape = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => return Ok(Self::Struct(ReflectStruct::new(meta, fields)?)),
                // No data to convert, same as an opaque type.
                Fields::Unit => return Ok(Self::Opaque(meta)),
                Fields::Unnamed(_) => "tuple structs",
            },
            Data::Enum(_) => "enums",
            Data::Union(_) => "unions",
        };

        Err(syn::Error::new(
            input.ident.span(),
            format!("{shape} cannot be reflected as `Struct`, use `#[reflect(opaque)]`"),
        ))
    }
}
