use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, FieldsNamed, Type, Visibility, ext::IdentExt};

use super::{FieldAttributes, ReflectMeta};

/// A named field, with its parsed attributes.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// The index of the field in the struct declaration.
    pub declaration_index: usize,
}

impl StructField<'_> {
    /// The declared name, without the `r#` prefix of raw identifiers.
    pub fn name(&self) -> String {
        self.data
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .expect("Struct should not have unnamed fields.")
    }

    /// Generate the `NamedField` of this field.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::NamedField::new::<u16>("port")
    ///     .with_cty_tag("port,omitempty")
    ///     .with_public(false)
    /// ```
    fn to_info_tokens(&self, meta: &ReflectMeta) -> TokenStream {
        let named_field_ = crate::path::named_field_(meta.cty_reflect_path());

        let ty = &self.data.ty;
        let name = self.name();

        let with_cty_tag = self
            .attrs
            .cty_tag
            .as_ref()
            .map(|tag| quote!(.with_cty_tag(#tag)));
        let with_hcl_tag = self
            .attrs
            .hcl_tag
            .as_ref()
            .map(|tag| quote!(.with_hcl_tag(#tag)));

        // `NamedField::new` defaults to a public, non-embedded field.
        let with_public = match self.data.vis {
            Visibility::Public(_) => crate::utils::empty(),
            _ => quote!(.with_public(false)),
        };
        let with_embedded = match self.attrs.embed {
            Some(_) => quote!(.with_embedded(true)),
            None => crate::utils::empty(),
        };

        quote! {
            #named_field_::new::<#ty>(#name)
                #with_cty_tag
                #with_hcl_tag
                #with_public
                #with_embedded
        }
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a FieldsNamed) -> syn::Result<Self> {
        let fields = fields
            .named
            .iter()
            .enumerate()
            .map(|(declaration_index, data)| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    declaration_index,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let mut active_types: Vec<Type> = Vec::with_capacity(fields.len());
        for field in &fields {
            if !active_types.contains(&field.data.ty) {
                active_types.push(field.data.ty.clone());
            }
        }
        meta.set_active_types(active_types);

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Generate the `TypeInfo` of the struct.
    pub fn to_info_tokens(&self) -> TokenStream {
        let cty_reflect_path = self.meta.cty_reflect_path();
        let type_info_ = crate::path::type_info_(cty_reflect_path);
        let struct_info_ = crate::path::struct_info_(cty_reflect_path);

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(&self.meta));
        let with_hooks = self.meta.with_hooks_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
                #with_hooks
            )
        }
    }
}
