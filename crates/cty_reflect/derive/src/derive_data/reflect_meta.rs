use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};
use syn::{Generics, Ident, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::TypeAttributes;

pub(crate) struct ReflectMeta<'a> {
    cty_reflect_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
    generics: &'a Generics,
    // Field types, deduplicated in declaration order.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("cty_reflect_path", &self.cty_reflect_path.to_token_stream())
            .field("type_ident", &self.type_ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            type_ident,
            generics,
            cty_reflect_path: crate::path::cty_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Used for [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the field types during initialization.
    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn cty_reflect_path(&self) -> &Path {
        &self.cty_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.type_ident
    }

    /// Whether the `static CELL` of `Typed` is shared by several
    /// instantiations and must be keyed by `TypeId`.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, syn::GenericParam::Lifetime(_)))
    }

    /// Generate the hooks table of the type.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_hooks(
    ///     _path_::TypeHooks::EMPTY
    ///         .with_default::<Self>()
    ///         .with_marshal_text::<Self>()
    /// )
    /// ```
    ///
    /// Each call is spanned on its flag, so a missing trait implementation
    /// points at the attribute.
    pub fn with_hooks_expression(&self) -> TokenStream {
        let hooks = &self.attrs.hooks;
        let flags: [(Option<Span>, &str); 7] = [
            (hooks.default, "with_default"),
            (hooks.marshal_value, "with_marshal_value"),
            (hooks.unmarshal_value, "with_unmarshal_value"),
            (hooks.serialize, "with_serialize"),
            (hooks.deserialize, "with_deserialize"),
            (hooks.marshal_text, "with_marshal_text"),
            (hooks.unmarshal_text, "with_unmarshal_text"),
        ];

        let calls = flags
            .into_iter()
            .filter_map(|(span, name)| {
                let span = span?;
                let method = Ident::new(name, span);
                Some(quote_spanned! { span => .#method::<Self>() })
            })
            .collect::<Vec<TokenStream>>();

        if calls.is_empty() {
            return crate::utils::empty();
        }

        let type_hooks_ = crate::path::type_hooks_(&self.cty_reflect_path);
        quote! {
            .with_hooks(
                #type_hooks_::EMPTY
                    #(#calls)*
            )
        }
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// ## Type Itself
    ///
    /// If it has lifetime params, it needs to be labeled with `'static`.
    /// If it has type params, it needs to be labeled with `Any + Send + Sync`.
    ///
    /// ## Field Types
    ///
    /// `NamedField::new::<T>` requires `T: Typed`, and `Struct` hands the
    /// fields out as `&dyn Reflect`. Field types mentioning a type param
    /// therefore require `Reflect + Typed`, for `Typed`, `Reflect` and
    /// `Struct` alike. Opaque types have no visible fields and pass
    /// `add_field_bounds = false`.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics;

        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        if add_field_bounds {
            let predicates = self
                .field_type_predicates()
                .collect::<Punctuated<TokenStream, Token![,]>>();
            generic_where_clause.extend(quote! { #predicates });
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn field_type_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
            token_stream.into_iter().any(|token_tree| match token_tree {
                proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
                proc_macro2::TokenTree::Group(group) => {
                    is_any_ident_in_token_stream(idents, group.stream())
                }
                _ => false,
            })
        }

        let type_param_idents = self
            .generics
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<Ident>>();

        let reflect_ = crate::path::reflect_(&self.cty_reflect_path);
        let typed_ = crate::path::typed_(&self.cty_reflect_path);

        self.active_types.iter().filter_map(move |ty| {
            if !type_param_idents.is_empty()
                && is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream())
            {
                Some(quote! { #ty: #reflect_ + #typed_ })
            } else {
                None
            }
        })
    }

    /// For Opaque Type
    pub fn to_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.cty_reflect_path);
        let type_info_ = crate::path::type_info_(&self.cty_reflect_path);
        let with_hooks = self.with_hooks_expression();

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
                    #with_hooks
            )
        }
    }
}
