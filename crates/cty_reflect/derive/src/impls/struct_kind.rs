use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: Typed
    let typed_trait_tokens = if meta.attrs().impl_switchs.impl_typed {
        impl_trait_typed(meta, info.to_info_tokens(), true)
    } else {
        crate::utils::empty()
    };

    // trait: Reflect
    let reflect_trait_tokens = if meta.attrs().impl_switchs.impl_reflect {
        impl_trait_reflect(meta, quote!(Struct), true)
    } else {
        crate::utils::empty()
    };

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();

    let cty_reflect_path = meta.cty_reflect_path();
    let struct_ = crate::path::struct_(cty_reflect_path);
    let reflect_ = crate::path::reflect_(cty_reflect_path);

    let field_idents = info
        .fields()
        .iter()
        .map(|field| &field.data.ident)
        .collect::<Vec<_>>();
    let field_indices = info
        .fields()
        .iter()
        .map(|field| field.declaration_index)
        .collect::<Vec<usize>>();
    let field_count = field_indices.len();

    // `quote!` binds every name inside a repetition, so the unit struct
    // path is rendered up front.
    let some_ = quote!(#OptionFP::Some);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_indices => #some_(&self.#field_idents),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #some_(&mut self.#field_idents),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
