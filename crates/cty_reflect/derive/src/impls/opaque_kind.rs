use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implement reflect for opaque type.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    // trait: Typed
    let typed_trait_tokens = if meta.attrs().impl_switchs.impl_typed {
        impl_trait_typed(meta, meta.to_info_tokens(), false)
    } else {
        crate::utils::empty()
    };

    // trait: Reflect
    let reflect_trait_tokens = if meta.attrs().impl_switchs.impl_reflect {
        impl_trait_reflect(meta, quote!(Opaque), false)
    } else {
        crate::utils::empty()
    };

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
