//! Fully qualified paths of `core` items, safe to emit in any crate.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! full_path {
    ($($name:ident => $($seg:ident)::+,)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!(:: $($seg)::+).to_tokens(tokens);
            }
        }
    )*};
}

full_path! {
    AnyFP => core::any::Any,
    SendFP => core::marker::Send,
    SyncFP => core::marker::Sync,
    OptionFP => core::option::Option,
    ResultFP => core::result::Result,
}
