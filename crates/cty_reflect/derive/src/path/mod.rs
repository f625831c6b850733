//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `cty_reflect` layout is modified.
//!
//! The only special case is the path of `cty_reflect` itself,
//! see the [`cty_reflect`] function.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `cty_reflect` crate.
///
/// 1. For crates that depend on `cty_reflect`, `::cty_reflect` is returned.
/// 2. For crates that depend on `cty_core`, `::cty_core::reflect` is returned.
/// 3. For other situations, `::cty_reflect` is returned, which is also what
///    `cty_reflect` itself uses through `extern crate self as cty_reflect`.
///
/// This reads the builder's `Cargo.toml`, so the path is obtained once per
/// derive and passed around.
pub(crate) fn cty_reflect() -> syn::Path {
    cty_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("cty_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_utils_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn typed_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn type_hooks_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::hooks::TypeHooks
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(cty_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #cty_reflect_path::impls::GenericTypeInfoCell
    }
}
