use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
///
/// `reflect_kind_token` is the variant shared by `ReflectKind`,
/// `ReflectRef` and `ReflectMut`, e.g. `Struct`.
///
/// For param `add_field_bounds`, see [`ReflectMeta::split_generics`].
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    add_field_bounds: bool,
) -> TokenStream {
    use crate::path::fp::ResultFP;

    let cty_reflect_path = meta.cty_reflect_path();

    let reflect_ = crate::path::reflect_(cty_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(cty_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(cty_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(cty_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(cty_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(add_field_bounds);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                __value__: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(__value__)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }
        }
    }
}
