use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by
/// every built-in [`Reflect`](crate::Reflect) implementation.
///
/// The information is created once per type, usually through
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) or
/// [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell), and lives
/// for the rest of the process.
///
/// ```
/// use cty_reflect::info::{ScalarKind, Typed};
///
/// let info = <Vec<u16> as Typed>::type_info().as_list().unwrap();
/// let item = info.item_info().as_scalar().unwrap();
/// assert_eq!(item.kind(), ScalarKind::Uint);
/// ```
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], a supertrait of [`Reflect`](crate::Reflect).
///
/// Implemented for every [`Typed`] type, do not implement it manually.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
