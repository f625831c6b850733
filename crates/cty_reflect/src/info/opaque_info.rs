use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, impl_hooks_fn, impl_type_fn};
use crate::{Native, Reflect};

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Information for a type without visible structure.
///
/// Opaque types can only be converted through their hooks.
#[derive(Clone, Copy, Debug)]
pub struct OpaqueInfo {
    ty: TypeIdent,
    hooks: TypeHooks,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Reflect>() -> Self {
        Self {
            ty: TypeIdent::of::<T>(),
            hooks: TypeHooks::EMPTY,
        }
    }
}

// -----------------------------------------------------------------------------
// DynamicInfo

/// Information for [`Native`], the target accepting any value.
#[derive(Clone, Copy, Debug)]
pub struct DynamicInfo {
    ty: TypeIdent,
    hooks: TypeHooks,
}

impl DynamicInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates the information of [`Native`].
    #[inline]
    pub fn new() -> Self {
        Self {
            ty: TypeIdent::of::<Native>(),
            hooks: TypeHooks::EMPTY,
        }
    }
}
