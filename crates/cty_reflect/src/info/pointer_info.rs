use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, TypeInfo, Typed, impl_hooks_fn, impl_type_fn};
use crate::ops::{Interface, Pointer};

// -----------------------------------------------------------------------------
// PointerInfo

/// Information for a single-value indirection: `Option<T>` or `Box<T>`.
///
/// A nullable pointer may be empty. Walking into an empty pointer
/// allocates the pointee's default value.
#[derive(Clone, Copy, Debug)]
pub struct PointerInfo {
    ty: TypeIdent,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
    hooks: TypeHooks,
}

impl PointerInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub fn new<TPointer: Pointer, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: TypeIdent::of::<TPointer>(),
            pointee_info: TPointee::type_info,
            nullable,
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Returns `true` if the pointer can be empty.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}

// -----------------------------------------------------------------------------
// InterfaceInfo

/// Information for a type-erased value, `Box<dyn Reflect>`.
///
/// The contained type is only known at runtime.
#[derive(Clone, Copy, Debug)]
pub struct InterfaceInfo {
    ty: TypeIdent,
    hooks: TypeHooks,
}

impl InterfaceInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`InterfaceInfo`].
    #[inline]
    pub fn new<T: Interface>() -> Self {
        Self {
            ty: TypeIdent::of::<T>(),
            hooks: TypeHooks::EMPTY,
        }
    }
}
