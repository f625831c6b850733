use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, TypeInfo, Typed, impl_hooks_fn, impl_type_fn};
use crate::ops::Array;

/// Information for a fixed-size sequence such as `[T; N]`.
#[derive(Clone, Copy, Debug)]
pub struct ArrayInfo {
    ty: TypeIdent,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
    hooks: TypeHooks,
}

impl ArrayInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`ArrayInfo`] for an array of `capacity` items.
    #[inline]
    pub fn new<TArray: Array, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: TypeIdent::of::<TArray>(),
            item_info: TItem::type_info,
            capacity,
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the fixed number of items.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
