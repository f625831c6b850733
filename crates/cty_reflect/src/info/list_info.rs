use core::any::TypeId;

use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, TypeInfo, Typed, impl_hooks_fn, impl_type_fn};
use crate::ops::List;

/// Information for a resizable sequence such as `Vec<T>`.
#[derive(Clone, Copy, Debug)]
pub struct ListInfo {
    ty: TypeIdent,
    item_ty_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
    hooks: TypeHooks,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub fn new<TList: List, TItem: Typed>() -> Self {
        Self {
            ty: TypeIdent::of::<TList>(),
            item_ty_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the `TypeId` of the items.
    #[inline]
    pub const fn item_ty_id(&self) -> TypeId {
        self.item_ty_id
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
