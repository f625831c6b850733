use core::any::TypeId;

use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, TypeInfo, Typed, impl_hooks_fn, impl_type_fn};
use crate::ops::Map;

/// Information for a keyed collection such as `HashMap<K, V>`.
#[derive(Clone, Copy, Debug)]
pub struct MapInfo {
    ty: TypeIdent,
    key_ty_id: TypeId,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
    hooks: TypeHooks,
}

impl MapInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: Map, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: TypeIdent::of::<TMap>(),
            key_ty_id: TypeId::of::<TKey>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the `TypeId` of the keys.
    #[inline]
    pub const fn key_ty_id(&self) -> TypeId {
        self.key_ty_id
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
