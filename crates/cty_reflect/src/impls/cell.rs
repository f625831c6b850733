//! Containers for static storage of type information.
//!
//! For non-generic types, [`NonGenericTypeInfoCell`] wraps a [`OnceLock`].
//!
//! If the type is generic, the `static CELL` inside `type_info` is shared
//! by every instantiation. [`GenericTypeInfoCell`] therefore stores one
//! leaked [`TypeInfo`] per [`TypeId`] in a [`TypeIdMap`] behind a [`RwLock`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use cty_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use cty_reflect::derive::Reflect;
/// use cty_reflect::hooks::TypeHooks;
/// use cty_reflect::impls::NonGenericTypeInfoCell;
/// use cty_reflect::info::{OpaqueInfo, TypeInfo, Typed};
///
/// #[derive(Reflect)]
/// #[reflect(opaque, typed = false)]
/// pub struct Token(u64);
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Token::type_info().type_path().ends_with("Token"));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`], creating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use cty_reflect::derive::Reflect;
/// use cty_reflect::impls::GenericTypeInfoCell;
/// use cty_reflect::info::{OpaqueInfo, TypeInfo, Typed};
///
/// #[derive(Reflect)]
/// #[reflect(opaque, typed = false)]
/// pub struct Tagged<T: Send + Sync + 'static>(T);
///
/// impl<T: Send + Sync + 'static> Typed for Tagged<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// let a = <Tagged<u8>>::type_info();
/// let b = <Tagged<i8>>::type_info();
/// assert!(a.type_is::<Tagged<u8>>());
/// assert!(b.type_is::<Tagged<i8>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the [`TypeInfo`] stored for `G`, creating it with `f` on
    /// first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            // `f` may recurse into other cells, so it runs without the lock.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
