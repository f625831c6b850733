use core::any::{Any, TypeId};
use core::fmt;

/// The identity of a Rust type: its [`TypeId`] and its path.
///
/// ```
/// use cty_reflect::info::TypeIdent;
///
/// let ty = TypeIdent::of::<Vec<u8>>();
/// assert!(ty.is::<Vec<u8>>());
/// assert!(ty.path().ends_with("Vec<u8>"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TypeIdent {
    id: TypeId,
    path: &'static str,
}

impl TypeIdent {
    /// Creates the identity of `T`.
    #[inline]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, as given by [`core::any::type_name`].
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeIdent {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdent {}

impl fmt::Display for TypeIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// Accessor macros

/// Implements `ty`, `type_id`, `type_is` and `type_path` over a
/// [`TypeIdent`] field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying [`TypeIdent`](crate::info::TypeIdent).
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::TypeIdent {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.$field.path()
        }
    };
}

/// Implements `hooks` and `with_hooks` over a
/// [`TypeHooks`](crate::hooks::TypeHooks) field.
macro_rules! impl_hooks_fn {
    ($field:ident) => {
        /// Returns the conversion hooks of this type.
        #[inline]
        pub const fn hooks(&self) -> &$crate::hooks::TypeHooks {
            &self.$field
        }

        /// Replaces the conversion hooks of this type.
        #[inline]
        pub fn with_hooks(mut self, hooks: $crate::hooks::TypeHooks) -> Self {
            self.$field = hooks;
            self
        }
    };
}

pub(crate) use impl_hooks_fn;
pub(crate) use impl_type_fn;
