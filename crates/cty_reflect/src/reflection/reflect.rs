use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection.
///
/// A `Reflect` value can report its static [`TypeInfo`](crate::info::TypeInfo)
/// and be viewed through one of the per-kind access traits in [`ops`](crate::ops).
/// The conversion engine only ever works on `&dyn Reflect` / `&mut dyn Reflect`.
///
/// # Implementation
///
/// Use [the derive macro](crate::derive::Reflect) for structs. Built-in
/// implementations cover scalars, `String`, sequences, maps, `Option`,
/// `Box` and [`Native`](crate::Native).
///
/// # Boxed values
///
/// `Box<dyn Reflect>` implements `Reflect` itself, as an
/// [`Interface`](crate::ops::Interface). Method calls on the box reach the
/// box; dereference it to reach the contained value:
///
/// ```
/// use cty_reflect::Reflect;
/// use cty_reflect::info::ReflectKind;
/// use core::any::TypeId;
///
/// let x: Box<dyn Reflect> = Box::new(32_i32);
///
/// assert_eq!(x.reflect_kind(), ReflectKind::Interface);
/// assert!((*x).ty_id() == TypeId::of::<i32>());
/// assert_eq!((*x).reflect_kind(), ReflectKind::Scalar);
/// ```
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Return the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value` if it has the same type.
    ///
    /// On mismatch the value is returned unchanged.
    ///
    /// ```
    /// use cty_reflect::Reflect;
    ///
    /// let mut x = 1_u8;
    /// assert!(x.set(Box::new(2_u8)).is_ok());
    /// assert!(x.set(Box::new("no")).is_err());
    /// assert_eq!(x, 2);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [kind](ReflectKind) of the type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to `Box<T>`.
    ///
    /// Returns the original box if the underlying value is not a `T`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            // The type was checked above.
            any.downcast::<T>().map_err(|_| unreachable!())
        } else {
            Err(self)
        }
    }

    /// Downcasts the boxed value and moves it out of the box.
    ///
    /// ```
    /// use cty_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = Box::new(String::from("a"));
    /// assert_eq!(x.take::<String>().unwrap(), "a");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_path())
    }
}

// -----------------------------------------------------------------------------
// Cast Function Macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`
/// for a type whose kind is fixed.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: Box<dyn $crate::Reflect>,
        ) -> Result<(), Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
