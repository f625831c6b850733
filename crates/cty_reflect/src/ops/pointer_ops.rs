use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// An owning indirection to a single value of a known type.
///
/// Implemented by `Option<T>`, which can be empty, and by `Box<T>`,
/// which never is.
///
/// ```
/// use cty_reflect::ops::Pointer;
///
/// let mut slot: Option<u8> = None;
/// let ptr: &mut dyn Pointer = &mut slot;
///
/// assert!(ptr.get().is_none());
/// ptr.set_pointee(Box::new(4_u8)).unwrap();
/// assert!(ptr.set_null());
///
/// assert_eq!(slot, None);
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` if empty.
    fn get(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` if empty.
    fn get_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Points to `value`, dropping the previous pointee.
    ///
    /// Returns the value unchanged if it is not of the pointee type.
    fn set_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Empties the pointer. Returns `false` if the pointer cannot be empty.
    fn set_null(&mut self) -> bool;
}

// -----------------------------------------------------------------------------
// Interface

/// A value whose concrete type is only known at runtime.
pub trait Interface: Reflect {
    /// Returns the contained value.
    fn inner(&self) -> &dyn Reflect;

    /// Returns the contained value mutably.
    fn inner_mut(&mut self) -> &mut dyn Reflect;

    /// Replaces the contained value, of any type.
    fn replace(&mut self, value: Box<dyn Reflect>);
}
