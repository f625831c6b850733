use alloc::boxed::Box;

use crate::Reflect;
use crate::hooks::FromType;

/// Creates default values of a reflected type.
///
/// Used to allocate list items, map values and pointees during decoding.
#[derive(Clone, Copy, Debug)]
pub struct ReflectDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl ReflectDefault {
    /// Calls `T::default()` and boxes the result.
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Reflect> FromType<T> for ReflectDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}
