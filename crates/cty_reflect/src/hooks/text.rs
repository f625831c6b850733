use alloc::string::String;

use crate::Reflect;
use crate::hooks::{FromType, HookError, mismatch};

// -----------------------------------------------------------------------------
// Traits

/// Converts a type into text, marshaled as a string value.
pub trait MarshalText {
    fn marshal_text(&self) -> Result<String, HookError>;
}

/// Parses a type from text.
///
/// Only string values are handed to this hook. Decoding null skips it and
/// resets the type through its default value instead.
pub trait UnmarshalText {
    fn unmarshal_text(&mut self, text: &str) -> Result<(), HookError>;
}

// -----------------------------------------------------------------------------
// Containers

/// Type-erased [`MarshalText`].
#[derive(Clone, Copy, Debug)]
pub struct ReflectMarshalText {
    func: fn(&dyn Reflect) -> Result<String, HookError>,
}

impl ReflectMarshalText {
    #[inline]
    pub fn marshal_text(&self, value: &dyn Reflect) -> Result<String, HookError> {
        (self.func)(value)
    }
}

impl<T: MarshalText + Reflect> FromType<T> for ReflectMarshalText {
    fn from_type() -> Self {
        Self {
            func: |value| match value.downcast_ref::<T>() {
                Some(concrete) => concrete.marshal_text(),
                None => Err(mismatch::<T>(value)),
            },
        }
    }
}

/// Type-erased [`UnmarshalText`].
#[derive(Clone, Copy, Debug)]
pub struct ReflectUnmarshalText {
    func: fn(&mut dyn Reflect, &str) -> Result<(), HookError>,
}

impl ReflectUnmarshalText {
    #[inline]
    pub fn unmarshal_text(&self, target: &mut dyn Reflect, text: &str) -> Result<(), HookError> {
        (self.func)(target, text)
    }
}

impl<T: UnmarshalText + Reflect> FromType<T> for ReflectUnmarshalText {
    fn from_type() -> Self {
        Self {
            func: |target, text| {
                match target.downcast_mut::<T>() {
                    Some(concrete) => concrete.unmarshal_text(text),
                    None => Err(mismatch::<T>(target)),
                }
            },
        }
    }
}
