use cty_value::Value;

use crate::Reflect;
use crate::hooks::{FromType, HookError, mismatch};

// -----------------------------------------------------------------------------
// Traits

/// Converts a type directly into a [`Value`].
pub trait MarshalValue {
    fn marshal_value(&self) -> Result<Value, HookError>;
}

/// Fills a type directly from a [`Value`].
///
/// Called for every value, including null.
pub trait UnmarshalValue {
    fn unmarshal_value(&mut self, value: &Value) -> Result<(), HookError>;
}

// -----------------------------------------------------------------------------
// Containers

/// Type-erased [`MarshalValue`].
#[derive(Clone, Copy, Debug)]
pub struct ReflectMarshalValue {
    func: fn(&dyn Reflect) -> Result<Value, HookError>,
}

impl ReflectMarshalValue {
    #[inline]
    pub fn marshal_value(&self, value: &dyn Reflect) -> Result<Value, HookError> {
        (self.func)(value)
    }
}

impl<T: MarshalValue + Reflect> FromType<T> for ReflectMarshalValue {
    fn from_type() -> Self {
        Self {
            func: |value| match value.downcast_ref::<T>() {
                Some(concrete) => concrete.marshal_value(),
                None => Err(mismatch::<T>(value)),
            },
        }
    }
}

/// Type-erased [`UnmarshalValue`].
#[derive(Clone, Copy, Debug)]
pub struct ReflectUnmarshalValue {
    func: fn(&mut dyn Reflect, &Value) -> Result<(), HookError>,
}

impl ReflectUnmarshalValue {
    #[inline]
    pub fn unmarshal_value(&self, target: &mut dyn Reflect, value: &Value) -> Result<(), HookError> {
        (self.func)(target, value)
    }
}

impl<T: UnmarshalValue + Reflect> FromType<T> for ReflectUnmarshalValue {
    fn from_type() -> Self {
        Self {
            func: |target, value| {
                match target.downcast_mut::<T>() {
                    Some(concrete) => concrete.unmarshal_value(value),
                    None => Err(mismatch::<T>(target)),
                }
            },
        }
    }
}
