use alloc::format;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserializer, Serialize};

use crate::Reflect;
use crate::hooks::FromType;

// -----------------------------------------------------------------------------
// ReflectSerialize

/// A container providing `serde` serialization for a reflected type.
///
/// The conversion engine serializes such a type to JSON and turns the JSON
/// into a value, see [`convert`](crate::convert).
///
/// # Examples
///
/// ```
/// use cty_reflect::{Reflect, derive::Reflect, info::Typed};
/// use serde::Serialize;
///
/// #[derive(Reflect, Serialize)]
/// #[reflect(opaque, serialize)]
/// pub struct Version(u32, u32);
///
/// let hook = Version::type_info().hooks().serialize().unwrap();
/// let json = serde_json::to_string(hook.get(&Version(1, 2)).unwrap()).unwrap();
/// assert_eq!(json, "[1,2]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ReflectSerialize {
    func: fn(&dyn Reflect) -> Option<&dyn erased_serde::Serialize>,
}

impl ReflectSerialize {
    /// Returns `value` as a serializable trait object.
    ///
    /// Returns `None` if `value` is not of the type this container was built for.
    #[inline(always)]
    pub fn get<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn erased_serde::Serialize> {
        (self.func)(value)
    }
}

impl<T: Serialize + Reflect> FromType<T> for ReflectSerialize {
    fn from_type() -> Self {
        Self {
            func: |value| {
                value
                    .downcast_ref::<T>()
                    .map(|concrete| concrete as &dyn erased_serde::Serialize)
            },
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectDeserialize

/// A container providing `serde` deserialization for a reflected type.
///
/// The value is deserialized as a whole and then moved into the target,
/// replacing its previous content.
///
/// # Examples
///
/// ```
/// use cty_reflect::{Reflect, derive::Reflect, info::Typed};
/// use serde::Deserialize;
///
/// #[derive(Reflect, Deserialize, Default, Debug, PartialEq)]
/// #[reflect(opaque, default, deserialize)]
/// pub struct Version(u32, u32);
///
/// let hook = Version::type_info().hooks().deserialize().unwrap();
///
/// let mut version = Version::default();
/// hook.deserialize(&mut version, serde_json::json!([1, 2])).unwrap();
/// assert_eq!(version, Version(1, 2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ReflectDeserialize {
    func: for<'de> fn(
        &mut dyn Reflect,
        &mut dyn erased_serde::Deserializer<'de>,
    ) -> Result<(), erased_serde::Error>,
}

impl ReflectDeserialize {
    /// Deserializes into `target`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        &self,
        target: &mut dyn Reflect,
        deserializer: D,
    ) -> Result<(), D::Error> {
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        (self.func)(target, &mut erased).map_err(D::Error::custom)
    }
}

impl<T: DeserializeOwned + Reflect> FromType<T> for ReflectDeserialize {
    fn from_type() -> Self {
        Self {
            func: |target, deserializer| match target.downcast_mut::<T>() {
                Some(concrete) => {
                    *concrete = erased_serde::deserialize::<T>(deserializer)?;
                    Ok(())
                }
                None => Err(erased_serde::Error::custom(format!(
                    "deserializer of `{}` called with `{}`",
                    core::any::type_name::<T>(),
                    target.reflect_type_info().type_path(),
                ))),
            },
        }
    }
}
