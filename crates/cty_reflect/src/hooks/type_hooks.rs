use crate::Reflect;
use crate::hooks::{
    FromType, MarshalText, MarshalValue, ReflectDefault, ReflectDeserialize,
    ReflectMarshalText, ReflectMarshalValue, ReflectSerialize, ReflectUnmarshalText,
    ReflectUnmarshalValue, UnmarshalText, UnmarshalValue,
};

/// The hooks a type opted into.
///
/// Built with a chain of `with_*` calls, each taking the concrete type:
///
/// ```
/// use cty_reflect::hooks::TypeHooks;
///
/// let hooks = TypeHooks::EMPTY.with_default::<String>();
///
/// assert!(hooks.default_value().is_some());
/// assert!(hooks.marshal_text().is_none());
/// assert!(!hooks.has_conversion());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TypeHooks {
    default: Option<ReflectDefault>,
    marshal_value: Option<ReflectMarshalValue>,
    unmarshal_value: Option<ReflectUnmarshalValue>,
    serialize: Option<ReflectSerialize>,
    deserialize: Option<ReflectDeserialize>,
    marshal_text: Option<ReflectMarshalText>,
    unmarshal_text: Option<ReflectUnmarshalText>,
}

impl TypeHooks {
    /// A table without any hook.
    pub const EMPTY: Self = Self {
        default: None,
        marshal_value: None,
        unmarshal_value: None,
        serialize: None,
        deserialize: None,
        marshal_text: None,
        unmarshal_text: None,
    };

    #[inline]
    pub fn with_default<T: Default + Reflect>(mut self) -> Self {
        self.default = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_marshal_value<T: MarshalValue + Reflect>(mut self) -> Self {
        self.marshal_value = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_unmarshal_value<T: UnmarshalValue + Reflect>(mut self) -> Self {
        self.unmarshal_value = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_serialize<T: serde::Serialize + Reflect>(mut self) -> Self {
        self.serialize = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_deserialize<T: serde::de::DeserializeOwned + Reflect>(mut self) -> Self {
        self.deserialize = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_marshal_text<T: MarshalText + Reflect>(mut self) -> Self {
        self.marshal_text = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub fn with_unmarshal_text<T: UnmarshalText + Reflect>(mut self) -> Self {
        self.unmarshal_text = Some(FromType::<T>::from_type());
        self
    }

    #[inline]
    pub const fn default_value(&self) -> Option<&ReflectDefault> {
        self.default.as_ref()
    }

    #[inline]
    pub const fn marshal_value(&self) -> Option<&ReflectMarshalValue> {
        self.marshal_value.as_ref()
    }

    #[inline]
    pub const fn unmarshal_value(&self) -> Option<&ReflectUnmarshalValue> {
        self.unmarshal_value.as_ref()
    }

    #[inline]
    pub const fn serialize(&self) -> Option<&ReflectSerialize> {
        self.serialize.as_ref()
    }

    #[inline]
    pub const fn deserialize(&self) -> Option<&ReflectDeserialize> {
        self.deserialize.as_ref()
    }

    #[inline]
    pub const fn marshal_text(&self) -> Option<&ReflectMarshalText> {
        self.marshal_text.as_ref()
    }

    #[inline]
    pub const fn unmarshal_text(&self) -> Option<&ReflectUnmarshalText> {
        self.unmarshal_text.as_ref()
    }

    /// Returns `true` if any marshaling hook is set.
    pub const fn has_marshal_hook(&self) -> bool {
        self.marshal_value.is_some() || self.serialize.is_some() || self.marshal_text.is_some()
    }

    /// Returns `true` if any unmarshaling hook is set.
    pub const fn has_unmarshal_hook(&self) -> bool {
        self.unmarshal_value.is_some() || self.deserialize.is_some() || self.unmarshal_text.is_some()
    }

    /// Returns `true` if any conversion hook is set, in either direction.
    #[inline]
    pub const fn has_conversion(&self) -> bool {
        self.has_marshal_hook() || self.has_unmarshal_hook()
    }
}

impl Default for TypeHooks {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
