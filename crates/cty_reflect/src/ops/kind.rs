use crate::info::ReflectKind;
use crate::ops::{Array, Interface, List, Map, Pointer, Scalar, Struct};
use crate::{Native, Reflect};

macro_rules! impl_kind_views {
    ($name:ident) => {
        impl<'a> $name<'a> {
            /// Returns the kind of the viewed value.
            pub const fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::List(_) => ReflectKind::List,
                    Self::Array(_) => ReflectKind::Array,
                    Self::Map(_) => ReflectKind::Map,
                    Self::Pointer(_) => ReflectKind::Pointer,
                    Self::Interface(_) => ReflectKind::Interface,
                    Self::Dynamic(_) => ReflectKind::Dynamic,
                    Self::Scalar(_) => ReflectKind::Scalar,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }
        }
    };
}

/// An immutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Interface(&'a dyn Interface),
    Dynamic(&'a Native),
    Scalar(&'a dyn Scalar),
    Opaque(&'a dyn Reflect),
}

/// A mutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Interface(&'a mut dyn Interface),
    Dynamic(&'a mut Native),
    Scalar(&'a mut dyn Scalar),
    Opaque(&'a mut dyn Reflect),
}

impl_kind_views!(ReflectRef);
impl_kind_views!(ReflectMut);
