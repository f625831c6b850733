use core::any::TypeId;
use core::fmt;

use thiserror::Error;

use crate::hooks::TypeHooks;
use crate::info::{ArrayInfo, DynamicInfo, InterfaceInfo, ListInfo, MapInfo};
use crate::info::{OpaqueInfo, PointerInfo, ScalarInfo, StructInfo, TypeIdent};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a reflected type, see [`TypeInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Map,
    Pointer,
    Interface,
    Dynamic,
    Scalar,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectKind::Struct => "struct",
            ReflectKind::List => "list",
            ReflectKind::Array => "array",
            ReflectKind::Map => "map",
            ReflectKind::Pointer => "pointer",
            ReflectKind::Interface => "interface",
            ReflectKind::Dynamic => "dynamic",
            ReflectKind::Scalar => "scalar",
            ReflectKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`] on a kind mismatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Interface(InterfaceInfo),
    Dynamic(DynamicInfo),
    Scalar(ScalarInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the kind-specific information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! dispatch {
    ($self:ident, $info:ident => $expr:expr) => {
        match $self {
            Self::Struct($info) => $expr,
            Self::List($info) => $expr,
            Self::Array($info) => $expr,
            Self::Map($info) => $expr,
            Self::Pointer($info) => $expr,
            Self::Interface($info) => $expr,
            Self::Dynamic($info) => $expr,
            Self::Scalar($info) => $expr,
            Self::Opaque($info) => $expr,
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_interface: Interface => InterfaceInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the kind of this type.
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

    /// Returns the underlying [`TypeIdent`].
    pub const fn ty(&self) -> &TypeIdent {
        dispatch!(self, info => info.ty())
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the conversion hooks of this type.
    pub const fn hooks(&self) -> &TypeHooks {
        dispatch!(self, info => info.hooks())
    }
}
