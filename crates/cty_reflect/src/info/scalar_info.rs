use core::fmt;

use crate::hooks::TypeHooks;
use crate::info::{TypeIdent, impl_hooks_fn, impl_type_fn};
use crate::ops::Scalar;

/// The family of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`
    Bool,
    /// `i8` to `i128` and `isize`
    Int,
    /// `u8` to `u128` and `usize`
    Uint,
    /// `f32` and `f64`
    Float,
    /// `char`
    Char,
    /// `String` and `&'static str`
    String,
}

impl ScalarKind {
    /// Returns `true` for the integer and float families.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::Uint | ScalarKind::Float)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "signed integer",
            ScalarKind::Uint => "unsigned integer",
            ScalarKind::Float => "float",
            ScalarKind::Char => "char",
            ScalarKind::String => "string",
        };
        f.write_str(name)
    }
}

/// Information for a scalar type.
#[derive(Clone, Copy, Debug)]
pub struct ScalarInfo {
    ty: TypeIdent,
    kind: ScalarKind,
    hooks: TypeHooks,
}

impl ScalarInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: Scalar>(kind: ScalarKind) -> Self {
        Self {
            ty: TypeIdent::of::<T>(),
            kind,
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the scalar family.
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}
