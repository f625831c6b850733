use core::fmt;

use thiserror::Error;

use crate::Reflect;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed scalar, the common currency of [`Scalar`] reads and writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float32(f32),
    Float64(f64),
    Char(char),
    Str(&'a str),
}

impl ScalarRef<'_> {
    /// Returns the scalar family of this value.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            ScalarRef::Bool(_) => ScalarKind::Bool,
            ScalarRef::Int(_) => ScalarKind::Int,
            ScalarRef::Uint(_) => ScalarKind::Uint,
            ScalarRef::Float32(_) | ScalarRef::Float64(_) => ScalarKind::Float,
            ScalarRef::Char(_) => ScalarKind::Char,
            ScalarRef::Str(_) => ScalarKind::String,
        }
    }

    /// Returns `true` for `false`, zero and the empty string.
    pub fn is_zero(&self) -> bool {
        match *self {
            ScalarRef::Bool(value) => !value,
            ScalarRef::Int(value) => value == 0,
            ScalarRef::Uint(value) => value == 0,
            ScalarRef::Float32(value) => value == 0.0,
            ScalarRef::Float64(value) => value == 0.0,
            ScalarRef::Char(value) => value == '\0',
            ScalarRef::Str(value) => value.is_empty(),
        }
    }
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarRef::Bool(value) => fmt::Display::fmt(value, f),
            ScalarRef::Int(value) => fmt::Display::fmt(value, f),
            ScalarRef::Uint(value) => fmt::Display::fmt(value, f),
            ScalarRef::Float32(value) => fmt::Display::fmt(value, f),
            ScalarRef::Float64(value) => fmt::Display::fmt(value, f),
            ScalarRef::Char(value) => fmt::Debug::fmt(value, f),
            ScalarRef::Str(value) => fmt::Debug::fmt(value, f),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarError

/// Returned by [`Scalar::set_scalar`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// The value does not fit the target type.
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
    /// The value belongs to another scalar family.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: ScalarKind,
        found: ScalarKind,
    },
    /// The target cannot be written.
    #[error("{0} is read-only")]
    ReadOnly(&'static str),
}

// -----------------------------------------------------------------------------
// Scalar

/// A primitive value.
///
/// ```
/// use cty_reflect::ops::{Scalar, ScalarError, ScalarRef};
///
/// let mut x = 0_u8;
/// x.set_scalar(ScalarRef::Uint(200)).unwrap();
/// assert_eq!(x.scalar(), ScalarRef::Uint(200));
///
/// assert!(matches!(x.set_scalar(ScalarRef::Uint(300)), Err(ScalarError::OutOfRange(_))));
/// assert_eq!(x, 200);
/// ```
pub trait Scalar: Reflect {
    /// Reads the value.
    fn scalar(&self) -> ScalarRef<'_>;

    /// Writes the value.
    ///
    /// The value must belong to the same family as the target. Numbers
    /// must fit the target width exactly; `f64` narrows to `f32`.
    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError>;

    /// Resets the value to zero, `false` or the empty string.
    fn reset(&mut self);
}
