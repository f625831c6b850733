use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::Reflect;
use crate::hooks::TypeHooks;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{Scalar, ScalarError, ScalarRef};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Shared

macro_rules! impl_scalar_reflect {
    ($ty:ty, $kind:ident) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Scalar(
                        ScalarInfo::new::<Self>(ScalarKind::$kind)
                            .with_hooks(TypeHooks::EMPTY.with_default::<Self>()),
                    )
                })
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Scalar);
        }
    };
}

#[inline]
fn mismatch(expected: ScalarKind, found: &ScalarRef<'_>) -> ScalarError {
    ScalarError::Mismatch {
        expected,
        found: found.kind(),
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($kind:ident, $variant:ident, $wide:ty: $($ty:ty),+ $(,)?) => {$(
        impl_scalar_reflect!($ty, $kind);

        impl Scalar for $ty {
            #[inline]
            fn scalar(&self) -> ScalarRef<'_> {
                ScalarRef::$variant(*self as $wide)
            }

            fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
                const OUT_OF_RANGE: ScalarError = ScalarError::OutOfRange(stringify!($ty));
                *self = match value {
                    ScalarRef::Int(value) => <$ty>::try_from(value).map_err(|_| OUT_OF_RANGE)?,
                    ScalarRef::Uint(value) => <$ty>::try_from(value).map_err(|_| OUT_OF_RANGE)?,
                    other => return Err(mismatch(ScalarKind::$kind, &other)),
                };
                Ok(())
            }

            #[inline]
            fn reset(&mut self) {
                *self = 0;
            }
        }
    )+};
}

impl_integer!(Int, Int, i128: i8, i16, i32, i64, i128, isize);
impl_integer!(Uint, Uint, u128: u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_float {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl_scalar_reflect!($ty, Float);

        impl Scalar for $ty {
            #[inline]
            fn scalar(&self) -> ScalarRef<'_> {
                ScalarRef::$variant(*self)
            }

            fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
                let narrowed = match value {
                    ScalarRef::Float32(value) => value as $ty,
                    ScalarRef::Float64(value) => {
                        let narrowed = value as $ty;
                        if value.is_finite() && !narrowed.is_finite() {
                            return Err(ScalarError::OutOfRange(stringify!($ty)));
                        }
                        narrowed
                    }
                    other => return Err(mismatch(ScalarKind::Float, &other)),
                };
                *self = narrowed;
                Ok(())
            }

            #[inline]
            fn reset(&mut self) {
                *self = 0.0;
            }
        }
    )+};
}

impl_float!(f32 => Float32, f64 => Float64);

// -----------------------------------------------------------------------------
// bool

impl_scalar_reflect!(bool, Bool);

impl Scalar for bool {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Bool(*self)
    }

    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Bool(value) => {
                *self = value;
                Ok(())
            }
            other => Err(mismatch(ScalarKind::Bool, &other)),
        }
    }

    #[inline]
    fn reset(&mut self) {
        *self = false;
    }
}

// -----------------------------------------------------------------------------
// char

impl_scalar_reflect!(char, Char);

impl Scalar for char {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Char(*self)
    }

    /// Accepts a `char`, or a string of exactly one character.
    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        *self = match value {
            ScalarRef::Char(value) => value,
            ScalarRef::Str(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(value), None) => value,
                    _ => return Err(ScalarError::OutOfRange("char")),
                }
            }
            other => return Err(mismatch(ScalarKind::Char, &other)),
        };
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        *self = '\0';
    }
}

// -----------------------------------------------------------------------------
// Strings

impl_scalar_reflect!(String, String);

impl Scalar for String {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Str(text) => {
                text.clone_into(self);
                Ok(())
            }
            ScalarRef::Char(value) => {
                self.clear();
                self.push(value);
                Ok(())
            }
            other => Err(mismatch(ScalarKind::String, &other)),
        }
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}

impl_scalar_reflect!(&'static str, String);

impl Scalar for &'static str {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    fn set_scalar(&mut self, _value: ScalarRef<'_>) -> Result<(), ScalarError> {
        Err(ScalarError::ReadOnly("&'static str"))
    }

    #[inline]
    fn reset(&mut self) {
        *self = "";
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::{ScalarKind, Typed};
    use crate::ops::{Scalar, ScalarError, ScalarRef};

    #[test]
    fn integers_check_range() {
        let mut x = 0_i8;
        assert!(x.set_scalar(ScalarRef::Int(-128)).is_ok());
        assert_eq!(x, -128);
        assert_eq!(
            x.set_scalar(ScalarRef::Int(128)),
            Err(ScalarError::OutOfRange("i8"))
        );

        let mut y = 0_u32;
        assert_eq!(
            y.set_scalar(ScalarRef::Int(-1)),
            Err(ScalarError::OutOfRange("u32"))
        );
        assert!(y.set_scalar(ScalarRef::Int(7)).is_ok());
        assert_eq!(y.scalar(), ScalarRef::Uint(7));
    }

    #[test]
    fn families_do_not_mix() {
        let mut flag = true;
        assert_eq!(
            flag.set_scalar(ScalarRef::Uint(1)),
            Err(ScalarError::Mismatch {
                expected: ScalarKind::Bool,
                found: ScalarKind::Uint,
            })
        );
        flag.reset();
        assert!(!flag);
    }

    #[test]
    fn floats_narrow() {
        let mut x = 0_f32;
        assert!(x.set_scalar(ScalarRef::Float64(1.5)).is_ok());
        assert_eq!(x, 1.5);
        assert!(x.set_scalar(ScalarRef::Float64(1e300)).is_err());
    }

    #[test]
    fn char_from_single_character() {
        let mut c = 'a';
        assert!(c.set_scalar(ScalarRef::Str("é")).is_ok());
        assert_eq!(c, 'é');
        assert!(c.set_scalar(ScalarRef::Str("ab")).is_err());
        assert!(c.set_scalar(ScalarRef::Str("")).is_err());
    }

    #[test]
    fn strings() {
        let mut s = String::from("old");
        s.set_scalar(ScalarRef::Str("new")).unwrap();
        assert_eq!(s, "new");

        let mut fixed: &'static str = "x";
        assert!(fixed.set_scalar(ScalarRef::Str("y")).is_err());
        assert_eq!(<&'static str>::type_info().as_scalar().unwrap().kind(), ScalarKind::String);
    }
}
