use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::ValueError;

/// An arbitrary-precision decimal number.
///
/// Backed by [`BigDecimal`], so every integer of every width and every
/// finite float is held exactly. Floats are taken through their shortest
/// round-trip decimal form, so `0.1_f64` becomes exactly `0.1`.
///
/// # Examples
///
/// ```
/// use cty_value::Number;
///
/// let n = Number::from_f64(1234.5678).unwrap();
/// assert_eq!(n.to_string(), "1234.5678");
/// assert_eq!(n.to_i128_trunc(), Some(1234));
///
/// assert_eq!(Number::from_f64(1e30).unwrap().to_string(), "1e30");
/// assert_eq!(Number::from(u128::MAX).to_u128_trunc(), Some(u128::MAX));
/// assert!(Number::from_f64(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(BigDecimal);

/// Numbers with more trailing zeros, or a smaller decimal exponent, than
/// these display in scientific form.
const MAX_PLAIN_ZEROS: i64 = 20;
const MIN_PLAIN_EXPONENT: i64 = -7;

impl Number {
    /// Wraps a [`BigDecimal`].
    #[inline]
    pub const fn from_big_decimal(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Returns the underlying [`BigDecimal`].
    #[inline]
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Converts a float through its shortest round-trip decimal form.
    pub fn from_f64(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value.to_string()));
        }
        Self::from_str(&format!("{value:e}"))
    }

    /// Same as [`Number::from_f64`], through the `f32` decimal form, so
    /// `0.1_f32` becomes `0.1` rather than its widened binary value.
    pub fn from_f32(value: f32) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value.to_string()));
        }
        Self::from_str(&format!("{value:e}"))
    }

    /// Returns `true` if the number equals zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the number has no fractional part.
    pub fn is_integer(&self) -> bool {
        let (digits, scale) = self.0.normalized().into_bigint_and_exponent();
        scale <= 0 || digits.is_zero()
    }

    /// Integer part, truncated toward zero.
    ///
    /// `None` when the magnitude is at least `10^40`, which no 128-bit
    /// integer can hold anyway.
    fn trunc(&self) -> Option<BigInt> {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        if digits.is_zero() {
            return Some(BigInt::zero());
        }
        if scale <= 0 {
            if scale < -39 {
                return None;
            }
            return Some(digits * BigInt::from(10).pow(scale.unsigned_abs() as u32));
        }
        let len = digits.magnitude().to_string().len() as i64;
        if scale >= len {
            return Some(BigInt::zero());
        }
        Some(digits / BigInt::from(10).pow(scale as u32))
    }

    /// Truncates toward zero, `None` if the result does not fit `i128`.
    pub fn to_i128_trunc(&self) -> Option<i128> {
        self.trunc()?.to_i128()
    }

    /// Truncates toward zero, `None` for values of `-1` and below or
    /// beyond `u128::MAX`.
    pub fn to_u128_trunc(&self) -> Option<u128> {
        self.trunc()?.to_u128()
    }

    /// Nearest `f64`, `None` if the magnitude exceeds `f64::MAX`.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_string()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self(BigDecimal::zero())
    }
}

impl fmt::Display for Number {
    /// Plain digits for everyday magnitudes, `d.ddd` with an `e` exponent
    /// otherwise. Both forms are valid JSON number literals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (digits, scale) = self.0.normalized().into_bigint_and_exponent();
        if digits.is_zero() {
            return f.write_str("0");
        }
        if digits.sign() == Sign::Minus {
            f.write_str("-")?;
        }

        let text = digits.magnitude().to_string();
        let len = text.len() as i64;
        let exponent = len - 1 - scale;

        if scale < -MAX_PLAIN_ZEROS || exponent < MIN_PLAIN_EXPONENT {
            let (lead, rest) = text.split_at(1);
            f.write_str(lead)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            return write!(f, "e{exponent}");
        }

        if scale <= 0 {
            f.write_str(&text)?;
            for _ in 0..scale.unsigned_abs() {
                f.write_str("0")?;
            }
        } else if scale < len {
            let (int, frac) = text.split_at((len - scale) as usize);
            write!(f, "{int}.{frac}")?;
        } else {
            f.write_str("0.")?;
            for _ in 0..(scale - len) {
                f.write_str("0")?;
            }
            f.write_str(&text)?;
        }
        Ok(())
    }
}

impl FromStr for Number {
    type Err = ValueError;

    /// Parses decimal text, including exponent forms such as `1e3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BigDecimal::from_str(s)
            .map(Self)
            .map_err(|_| ValueError::InvalidNumber(String::from(s)))
    }
}

impl From<BigDecimal> for Number {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(value: $ty) -> Self {
                Self(BigDecimal::from(BigInt::from(value)))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::Number;
    use alloc::string::ToString;
    use core::str::FromStr;

    #[test]
    fn truncation() {
        assert_eq!(Number::from_f64(-3.99).unwrap().to_i128_trunc(), Some(-3));
        assert_eq!(Number::from_f64(7.5).unwrap().to_u128_trunc(), Some(7));
        assert_eq!(Number::from(-2).to_u128_trunc(), None);
        assert_eq!(Number::from(i64::MIN).to_i128_trunc(), Some(i64::MIN as i128));
        assert_eq!(Number::from_f64(1e-30).unwrap().to_i128_trunc(), Some(0));
        assert_eq!(Number::from_f64(1e30).unwrap().to_i128_trunc(), Some(10_i128.pow(30)));
        assert_eq!(Number::from_f64(f64::MAX).unwrap().to_i128_trunc(), None);
    }

    #[test]
    fn wide_integers() {
        let max = Number::from(u128::MAX);
        assert_eq!(max.to_string(), u128::MAX.to_string());
        assert_eq!(max.to_u128_trunc(), Some(u128::MAX));
        assert_eq!(max.to_i128_trunc(), None);
        assert_eq!(Number::from(i128::MIN).to_i128_trunc(), Some(i128::MIN));
        assert!(Number::from(u64::MAX).is_integer());
    }

    #[test]
    fn floats_are_exact_at_every_magnitude() {
        for value in [1e30, 1.5e29, 1e-30, 5e-324, f64::MAX, f64::MIN_POSITIVE, -0.1] {
            let number = Number::from_f64(value).unwrap();
            assert!(!number.is_zero());
            assert_eq!(number.to_f64(), Some(value));
        }
        assert_eq!(Number::from_f64(5e-324).unwrap().to_string(), "5e-324");
        assert_eq!(
            Number::from_f64(f64::MAX).unwrap().to_string(),
            "1.7976931348623157e308"
        );
        assert_eq!(Number::from_f64(0.5).unwrap().to_string(), "0.5");
        assert_eq!(Number::from_f64(0.0001).unwrap().to_string(), "0.0001");
        assert!(Number::from_f64(0.0).unwrap().is_zero());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(Number::from_str("1e3").unwrap().to_string(), "1000");
        assert_eq!(Number::from_str(" 2.50 ").unwrap().to_string(), "2.5");
        assert_eq!(Number::from_str("-120").unwrap().to_string(), "-120");
        assert_eq!(Number::from_str("1e400").unwrap().to_f64(), None);
        assert!(Number::from_str("abc").is_err());
        assert!(Number::from_f64(f64::INFINITY).is_err());
    }
}
