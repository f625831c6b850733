use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use cty_value::Number;

use crate::Reflect;
use crate::hooks::TypeHooks;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, TypeInfo, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// A dynamically-typed native value.
///
/// `Native` is the target that accepts any value: decoding into it never
/// fails on shape, lists and tuples become [`Native::List`], maps and
/// objects become [`Native::Map`]. It is also what
/// [`convert_value`](crate::convert::convert_value) returns.
///
/// ```
/// use cty_reflect::{Native, convert};
/// use cty_value::Value;
///
/// let value = Value::tuple(vec![Value::bool(true), Value::string("x")]);
///
/// let mut native = Native::Null;
/// convert::unmarshal(&value, &mut native).unwrap();
///
/// assert_eq!(native, Native::List(vec![Native::Bool(true), Native::from("x")]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Native {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Native>),
    Map(BTreeMap<String, Native>),
}

impl Native {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Native::Number(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Native]> {
        match self {
            Native::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Native>> {
        match self {
            Native::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the entry `key` of a map.
    pub fn get(&self, key: &str) -> Option<&Native> {
        self.as_map().and_then(|entries| entries.get(key))
    }
}

impl From<bool> for Native {
    #[inline]
    fn from(value: bool) -> Self {
        Native::Bool(value)
    }
}

impl From<Number> for Native {
    #[inline]
    fn from(value: Number) -> Self {
        Native::Number(value)
    }
}

impl From<&str> for Native {
    #[inline]
    fn from(value: &str) -> Self {
        Native::String(value.into())
    }
}

impl From<String> for Native {
    #[inline]
    fn from(value: String) -> Self {
        Native::String(value)
    }
}

impl From<Vec<Native>> for Native {
    #[inline]
    fn from(value: Vec<Native>) -> Self {
        Native::List(value)
    }
}

impl From<BTreeMap<String, Native>> for Native {
    #[inline]
    fn from(value: BTreeMap<String, Native>) -> Self {
        Native::Map(value)
    }
}

// -----------------------------------------------------------------------------
// Reflect

impl Typed for Native {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Dynamic(DynamicInfo::new().with_hooks(TypeHooks::EMPTY.with_default::<Self>()))
        })
    }
}

impl Reflect for Native {
    impl_reflect_cast_fn!(Dynamic);
}
