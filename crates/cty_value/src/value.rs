use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use indexmap::IndexMap;
use indexmap::map as index_map;

use crate::{Number, Type, ValueError};

// -----------------------------------------------------------------------------
// ValueKind

/// The shape of a [`Value`], used to dispatch without borrowing its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Unknown,
    Bool,
    Number,
    String,
    List,
    Tuple,
    Map,
    Object,
}

// -----------------------------------------------------------------------------
// Value

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Null(Type),
    Unknown(Type),
    Bool(bool),
    Number(Number),
    String(String),
    List { elem: Type, items: Vec<Value> },
    Tuple(Vec<Value>),
    Map { elem: Type, entries: BTreeMap<String, Value> },
    Object(IndexMap<String, Value>),
}

/// A dynamically typed configuration value.
///
/// The representation is private so the collection invariants hold:
/// every element of a `list` and every entry of a `map` has the same type.
///
/// # Examples
///
/// ```
/// use cty_value::{Type, Value, ValueKind};
///
/// let v = Value::object([("name", Value::from("web")), ("port", Value::from(80))]);
/// assert_eq!(v.kind(), ValueKind::Object);
/// assert_eq!(v.get_attr("port").and_then(Value::as_number).and_then(|n| n.to_i128_trunc()), Some(80));
///
/// let empty = Value::empty_list(Type::String);
/// assert_eq!(empty.ty(), Type::list(Type::String));
/// assert_eq!(empty.len(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value(Repr);

impl Value {
    // -------------------------------------------------------------------------
    // Constructors

    /// A null value of the given type.
    #[inline]
    pub const fn null(ty: Type) -> Self {
        Self(Repr::Null(ty))
    }

    /// A value whose type is known but whose content is not resolved yet.
    #[inline]
    pub const fn unknown(ty: Type) -> Self {
        Self(Repr::Unknown(ty))
    }

    #[inline]
    pub const fn bool(value: bool) -> Self {
        Self(Repr::Bool(value))
    }

    #[inline]
    pub const fn number(value: Number) -> Self {
        Self(Repr::Number(value))
    }

    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Self(Repr::String(value.into()))
    }

    /// A homogeneous list.
    ///
    /// Fails if the elements do not share one type, or if there are
    /// none (use [`Value::empty_list`]).
    pub fn list(items: impl IntoIterator<Item = Value>) -> Result<Self, ValueError> {
        let items: Vec<Value> = items.into_iter().collect();
        let elem = common_type(items.iter().enumerate().map(|(i, v)| (format!("[{i}]"), v)))
            .ok_or(ValueError::EmptyCollection("list"))??;
        Ok(Self(Repr::List { elem, items }))
    }

    /// A heterogeneous, ordered sequence.
    #[inline]
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Self(Repr::Tuple(items.into_iter().collect()))
    }

    /// A homogeneous map.
    ///
    /// Fails if the entries do not share one type, or if there are
    /// none (use [`Value::empty_map`]).
    pub fn map<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Result<Self, ValueError> {
        let entries: BTreeMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let elem = common_type(entries.iter().map(|(k, v)| (format!("[{k:?}]"), v)))
            .ok_or(ValueError::EmptyCollection("map"))??;
        Ok(Self(Repr::Map { elem, entries }))
    }

    /// A heterogeneous record of named attributes, in insertion order.
    #[inline]
    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self(Repr::Object(
            attrs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// A zero-length list with the given element type.
    #[inline]
    pub const fn empty_list(elem: Type) -> Self {
        Self(Repr::List {
            elem,
            items: Vec::new(),
        })
    }

    /// A zero-length map with the given element type.
    #[inline]
    pub const fn empty_map(elem: Type) -> Self {
        Self(Repr::Map {
            elem,
            entries: BTreeMap::new(),
        })
    }

    /// The zero-length tuple.
    #[inline]
    pub const fn empty_tuple() -> Self {
        Self(Repr::Tuple(Vec::new()))
    }

    // -------------------------------------------------------------------------
    // Queries

    /// Returns the shape of this value.
    pub const fn kind(&self) -> ValueKind {
        match &self.0 {
            Repr::Null(_) => ValueKind::Null,
            Repr::Unknown(_) => ValueKind::Unknown,
            Repr::Bool(_) => ValueKind::Bool,
            Repr::Number(_) => ValueKind::Number,
            Repr::String(_) => ValueKind::String,
            Repr::List { .. } => ValueKind::List,
            Repr::Tuple(_) => ValueKind::Tuple,
            Repr::Map { .. } => ValueKind::Map,
            Repr::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the type of this value.
    ///
    /// For `null` and `unknown` this is the type they were created with.
    pub fn ty(&self) -> Type {
        match &self.0 {
            Repr::Null(ty) | Repr::Unknown(ty) => ty.clone(),
            Repr::Bool(_) => Type::Bool,
            Repr::Number(_) => Type::Number,
            Repr::String(_) => Type::String,
            Repr::List { elem, .. } => Type::list(elem.clone()),
            Repr::Tuple(items) => Type::Tuple(items.iter().map(Value::ty).collect()),
            Repr::Map { elem, .. } => Type::map(elem.clone()),
            Repr::Object(attrs) => {
                Type::Object(attrs.iter().map(|(k, v)| (k.clone(), v.ty())).collect())
            }
        }
    }

    /// Returns `false` if this value or any nested value is unknown.
    pub fn is_known(&self) -> bool {
        match &self.0 {
            Repr::Unknown(_) => false,
            Repr::List { items, .. } | Repr::Tuple(items) => items.iter().all(Value::is_known),
            Repr::Map { entries, .. } => entries.values().all(Value::is_known),
            Repr::Object(attrs) => attrs.values().all(Value::is_known),
            _ => true,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self.0, Repr::Null(_))
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self.0 {
            Repr::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<&Number> {
        match &self.0 {
            Repr::Number(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Repr::String(v) => Some(v),
            _ => None,
        }
    }

    /// Elements of a `list` or `tuple`.
    pub fn as_ordered_children(&self) -> Option<&[Value]> {
        match &self.0 {
            Repr::List { items, .. } | Repr::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Entries of a `map` (sorted by key) or an `object` (insertion order).
    pub fn as_keyed_children(&self) -> Option<Entries<'_>> {
        match &self.0 {
            Repr::Map { entries, .. } => Some(Entries::Map(entries.iter())),
            Repr::Object(attrs) => Some(Entries::Object(attrs.iter())),
            _ => None,
        }
    }

    /// Looks up one entry of a `map` or `object`.
    pub fn get_attr(&self, key: &str) -> Option<&Value> {
        match &self.0 {
            Repr::Map { entries, .. } => entries.get(key),
            Repr::Object(attrs) => attrs.get(key),
            _ => None,
        }
    }

    /// Number of children of a collection, `None` for other kinds.
    pub fn len(&self) -> Option<usize> {
        match &self.0 {
            Repr::List { items, .. } | Repr::Tuple(items) => Some(items.len()),
            Repr::Map { entries, .. } => Some(entries.len()),
            Repr::Object(attrs) => Some(attrs.len()),
            _ => None,
        }
    }
}

/// Returns the shared type of the values, `None` if there are none.
fn common_type<'a>(
    mut values: impl Iterator<Item = (String, &'a Value)>,
) -> Option<Result<Type, ValueError>> {
    let (_, first) = values.next()?;
    let expected = first.ty();
    for (at, value) in values {
        let found = value.ty();
        if found != expected {
            return Some(Err(ValueError::Inconsistent {
                expected,
                found,
                at,
            }));
        }
    }
    Some(Ok(expected))
}

// -----------------------------------------------------------------------------
// Entries

/// Iterator over the entries of a `map` or an `object`.
pub enum Entries<'a> {
    Map(btree_map::Iter<'a, String, Value>),
    Object(index_map::Iter<'a, String, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Map(iter) => iter.next().map(|(k, v)| (k.as_str(), v)),
            Entries::Object(iter) => iter.next().map(|(k, v)| (k.as_str(), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Map(iter) => iter.size_hint(),
            Entries::Object(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

// -----------------------------------------------------------------------------
// Conversions

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Value::number(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::number(Number::from(value))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Display

impl fmt::Display for Value {
    /// Renders a compact, HCL-like form for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Null(_) => f.write_str("null"),
            Repr::Unknown(ty) => write!(f, "(unknown {ty})"),
            Repr::Bool(v) => write!(f, "{v}"),
            Repr::Number(v) => write!(f, "{v}"),
            Repr::String(v) => write!(f, "{v:?}"),
            Repr::List { items, .. } | Repr::Tuple(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Repr::Map { .. } | Repr::Object(_) => {
                f.write_str("{")?;
                if let Some(entries) = self.as_keyed_children() {
                    for (i, (k, v)) in entries.enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{k:?} = {v}")?;
                    }
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Value, ValueKind};
    use crate::{Type, ValueError};
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn list_requires_one_type() {
        let err = Value::list([Value::from(1), Value::from(true)]).unwrap_err();
        assert!(matches!(
            err,
            ValueError::Inconsistent {
                expected: Type::Number,
                found: Type::Bool,
                ..
            }
        ));
        assert_eq!(
            Value::list(Vec::new()).unwrap_err(),
            ValueError::EmptyCollection("list")
        );
    }

    #[test]
    fn map_type_and_order() {
        let map = Value::map([("b", Value::from("2")), ("a", Value::from("1"))]).unwrap();
        assert_eq!(map.ty(), Type::map(Type::String));
        let keys: Vec<&str> = map.as_keyed_children().unwrap().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);

        let object = Value::object([("b", Value::from(2)), ("a", Value::from(true))]);
        let keys: Vec<&str> = object.as_keyed_children().unwrap().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn known_is_deep() {
        let nested = Value::tuple([
            Value::from(1),
            Value::object([("x", Value::unknown(Type::String))]),
        ]);
        assert!(!nested.is_known());
        assert!(Value::null(Type::Number).is_known());
        assert_eq!(nested.kind(), ValueKind::Tuple);
    }

    #[test]
    fn display() {
        let v = Value::object([
            ("tags", Value::list([Value::from("a"), Value::from("b")]).unwrap()),
            ("port", Value::from(8080)),
            ("debug", Value::null(Type::Bool)),
        ]);
        assert_eq!(
            v.to_string(),
            r#"{"tags" = ["a", "b"], "port" = 8080, "debug" = null}"#
        );
    }
}
