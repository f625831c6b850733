use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use indexmap::IndexMap;

/// The type of a [`Value`](crate::Value).
///
/// `Dynamic` stands for "any type" and is used by nulls and unknowns
/// whose type was not known when they were created, and by empty
/// collections whose element type cannot be inferred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Type {
    #[default]
    Dynamic,
    Bool,
    Number,
    String,
    List(Box<Type>),
    Map(Box<Type>),
    Tuple(Vec<Type>),
    Object(IndexMap<String, Type>),
}

impl Type {
    /// Shorthand for `Type::List(Box::new(elem))`.
    #[inline]
    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    /// Shorthand for `Type::Map(Box::new(elem))`.
    #[inline]
    pub fn map(elem: Type) -> Self {
        Type::Map(Box::new(elem))
    }

    /// Returns `true` for `bool`, `number` and `string`.
    ///
    /// ```
    /// use cty_value::Type;
    ///
    /// assert!(Type::Number.is_primitive());
    /// assert!(!Type::Dynamic.is_primitive());
    /// assert!(!Type::list(Type::String).is_primitive());
    /// ```
    #[inline]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Type::Bool | Type::Number | Type::String)
    }

    /// Returns `true` for `list` and `tuple` types.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Type::List(_) | Type::Tuple(_))
    }

    /// Returns `true` for `map` and `object` types.
    #[inline]
    pub const fn is_keyed(&self) -> bool {
        matches!(self, Type::Map(_) | Type::Object(_))
    }

    /// Returns the element type of a `list` or `map`.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(elem) | Type::Map(elem) => Some(elem),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Dynamic => f.write_str("dynamic"),
            Type::Bool => f.write_str("bool"),
            Type::Number => f.write_str("number"),
            Type::String => f.write_str("string"),
            Type::List(elem) => write!(f, "list({elem})"),
            Type::Map(elem) => write!(f, "map({elem})"),
            Type::Tuple(elems) => {
                f.write_str("tuple([")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str("])")
            }
            Type::Object(attrs) => {
                f.write_str("object({")?;
                for (i, (name, ty)) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name} = {ty}")?;
                }
                f.write_str("})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::string::ToString;
    use alloc::vec;
    use indexmap::IndexMap;

    #[test]
    fn display() {
        assert_eq!(Type::list(Type::Number).to_string(), "list(number)");
        assert_eq!(
            Type::Tuple(vec![Type::Bool, Type::map(Type::String)]).to_string(),
            "tuple([bool, map(string)])"
        );

        let mut attrs = IndexMap::new();
        attrs.insert("name".into(), Type::String);
        attrs.insert("port".into(), Type::Number);
        assert_eq!(
            Type::Object(attrs).to_string(),
            "object({name = string, port = number})"
        );
    }
}
