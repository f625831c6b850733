use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use cty_value::{Value, ValueKind};

/// One step from a value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A struct field or object attribute, shown as `.name`.
    Field(Box<str>),
    /// A sequence position, shown as `[0]`.
    Index(usize),
    /// A map key, shown as `["key"]`.
    Key(Box<str>),
}

/// The location of an error inside the converted value.
///
/// Segments are added while an error travels back up the recursion, so
/// they are stored innermost first.
///
/// ```
/// use cty_reflect::convert::unmarshal;
/// use cty_value::Value;
///
/// let value = Value::tuple(vec![Value::from(1), Value::from("x")]);
/// let mut target: Vec<u8> = Vec::new();
///
/// let err = unmarshal(&value, &mut target).unwrap_err();
/// assert_eq!(err.path().to_string(), "[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertPath {
    reversed: Vec<Segment>,
}

impl ConvertPath {
    /// The path of the root value.
    #[inline]
    pub const fn new() -> Self {
        Self {
            reversed: Vec::new(),
        }
    }

    /// Returns `true` for the root value.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Iterates over the segments, outermost first.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Segment> + '_ {
        self.reversed.iter().rev()
    }

    /// Adds an outer segment.
    #[inline]
    pub(crate) fn push_outer(&mut self, segment: Segment) {
        self.reversed.push(segment);
    }
}

impl fmt::Display for ConvertPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for segment in self.segments() {
            match segment {
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

/// Returns the path of the first unknown value, in document order.
pub(crate) fn find_unknown(value: &Value) -> Option<ConvertPath> {
    if value.is_known() {
        return None;
    }
    match value.kind() {
        ValueKind::Unknown => Some(ConvertPath::new()),
        ValueKind::List | ValueKind::Tuple => {
            let items = value.as_ordered_children()?;
            items.iter().enumerate().find_map(|(index, item)| {
                let mut path = find_unknown(item)?;
                path.push_outer(Segment::Index(index));
                Some(path)
            })
        }
        kind @ (ValueKind::Map | ValueKind::Object) => {
            value.as_keyed_children()?.find_map(|(key, item)| {
                let mut path = find_unknown(item)?;
                path.push_outer(match kind {
                    ValueKind::Object => Segment::Field(key.into()),
                    _ => Segment::Key(key.into()),
                });
                Some(path)
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use cty_value::{Type, Value};

    use super::{ConvertPath, Segment, find_unknown};

    #[test]
    fn display_outermost_first() {
        let mut path = ConvertPath::new();
        assert_eq!(path.to_string(), "<root>");

        path.push_outer(Segment::Field("port".into()));
        path.push_outer(Segment::Index(2));
        path.push_outer(Segment::Key("web".into()));
        path.push_outer(Segment::Field("servers".into()));
        assert_eq!(path.to_string(), r#".servers["web"][2].port"#);
    }

    #[test]
    fn locates_nested_unknown() {
        let value = Value::object([
            ("name", Value::from("a")),
            (
                "ports",
                Value::tuple(vec![Value::from(1), Value::unknown(Type::Number)]),
            ),
        ]);
        assert_eq!(find_unknown(&value).unwrap().to_string(), ".ports[1]");
        assert!(find_unknown(&Value::from(1)).is_none());
    }
}
