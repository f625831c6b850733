use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use cty_value::Value;

use crate::Native;
use crate::convert::json::to_json_string;
use crate::convert::path::find_unknown;
use crate::convert::Error;

/// Converts a value into a [`Native`] tree.
///
/// Lists and tuples become [`Native::List`], maps and objects become
/// [`Native::Map`]. Unknown values are rejected with their path.
pub fn convert_value(value: &Value) -> Result<Native, Error> {
    if value.is_null() {
        return Ok(Native::Null);
    }
    if let Some(value) = value.as_bool() {
        return Ok(Native::Bool(value));
    }
    if let Some(number) = value.as_number() {
        return Ok(Native::Number(number.clone()));
    }
    if let Some(text) = value.as_str() {
        return Ok(Native::String(text.into()));
    }
    if let Some(items) = value.as_ordered_children() {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| convert_value(item).map_err(|err| err.at_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Native::List);
    }
    if let Some(entries) = value.as_keyed_children() {
        return entries
            .map(|(key, item)| match convert_value(item) {
                Ok(item) => Ok((String::from(key), item)),
                Err(err) => Err(err.at_key(key)),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Native::Map);
    }
    Err(Error::unknown())
}

/// Renders a value as compact JSON, for debug output.
///
/// ```
/// use cty_reflect::convert::dump_value;
/// use cty_value::{Type, Value};
///
/// let value = Value::tuple([Value::from(1), Value::null(Type::Bool)]);
/// assert_eq!(dump_value(&value).unwrap(), "[1,null]");
///
/// let value = Value::tuple([Value::unknown(Type::Bool)]);
/// assert!(dump_value(&value).is_err());
/// ```
pub fn dump_value(value: &Value) -> Result<String, Error> {
    if let Some(path) = find_unknown(value) {
        return Err(Error::UnknownValue { path });
    }
    to_json_string(value)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use cty_value::{Number, Type, Value};

    use super::convert_value;
    use crate::Native;
    use crate::convert::Error;

    #[test]
    fn converts_nested_values() {
        let value = Value::object([
            ("n", Value::from(3)),
            (
                "list",
                Value::list([Value::from("a"), Value::from("b")]).unwrap(),
            ),
            ("none", Value::null(Type::String)),
        ]);
        let native = convert_value(&value).unwrap();
        assert_eq!(native.get("n"), Some(&Native::Number(Number::from(3))));
        assert_eq!(
            native.get("list"),
            Some(&Native::List(vec![Native::from("a"), Native::from("b")]))
        );
        assert_eq!(native.get("none"), Some(&Native::Null));
    }

    #[test]
    fn unknown_is_rejected_with_path() {
        let value = Value::map([("k", Value::unknown(Type::Number))]).unwrap();
        let err = convert_value(&value).unwrap_err();
        assert!(matches!(err, Error::UnknownValue { .. }));
        assert_eq!(err.path().to_string(), r#"["k"]"#);
    }
}
