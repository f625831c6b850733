use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use cty_value::{Number, Type, Value, ValueKind};
use serde_json::Value as Json;

use crate::convert::Error;

/// Converts a known value into JSON.
///
/// Objects and maps become JSON objects, lists and tuples become arrays.
/// Numbers keep their exact decimal text. Unknown values are rejected.
///
/// ```
/// use cty_reflect::convert::value_to_json;
/// use cty_value::Value;
///
/// let value = Value::object([("n", Value::from(1)), ("s", Value::from("x"))]);
/// let json = value_to_json(&value).unwrap();
/// assert_eq!(json, serde_json::json!({ "n": 1, "s": "x" }));
/// ```
pub fn value_to_json(value: &Value) -> Result<Json, Error> {
    if value.is_null() {
        return Ok(Json::Null);
    }
    if let Some(value) = value.as_bool() {
        return Ok(Json::Bool(value));
    }
    if let Some(number) = value.as_number() {
        return serde_json::Number::from_str(&number.to_string())
            .map(Json::Number)
            .map_err(Error::json);
    }
    if let Some(text) = value.as_str() {
        return Ok(Json::String(text.into()));
    }
    if let Some(items) = value.as_ordered_children() {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| value_to_json(item).map_err(|err| err.at_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array);
    }
    if let Some(entries) = value.as_keyed_children() {
        let is_object = value.kind() == ValueKind::Object;
        return entries
            .map(|(key, item)| match value_to_json(item) {
                Ok(item) => Ok((String::from(key), item)),
                Err(err) if is_object => Err(err.at_field(key)),
                Err(err) => Err(err.at_key(key)),
            })
            .collect::<Result<serde_json::Map<_, _>, _>>()
            .map(Json::Object);
    }
    Err(Error::not_representable(alloc::format!(
        "unknown value of type {}",
        value.ty()
    )))
}

/// Converts JSON into a value.
///
/// Arrays become tuples and objects become objects, since JSON carries
/// no element types. `null` becomes a null of the dynamic type.
pub fn json_to_value(json: Json) -> Result<Value, Error> {
    match json {
        Json::Null => Ok(Value::null(Type::Dynamic)),
        Json::Bool(value) => Ok(Value::bool(value)),
        Json::Number(number) => Number::from_str(&number.to_string())
            .map(Value::number)
            .map_err(Error::not_representable),
        Json::String(text) => Ok(Value::string(text)),
        Json::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| json_to_value(item).map_err(|err| err.at_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::tuple),
        Json::Object(attrs) => attrs
            .into_iter()
            .map(|(key, item)| match json_to_value(item) {
                Ok(item) => Ok((key, item)),
                Err(err) => Err(err.at_field(&key)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::object),
    }
}

/// Encodes a value as compact JSON text.
pub fn to_json_string(value: &Value) -> Result<String, Error> {
    serde_json::to_string(&value_to_json(value)?).map_err(Error::json)
}

/// Decodes JSON text into a value, see [`json_to_value`].
///
/// ```
/// use cty_reflect::convert::from_json_str;
/// use cty_value::ValueKind;
///
/// let value = from_json_str(r#"{"ports": [80, 443], "tls": true}"#).unwrap();
/// assert_eq!(value.kind(), ValueKind::Object);
/// assert_eq!(value.get_attr("ports").unwrap().kind(), ValueKind::Tuple);
/// ```
pub fn from_json_str(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text)
        .map_err(Error::json)
        .and_then(json_to_value)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::str::FromStr;

    use cty_value::{Number, Type, Value};

    use super::{from_json_str, to_json_string, value_to_json};
    use crate::convert::Error;

    #[test]
    fn numbers_keep_their_digits() {
        let big = Number::from_str("12345678901234567890.125").unwrap();
        let text = to_json_string(&Value::number(big.clone())).unwrap();
        assert_eq!(text, "12345678901234567890.125");
        assert_eq!(from_json_str(&text).unwrap(), Value::number(big));

        let huge = from_json_str("[1e400, -2.5e-300]").unwrap();
        assert_eq!(to_json_string(&huge).unwrap(), "[1e400,-2.5e-300]");
    }

    #[test]
    fn shapes() {
        let value = Value::map([("a", Value::from(true))]).unwrap();
        assert_eq!(to_json_string(&value).unwrap(), r#"{"a":true}"#);

        let value = Value::tuple([Value::null(Type::String), Value::from("x")]);
        assert_eq!(to_json_string(&value).unwrap(), r#"[null,"x"]"#);

        assert_eq!(from_json_str("null").unwrap(), Value::null(Type::Dynamic));
    }

    #[test]
    fn rejects_unknowns_and_bad_text() {
        let value = Value::object([("x", Value::unknown(Type::Bool))]);
        let err = value_to_json(&value).unwrap_err();
        assert!(matches!(err, Error::NotRepresentable { .. }));
        assert_eq!(err.path().to_string(), ".x");

        assert!(matches!(from_json_str("{"), Err(Error::Json { .. })));
    }
}
