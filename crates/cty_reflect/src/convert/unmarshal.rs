use alloc::boxed::Box;

use cty_value::{Number, Type, Value, ValueKind};
use log::trace;

use crate::convert::fields::{field_mut, resolve};
use crate::convert::indirect::{Indirect, indirect};
use crate::convert::json::value_to_json;
use crate::convert::native::convert_value;
use crate::convert::path::find_unknown;
use crate::convert::Error;
use crate::info::{ScalarKind, TypeInfo};
use crate::ops::{ReflectMut, Scalar, ScalarError, ScalarRef};
use crate::{Native, Reflect};

// -----------------------------------------------------------------------------
// Entry points

/// Decodes a generic [`Value`] into an existing native value.
///
/// The value must be fully known; otherwise [`Error::UnknownValue`] is
/// returned before the target is touched.
///
/// Decoding is permissive where the native side has more freedom:
/// object attributes without a matching field are ignored, missing
/// attributes leave their field unchanged, and map entries are merged into
/// the existing map. A `null` resets its target to the zero value.
///
/// # Examples
///
/// ```
/// use cty_reflect::convert::unmarshal;
/// use cty_reflect::derive::Reflect;
/// use cty_value::{Type, Value};
///
/// #[derive(Reflect, Default)]
/// pub struct Mount {
///     pub path: String,
///     pub read_only: bool,
///     pub size: Option<u64>,
/// }
///
/// let value = Value::object([
///     ("path", Value::from("/data")),
///     ("read_only", Value::from(true)),
///     ("size", Value::null(Type::Number)),
///     ("ignored", Value::from(1)),
/// ]);
///
/// let mut mount = Mount { size: Some(4), ..Default::default() };
/// unmarshal(&value, &mut mount).unwrap();
///
/// assert_eq!(mount.path, "/data");
/// assert!(mount.read_only);
/// assert_eq!(mount.size, None);
/// ```
pub fn unmarshal(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    if let Some(path) = find_unknown(value) {
        return Err(Error::UnknownValue { path });
    }
    decode(value, target)
}

/// Typed shorthand for [`unmarshal`].
#[inline]
pub fn unmarshal_into<T: Reflect>(value: &Value, target: &mut T) -> Result<(), Error> {
    unmarshal(value, target)
}

/// Decodes a value into a fresh `T::default()`.
pub fn unmarshal_new<T: Reflect + Default>(value: &Value) -> Result<T, Error> {
    let mut target = T::default();
    unmarshal(value, &mut target)?;
    Ok(target)
}

// -----------------------------------------------------------------------------
// Dispatch

fn decode(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    match value.kind() {
        ValueKind::Null => decode_null(value, target),
        ValueKind::Unknown => Err(Error::unknown()),
        ValueKind::List | ValueKind::Tuple => decode_sequence(value, target),
        ValueKind::Map | ValueKind::Object => decode_keyed(value, target),
        ValueKind::Bool | ValueKind::Number | ValueKind::String => decode_primitive(value, target),
    }
}

/// Runs the indirection walker and any hook it finds.
///
/// Returns the concrete target, or `None` if a hook consumed the value.
fn dispatch<'a>(
    value: &Value,
    target: &'a mut dyn Reflect,
) -> Result<Option<&'a mut dyn Reflect>, Error> {
    match indirect(target, value.is_null())? {
        Indirect::Concrete(target) => Ok(Some(target)),
        Indirect::Value(target, hook) => {
            let type_path = target.reflect_type_info().type_path();
            trace!("unmarshal `{type_path}` through its value hook");
            hook.unmarshal_value(target, value)
                .map_err(|err| Error::hook(type_path, err))?;
            Ok(None)
        }
        Indirect::Json(target, hook) => {
            let type_path = target.reflect_type_info().type_path();
            trace!("unmarshal `{type_path}` through its deserialize hook");
            let json = value_to_json(value)?;
            hook.deserialize(target, json).map_err(Error::json)?;
            Ok(None)
        }
        Indirect::Text(target, hook) => {
            let type_path = target.reflect_type_info().type_path();
            let Some(text) = value.as_str() else {
                return Err(Error::type_mismatch(value.ty(), type_path));
            };
            trace!("unmarshal `{type_path}` through its text hook");
            hook.unmarshal_text(target, text)
                .map_err(|err| Error::hook(type_path, err))?;
            Ok(None)
        }
    }
}

// -----------------------------------------------------------------------------
// Sequences

fn decode_sequence(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    let Some(target) = dispatch(value, target)? else {
        return Ok(());
    };
    let items = value.as_ordered_children().unwrap_or_default();
    let info = target.reflect_type_info();

    match (target.reflect_mut(), info) {
        (ReflectMut::Dynamic(native), _) => *native = convert_value(value)?,
        (ReflectMut::List(list), TypeInfo::List(list_info)) => {
            list.truncate(items.len());
            if list.len() < items.len() {
                let Some(default) = list_info.item_info().hooks().default_value() else {
                    return Err(Error::invalid_target(
                        info.type_path(),
                        "list items have no default value to grow with",
                    ));
                };
                while list.len() < items.len() {
                    list.push(default.default()).map_err(|_| {
                        Error::invalid_target(info.type_path(), "list rejected its own item type")
                    })?;
                }
            }
            for (index, item) in items.iter().enumerate() {
                if let Some(slot) = list.get_mut(index) {
                    decode(item, slot).map_err(|err| err.at_index(index))?;
                }
            }
        }
        (ReflectMut::Array(array), _) => {
            if array.len() < items.len() {
                return Err(Error::invalid_target(
                    info.type_path(),
                    "array is shorter than the sequence",
                ));
            }
            for (index, item) in items.iter().enumerate() {
                if let Some(slot) = array.get_mut(index) {
                    decode(item, slot).map_err(|err| err.at_index(index))?;
                }
            }
            for index in items.len()..array.len() {
                if let Some(slot) = array.get_mut(index) {
                    reset(slot).map_err(|err| err.at_index(index))?;
                }
            }
        }
        _ => return Err(Error::type_mismatch(value.ty(), info.type_path())),
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Maps and objects

fn decode_keyed(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    let Some(target) = dispatch(value, target)? else {
        return Ok(());
    };
    let info = target.reflect_type_info();

    match (target.reflect_mut(), info) {
        (ReflectMut::Dynamic(native), _) => *native = convert_value(value)?,
        (ReflectMut::Map(map), TypeInfo::Map(map_info)) => {
            let key_info = map_info.key_info();
            let is_text_key = matches!(
                key_info,
                TypeInfo::Scalar(scalar) if matches!(scalar.kind(), ScalarKind::String | ScalarKind::Char)
            );
            if !is_text_key {
                return Err(Error::type_mismatch_with(
                    value.ty(),
                    info.type_path(),
                    alloc::format!("map key type `{}` is not a string", key_info.type_path()),
                ));
            }
            let (Some(new_key), Some(new_value)) = (
                key_info.hooks().default_value(),
                map_info.value_info().hooks().default_value(),
            ) else {
                return Err(Error::invalid_target(
                    info.type_path(),
                    "map keys and values need a default value",
                ));
            };

            for (key, item) in value.as_keyed_children().into_iter().flatten() {
                let mut fresh = new_value.default();
                decode(item, &mut *fresh).map_err(|err| err.at_key(key))?;

                let mut fresh_key = new_key.default();
                match (*fresh_key).reflect_mut() {
                    ReflectMut::Scalar(scalar) => scalar
                        .set_scalar(ScalarRef::Str(key))
                        .map_err(|err| scalar_error(err, Type::String, key_info.type_path()))
                        .map_err(|err| err.at_key(key))?,
                    _ => return Err(Error::unsupported_key_type(key_info.type_path())),
                }

                map.insert(fresh_key, fresh).map_err(|_| {
                    Error::invalid_target(info.type_path(), "map rejected its own entry types")
                })?;
            }
        }
        (ReflectMut::Struct(object), TypeInfo::Struct(struct_info)) => {
            for field in resolve(struct_info).iter() {
                let Some(item) = value.get_attr(field.name()) else {
                    continue;
                };
                if let Some(slot) = field_mut(object, field.path()) {
                    decode(item, slot).map_err(|err| err.at_field(field.name()))?;
                }
            }
        }
        _ => return Err(Error::type_mismatch(value.ty(), info.type_path())),
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Primitives

fn decode_primitive(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    let Some(target) = dispatch(value, target)? else {
        return Ok(());
    };
    let type_path = target.reflect_type_info().type_path();

    match target.reflect_mut() {
        ReflectMut::Dynamic(native) => {
            *native = convert_value(value)?;
            Ok(())
        }
        ReflectMut::Scalar(scalar) => set_primitive(value, scalar, type_path),
        _ => Err(Error::type_mismatch(value.ty(), type_path)),
    }
}

fn set_primitive(
    value: &Value,
    scalar: &mut dyn Scalar,
    type_path: &'static str,
) -> Result<(), Error> {
    let converted = match (scalar.scalar().kind(), value.kind()) {
        (ScalarKind::Bool, ValueKind::Bool) => value.as_bool().map(ScalarRef::Bool),
        (ScalarKind::Int, ValueKind::Number) => {
            match value.as_number().and_then(Number::to_i128_trunc) {
                Some(number) => Some(ScalarRef::Int(number)),
                None => return Err(out_of_range(value, type_path)),
            }
        }
        (ScalarKind::Uint, ValueKind::Number) => {
            match value.as_number().and_then(Number::to_u128_trunc) {
                Some(number) => Some(ScalarRef::Uint(number)),
                None => return Err(out_of_range(value, type_path)),
            }
        }
        (ScalarKind::Float, ValueKind::Number) => {
            match value.as_number().and_then(Number::to_f64) {
                Some(number) => Some(ScalarRef::Float64(number)),
                None => return Err(out_of_range(value, type_path)),
            }
        }
        (ScalarKind::String | ScalarKind::Char, ValueKind::String) => {
            value.as_str().map(ScalarRef::Str)
        }
        _ => None,
    };

    let Some(converted) = converted else {
        return Err(Error::type_mismatch(value.ty(), type_path));
    };
    scalar
        .set_scalar(converted)
        .map_err(|err| scalar_error(err, value.ty(), type_path))
}

fn out_of_range(value: &Value, type_path: &'static str) -> Error {
    Error::type_mismatch_with(
        value.ty(),
        type_path,
        alloc::format!("{value} is out of range"),
    )
}

fn scalar_error(err: ScalarError, found: Type, type_path: &'static str) -> Error {
    match err {
        ScalarError::ReadOnly(_) => Error::invalid_target(type_path, "borrowed strings are read-only"),
        err => Error::type_mismatch_with(found, type_path, err),
    }
}

// -----------------------------------------------------------------------------
// Null

fn decode_null(value: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    match dispatch(value, target)? {
        Some(target) => reset(target),
        None => Ok(()),
    }
}

/// Resets a value to its zero form.
fn reset(target: &mut dyn Reflect) -> Result<(), Error> {
    let info = target.reflect_type_info();

    match (target.reflect_mut(), info) {
        (ReflectMut::Scalar(scalar), _) => scalar.reset(),
        (ReflectMut::Pointer(pointer), _) => {
            if !pointer.set_null()
                && let Some(pointee) = pointer.get_mut()
            {
                reset(pointee)?;
            }
        }
        (ReflectMut::Interface(interface), _) => interface.replace(Box::new(Native::Null)),
        (ReflectMut::List(list), _) => list.truncate(0),
        (ReflectMut::Map(map), _) => map.clear(),
        (ReflectMut::Struct(object), TypeInfo::Struct(struct_info)) => {
            for (index, field) in struct_info.iter().enumerate() {
                if let Some(slot) = object.field_at_mut(index) {
                    reset(slot).map_err(|err| err.at_field(field.name()))?;
                }
            }
        }
        (ReflectMut::Array(array), _) => {
            for index in 0..array.len() {
                if let Some(slot) = array.get_mut(index) {
                    reset(slot).map_err(|err| err.at_index(index))?;
                }
            }
        }
        (ReflectMut::Dynamic(native), _) => *native = Native::Null,
        (ReflectMut::Opaque(target), _) => {
            let Some(default) = info.hooks().default_value() else {
                return Err(Error::invalid_target(
                    info.type_path(),
                    "no default value to reset to",
                ));
            };
            target.set(default.default()).map_err(|_| {
                Error::invalid_target(info.type_path(), "default value has another type")
            })?;
        }
        _ => return Err(Error::unsupported_type(info.type_path())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::str::FromStr;

    use cty_value::{Number, Type, Value};
    use serde::{Deserialize, Serialize};

    use super::{unmarshal, unmarshal_into, unmarshal_new};
    use crate::convert::{Error, marshal, marshal_value};
    use crate::derive::Reflect;
    use crate::hooks::{HookError, UnmarshalText, UnmarshalValue};
    use crate::{Native, Reflect};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    pub struct Backend {
        pub host: String,
        pub port: u16,
        pub weight: Option<f64>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    pub struct Common {
        pub region: String,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    pub struct Pool {
        #[reflect(embed)]
        pub common: Common,
        #[cty("pool_name")]
        pub name: String,
        pub backends: Vec<Backend>,
        pub primary: Option<Backend>,
        pub labels: BTreeMap<String, String>,
        pub retries: Box<i32>,
        pub enabled: bool,
        pub window: [u8; 2],
    }

    fn sample() -> Pool {
        Pool {
            common: Common {
                region: "eu".into(),
            },
            name: "web".into(),
            backends: vec![
                Backend {
                    host: "a".into(),
                    port: 80,
                    weight: Some(0.5),
                },
                Backend {
                    host: "b".into(),
                    port: 81,
                    weight: None,
                },
            ],
            primary: Some(Backend {
                host: "c".into(),
                port: 8080,
                weight: None,
            }),
            labels: BTreeMap::from([("tier".to_string(), "front".to_string())]),
            retries: Box::new(-3),
            enabled: true,
            window: [1, 2],
        }
    }

    #[test]
    fn round_trip() {
        let pool = sample();
        let value = marshal(&pool).unwrap();
        assert_eq!(value.get_attr("region"), Some(&Value::from("eu")));
        assert_eq!(value.get_attr("pool_name"), Some(&Value::from("web")));

        let decoded: Pool = unmarshal_new(&value).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn null_resets_to_zero() {
        let value = Value::object([
            ("host", Value::null(Type::String)),
            ("port", Value::null(Type::Number)),
            ("weight", Value::null(Type::Number)),
        ]);
        let mut backend = Backend {
            host: "x".into(),
            port: 1,
            weight: Some(1.0),
        };
        unmarshal(&value, &mut backend).unwrap();
        assert_eq!(backend, Backend::default());

        let mut pool = sample();
        unmarshal(&Value::null(Type::Dynamic), &mut pool).unwrap();
        assert_eq!(pool.common.region, "");
        assert!(pool.backends.is_empty() && pool.labels.is_empty());
        assert_eq!(pool.primary, None);
        assert_eq!(*pool.retries, 0);
        assert_eq!(pool.window, [0, 0]);
        assert!(!pool.enabled);
    }

    #[test]
    fn unknown_values_leave_target_untouched() {
        let value = Value::object([
            ("pool_name", Value::from("changed")),
            (
                "backends",
                Value::tuple([Value::object([("port", Value::unknown(Type::Number))])]),
            ),
        ]);
        let mut pool = sample();
        let err = unmarshal(&value, &mut pool).unwrap_err();
        assert!(matches!(err, Error::UnknownValue { .. }));
        assert_eq!(err.path().to_string(), ".backends[0].port");
        assert_eq!(pool.name, "web");
    }

    #[test]
    fn range_errors_carry_the_path() {
        let value = Value::object([(
            "backends",
            Value::tuple([
                Value::object([("port", Value::from(80))]),
                Value::object([("port", Value::from(70_000))]),
            ]),
        )]);
        let err = unmarshal_new::<Pool>(&value).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { detail: Some(_), .. }));
        assert_eq!(err.path().to_string(), ".backends[1].port");

        let err = unmarshal_new::<u8>(&Value::from(-1)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let fraction = Value::number(Number::from_str("-7.9").unwrap());
        assert_eq!(unmarshal_new::<i8>(&fraction).unwrap(), -7);
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    pub struct Profile {
        pub nickname: Option<String>,
        #[cty("-")]
        pub token: String,
        pub name: String,
    }

    #[test]
    fn null_clears_optional_strings() {
        let mut profile = Profile {
            nickname: Some("ace".into()),
            name: "ann".into(),
            ..Default::default()
        };
        let value = Value::object([("nickname", Value::null(Type::String))]);
        unmarshal(&value, &mut profile).unwrap();
        assert_eq!(profile.nickname, None);
        assert_eq!(profile.name, "ann");
    }

    #[test]
    fn excluded_fields_are_never_matched() {
        let value = Value::object([
            ("token", Value::from("leaked")),
            ("-", Value::from("leaked")),
            ("name", Value::from("ann")),
        ]);
        let profile: Profile = unmarshal_new(&value).unwrap();
        assert_eq!(profile.token, "");
        assert_eq!(profile.name, "ann");
    }

    #[test]
    fn type_mismatches() {
        let err = unmarshal_new::<String>(&Value::from(1)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { target: "alloc::string::String", .. }));

        let err = unmarshal_new::<Vec<u8>>(&Value::from("a")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let err = unmarshal_new::<Backend>(&Value::empty_tuple()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let err = unmarshal_new::<BTreeMap<u32, bool>>(&Value::empty_map(Type::Bool)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { detail: Some(_), .. }));

        assert_eq!(unmarshal_new::<char>(&Value::from("x")).unwrap(), 'x');
        assert!(unmarshal_new::<char>(&Value::from("xy")).is_err());
    }

    #[test]
    fn sequences_resize_lists_and_check_arrays() {
        let value = Value::list([Value::from(4), Value::from(5)]).unwrap();

        let mut list = vec![1_u8, 2, 3];
        unmarshal_into(&value, &mut list).unwrap();
        assert_eq!(list, [4, 5]);

        let mut wide = [9_u8; 3];
        unmarshal_into(&value, &mut wide).unwrap();
        assert_eq!(wide, [4, 5, 0]);

        let mut narrow = [9_u8; 1];
        let err = unmarshal_into(&value, &mut narrow).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }));
    }

    #[test]
    fn maps_merge_entries() {
        let mut labels = BTreeMap::from([
            ("a".to_string(), 1_i64),
            ("b".to_string(), 2),
        ]);
        let value = Value::map([("b", Value::from(20)), ("c", Value::from(30))]).unwrap();
        unmarshal_into(&value, &mut labels).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels["a"], 1);
        assert_eq!(labels["b"], 20);

        let value = Value::object([("k", Value::from(true))]);
        let keyed: BTreeMap<char, bool> = unmarshal_new(&value).unwrap();
        assert_eq!(keyed.get(&'k'), Some(&true));
    }

    #[test]
    fn dynamic_and_interface_targets() {
        let value = Value::object([
            ("name", Value::from("x")),
            ("sizes", Value::tuple([Value::from(1), Value::null(Type::Number)])),
        ]);
        let native: Native = unmarshal_new(&value).unwrap();
        assert_eq!(native.get("name"), Some(&Native::from("x")));
        assert_eq!(
            native.get("sizes").and_then(Native::as_list).map(<[Native]>::len),
            Some(2)
        );

        let mut erased: Box<dyn Reflect> = Box::new(0_i32);
        unmarshal(&Value::from(12), &mut erased).unwrap();
        assert_eq!((*erased).downcast_ref::<i32>(), Some(&12));

        unmarshal(&Value::null(Type::Dynamic), &mut erased).unwrap();
        assert_eq!((*erased).downcast_ref::<Native>(), Some(&Native::Null));
    }

    #[derive(Reflect, Default, Debug, PartialEq, Serialize, Deserialize)]
    #[reflect(opaque, default, serialize, deserialize)]
    pub struct Version(pub u32, pub u32);

    #[test]
    fn json_hooks_round_trip() {
        let value = marshal_value(&Version(1, 2)).unwrap();
        assert_eq!(value, Value::tuple([Value::from(1), Value::from(2)]));

        let decoded: Version = unmarshal_new(&value).unwrap();
        assert_eq!(decoded, Version(1, 2));

        let err = unmarshal_new::<Version>(&Value::from("1.2")).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(opaque, default, unmarshal_text)]
    pub struct Level(pub u8);

    impl UnmarshalText for Level {
        fn unmarshal_text(&mut self, text: &str) -> Result<(), HookError> {
            self.0 = match text {
                "low" => 1,
                "high" => 9,
                other => return Err(alloc::format!("unknown level {other:?}").into()),
            };
            Ok(())
        }
    }

    #[test]
    fn text_hooks_accept_strings_and_reset_on_null() {
        let mut level = Level(5);
        unmarshal_into(&Value::from("high"), &mut level).unwrap();
        assert_eq!(level, Level(9));

        // Null skips the text hook and resets through the default value.
        unmarshal_into(&Value::null(Type::String), &mut level).unwrap();
        assert_eq!(level, Level(0));

        let err = unmarshal_into(&Value::from(1), &mut level).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let err = unmarshal_into(&Value::from("mid"), &mut level).unwrap_err();
        assert!(matches!(err, Error::Hook { .. }));
    }

    #[derive(Reflect, Default)]
    #[reflect(opaque, default, unmarshal_value)]
    pub struct Seen(pub Vec<String>);

    impl UnmarshalValue for Seen {
        fn unmarshal_value(&mut self, value: &Value) -> Result<(), HookError> {
            self.0.push(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn value_hooks_receive_nulls() {
        let mut seen: Option<Seen> = None;
        unmarshal_into(&Value::null(Type::Dynamic), &mut seen).unwrap();
        assert!(seen.is_none());

        let mut seen = Seen::default();
        unmarshal_into(&Value::null(Type::Dynamic), &mut seen).unwrap();
        unmarshal_into(&Value::from(true), &mut seen).unwrap();
        assert_eq!(seen.0, ["null", "true"]);
    }
}
