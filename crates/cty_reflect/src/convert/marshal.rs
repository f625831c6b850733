use alloc::string::{String, ToString};
use alloc::vec::Vec;

use cty_value::{Number, Type, Value, ValueKind};
use log::trace;

use crate::convert::fields::{field_ref, resolve};
use crate::convert::json::json_to_value;
use crate::convert::Error;
use crate::hooks::ReflectMarshalText;
use crate::info::{ScalarKind, TypeInfo};
use crate::ops::{ReflectRef, ScalarRef};
use crate::{Native, Reflect};

// -----------------------------------------------------------------------------
// Entry points

/// Converts a native value into a generic [`Value`].
///
/// At every level the first applicable rule wins:
///
/// 1. the type's value hook,
/// 2. its JSON serialize hook, decoded through [`json_to_value`],
/// 3. its text hook, producing a string,
/// 4. the structural rule of its kind.
///
/// Struct fields become object attributes in declaration order, leaving
/// out empty fields marked `omitempty`. Sequences become a list when all
/// elements share one primitive type and a tuple otherwise. Maps follow
/// the same rule, producing a map or an object.
///
/// # Examples
///
/// ```
/// use cty_reflect::convert::marshal;
/// use cty_reflect::derive::Reflect;
/// use cty_value::{Type, Value};
///
/// #[derive(Reflect, Default)]
/// pub struct Service {
///     pub name: String,
///     #[cty("replicas,omitempty")]
///     pub replicas: u32,
///     pub owner: Option<String>,
/// }
///
/// let service = Service { name: "api".into(), ..Default::default() };
/// let value = marshal(&service).unwrap();
///
/// assert_eq!(value.get_attr("name"), Some(&Value::from("api")));
/// assert_eq!(value.get_attr("replicas"), None);
/// assert_eq!(value.get_attr("owner"), Some(&Value::null(Type::String)));
/// ```
pub fn marshal(value: &dyn Reflect) -> Result<Value, Error> {
    let info = value.reflect_type_info();
    let hooks = info.hooks();

    if let Some(hook) = hooks.marshal_value() {
        trace!("marshal `{}` through its value hook", info.type_path());
        return hook
            .marshal_value(value)
            .map_err(|err| Error::hook(info.type_path(), err));
    }
    if let Some(hook) = hooks.serialize() {
        trace!("marshal `{}` through its serialize hook", info.type_path());
        let serialize = hook.get(value).ok_or_else(|| {
            Error::hook(info.type_path(), "serializer registered for another type".into())
        })?;
        let json = serde_json::to_value(serialize).map_err(Error::json)?;
        return json_to_value(json);
    }
    if let Some(hook) = hooks.marshal_text() {
        trace!("marshal `{}` through its text hook", info.type_path());
        return hook
            .marshal_text(value)
            .map(Value::string)
            .map_err(|err| Error::hook(info.type_path(), err));
    }

    match (value.reflect_ref(), info) {
        (ReflectRef::Struct(object), TypeInfo::Struct(struct_info)) => {
            let fields = resolve(struct_info);
            let mut attrs = Vec::with_capacity(fields.len());
            for field in fields.iter() {
                let Some(child) = field_ref(object, field.path()) else {
                    continue;
                };
                let child = marshal(child).map_err(|err| err.at_field(field.name()))?;
                if field.omit_empty() && is_empty(&child) {
                    continue;
                }
                attrs.push((field.name(), child));
            }
            Ok(Value::object(attrs))
        }
        (ReflectRef::Map(map), TypeInfo::Map(map_info)) => {
            let key_info = map_info.key_info();
            let key_hook = key_info.hooks().marshal_text();
            if key_hook.is_none() && !is_text_scalar(key_info) {
                return Err(Error::unsupported_key_type(key_info.type_path()));
            }

            let mut entries = Vec::with_capacity(map.len());
            for (key, item) in map.iter() {
                let key = map_key(key, key_hook)?;
                let item = marshal(item).map_err(|err| err.at_key(&key))?;
                entries.push((key, item));
            }
            keyed(entries, declared_type(map_info.value_info()))
        }
        (ReflectRef::List(list), TypeInfo::List(list_info)) => {
            let items = (0..list.len())
                .filter_map(|index| list.get(index))
                .enumerate()
                .map(|(index, item)| marshal(item).map_err(|err| err.at_index(index)))
                .collect::<Result<Vec<_>, _>>()?;
            sequence(items, declared_type(list_info.item_info()))
        }
        (ReflectRef::Array(array), TypeInfo::Array(array_info)) => {
            let items = (0..array.len())
                .filter_map(|index| array.get(index))
                .enumerate()
                .map(|(index, item)| marshal(item).map_err(|err| err.at_index(index)))
                .collect::<Result<Vec<_>, _>>()?;
            sequence(items, declared_type(array_info.item_info()))
        }
        (ReflectRef::Pointer(pointer), TypeInfo::Pointer(pointer_info)) => match pointer.get() {
            Some(pointee) => marshal(pointee),
            None => Ok(Value::null(declared_type(pointer_info.pointee_info()))),
        },
        (ReflectRef::Interface(interface), _) => marshal(interface.inner()),
        (ReflectRef::Scalar(scalar), _) => scalar_value(scalar.scalar()),
        (ReflectRef::Dynamic(native), _) => marshal_native(native),
        _ => Err(Error::unsupported_type(info.type_path())),
    }
}

/// Typed shorthand for [`marshal`].
#[inline]
pub fn marshal_value<T: Reflect>(value: &T) -> Result<Value, Error> {
    marshal(value)
}

// -----------------------------------------------------------------------------
// Helpers

/// `null`, `unknown`, `false`, zero, `""` and zero-length collections.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value.kind() {
        ValueKind::Null | ValueKind::Unknown => true,
        ValueKind::Bool => value.as_bool() == Some(false),
        ValueKind::Number => value.as_number().is_some_and(Number::is_zero),
        ValueKind::String => value.as_str().is_some_and(str::is_empty),
        _ => value.len() == Some(0),
    }
}

/// The primitive type a value of this native type marshals to, or
/// `Dynamic` when that cannot be known without a value.
fn declared_type(info: &TypeInfo) -> Type {
    match info {
        TypeInfo::Scalar(scalar) => match scalar.kind() {
            ScalarKind::Bool => Type::Bool,
            ScalarKind::Int | ScalarKind::Uint | ScalarKind::Float => Type::Number,
            ScalarKind::Char | ScalarKind::String => Type::String,
        },
        _ => Type::Dynamic,
    }
}

fn is_text_scalar(info: &TypeInfo) -> bool {
    matches!(info, TypeInfo::Scalar(scalar) if matches!(scalar.kind(), ScalarKind::String | ScalarKind::Char))
}

fn map_key(key: &dyn Reflect, hook: Option<&ReflectMarshalText>) -> Result<String, Error> {
    let type_path = key.reflect_type_info().type_path();
    if let Some(hook) = hook {
        return hook
            .marshal_text(key)
            .map_err(|err| Error::hook(type_path, err));
    }
    match key.reflect_ref() {
        ReflectRef::Scalar(scalar) => match scalar.scalar() {
            ScalarRef::Str(text) => Ok(text.into()),
            ScalarRef::Char(ch) => Ok(ch.to_string()),
            _ => Err(Error::unsupported_key_type(type_path)),
        },
        _ => Err(Error::unsupported_key_type(type_path)),
    }
}

/// Returns the primitive type shared by all values, if any.
fn common_primitive<'a>(mut values: impl Iterator<Item = &'a Value>) -> Option<Type> {
    let ty = values.next()?.ty();
    (ty.is_primitive() && values.all(|value| value.ty() == ty)).then_some(ty)
}

fn sequence(items: Vec<Value>, declared: Type) -> Result<Value, Error> {
    if items.is_empty() {
        return Ok(if declared.is_primitive() {
            Value::empty_list(declared)
        } else {
            Value::empty_tuple()
        });
    }
    if common_primitive(items.iter()).is_some() {
        Value::list(items).map_err(Error::not_representable)
    } else {
        Ok(Value::tuple(items))
    }
}

fn keyed(mut entries: Vec<(String, Value)>, declared: Type) -> Result<Value, Error> {
    if entries.is_empty() {
        return Ok(Value::empty_map(declared));
    }
    if common_primitive(entries.iter().map(|(_, value)| value)).is_some() {
        Value::map(entries).map_err(Error::not_representable)
    } else {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(Value::object(entries))
    }
}

fn scalar_value(scalar: ScalarRef<'_>) -> Result<Value, Error> {
    let number = match scalar {
        ScalarRef::Bool(value) => return Ok(Value::bool(value)),
        ScalarRef::Char(value) => return Ok(Value::string(value)),
        ScalarRef::Str(value) => return Ok(Value::string(value)),
        ScalarRef::Int(value) => Number::from(value),
        ScalarRef::Uint(value) => Number::from(value),
        ScalarRef::Float32(value) => Number::from_f32(value).map_err(Error::not_representable)?,
        ScalarRef::Float64(value) => Number::from_f64(value).map_err(Error::not_representable)?,
    };
    Ok(Value::number(number))
}

fn marshal_native(native: &Native) -> Result<Value, Error> {
    match native {
        Native::Null => Ok(Value::null(Type::Dynamic)),
        Native::Bool(value) => Ok(Value::bool(*value)),
        Native::Number(value) => Ok(Value::number(value.clone())),
        Native::String(value) => Ok(Value::string(value.as_str())),
        Native::List(items) => {
            let items = items
                .iter()
                .enumerate()
                .map(|(index, item)| marshal_native(item).map_err(|err| err.at_index(index)))
                .collect::<Result<Vec<_>, _>>()?;
            sequence(items, Type::Dynamic)
        }
        Native::Map(entries) => {
            let entries = entries
                .iter()
                .map(|(key, item)| {
                    marshal_native(item)
                        .map(|item| (key.clone(), item))
                        .map_err(|err| err.at_key(key))
                })
                .collect::<Result<Vec<_>, _>>()?;
            keyed(entries, Type::Dynamic)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use cty_value::{Number, Type, Value, ValueKind};

    use super::{is_empty, marshal, marshal_value};
    use crate::convert::Error;
    use crate::derive::Reflect;
    use crate::hooks::{HookError, MarshalText, MarshalValue};
    use crate::{Native, Reflect};

    #[derive(Reflect, Default)]
    pub struct Limits {
        #[cty("cpu,omitempty")]
        pub cpu: f64,
        #[cty("memory,omitempty")]
        pub memory: Option<u64>,
        #[hcl("labels,omitempty")]
        pub labels: Vec<String>,
        pub burst: bool,
    }

    #[test]
    fn omit_empty_drops_only_marked_fields() {
        let value = marshal(&Limits::default()).unwrap();
        assert_eq!(value, Value::object([("burst", Value::from(false))]));

        let limits = Limits {
            cpu: 0.5,
            memory: Some(0),
            labels: vec!["a".into()],
            burst: true,
        };
        let value = marshal(&limits).unwrap();
        assert_eq!(value.get_attr("cpu"), Some(&Value::from(Number::from_f64(0.5).unwrap())));
        // A zero pointee is empty too.
        assert_eq!(value.get_attr("memory"), None);
        assert_eq!(value.len(), Some(3));
    }

    #[derive(Reflect, Default)]
    pub struct Note {
        #[cty("remark,omitempty")]
        pub remark: String,
        pub title: String,
    }

    #[test]
    fn omit_empty_strings() {
        let value = marshal(&Note::default()).unwrap();
        assert_eq!(value.get_attr("remark"), None);
        assert_eq!(value.get_attr("title"), Some(&Value::from("")));

        let note = Note {
            remark: "draft".into(),
            title: String::new(),
        };
        let value = marshal(&note).unwrap();
        assert_eq!(value.get_attr("remark"), Some(&Value::from("draft")));
    }

    #[test]
    fn sequences_detect_heterogeneity() {
        let numbers = marshal_value(&vec![1_i32, 2, 3]).unwrap();
        assert_eq!(numbers.kind(), ValueKind::List);
        assert_eq!(numbers.ty(), Type::list(Type::Number));

        let mixed = Native::List(vec![
            Native::from(Number::from(1)),
            Native::from("a"),
            Native::from(true),
        ]);
        let mixed = marshal(&mixed).unwrap();
        assert_eq!(mixed.kind(), ValueKind::Tuple);
        assert_eq!(mixed.len(), Some(3));

        let nested = marshal_value(&vec![vec![1_u8], vec![]]).unwrap();
        assert_eq!(nested.kind(), ValueKind::Tuple);
    }

    #[test]
    fn typed_empties_and_nulls() {
        assert_eq!(
            marshal_value(&Vec::<String>::new()).unwrap(),
            Value::empty_list(Type::String)
        );
        assert_eq!(
            marshal_value(&[0_u8; 0]).unwrap(),
            Value::empty_list(Type::Number)
        );
        assert_eq!(
            marshal_value(&Vec::<Native>::new()).unwrap(),
            Value::empty_tuple()
        );
        assert_eq!(
            marshal_value(&BTreeMap::<String, bool>::new()).unwrap(),
            Value::empty_map(Type::Bool)
        );
        assert_eq!(
            marshal_value(&None::<i64>).unwrap(),
            Value::null(Type::Number)
        );
        assert_eq!(
            marshal_value(&None::<Vec<i64>>).unwrap(),
            Value::null(Type::Dynamic)
        );
        let erased: Box<dyn Reflect> = Box::new(Native::Null);
        assert_eq!(marshal_value(&erased).unwrap(), Value::null(Type::Dynamic));
    }

    #[test]
    fn maps_fall_back_to_objects() {
        let mut ports = HashMap::new();
        ports.insert(String::from("http"), 80_u16);
        ports.insert(String::from("https"), 443);
        let value = marshal_value(&ports).unwrap();
        assert_eq!(value.ty(), Type::map(Type::Number));
        assert_eq!(value.get_attr("https"), Some(&Value::from(443)));

        let mut mixed = BTreeMap::new();
        mixed.insert(String::from("b"), Native::from("x"));
        mixed.insert(String::from("a"), Native::from(true));
        let value = marshal_value(&mixed).unwrap();
        assert_eq!(value.kind(), ValueKind::Object);

        let mut by_char = BTreeMap::new();
        by_char.insert('x', 1_i8);
        assert_eq!(
            marshal_value(&by_char).unwrap(),
            Value::map([("x", Value::from(1))]).unwrap()
        );
    }

    #[derive(Reflect, Default, PartialEq, Eq, PartialOrd, Ord)]
    #[reflect(opaque, default, marshal_text)]
    pub struct Zone(u8);

    impl MarshalText for Zone {
        fn marshal_text(&self) -> Result<String, HookError> {
            Ok(alloc::format!("zone-{}", self.0))
        }
    }

    #[test]
    fn map_keys_use_text_hooks() {
        let mut zones = BTreeMap::new();
        zones.insert(Zone(2), "b");
        zones.insert(Zone(1), "a");
        let value = marshal_value(&zones).unwrap();
        assert_eq!(value.get_attr("zone-1"), Some(&Value::from("a")));

        let mut by_int = BTreeMap::new();
        by_int.insert(1_u32, "a");
        assert!(matches!(
            marshal_value(&by_int),
            Err(Error::UnsupportedKeyType { type_path: "u32", .. })
        ));
    }

    #[derive(Reflect)]
    #[reflect(opaque, marshal_value)]
    pub struct Secret;

    impl MarshalValue for Secret {
        fn marshal_value(&self) -> Result<Value, HookError> {
            Err("secrets are not exported".into())
        }
    }

    #[derive(Reflect)]
    pub struct Vault {
        pub entries: Vec<Secret>,
    }

    #[derive(Reflect)]
    #[reflect(opaque)]
    pub struct Handle(pub u32);

    #[test]
    fn errors_carry_their_path() {
        let vault = Vault {
            entries: vec![Secret, Secret],
        };
        let err = marshal(&vault).unwrap_err();
        assert!(matches!(err, Error::Hook { .. }));
        assert_eq!(err.path().to_string(), ".entries[0]");

        let readings = vec![1.0_f64, f64::NAN];
        let err = marshal_value(&readings).unwrap_err();
        assert!(matches!(err, Error::NotRepresentable { .. }));
        assert_eq!(err.path().to_string(), "[1]");

        let err = marshal_value(&Handle(1)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
        assert!(err.path().is_root());
    }

    #[test]
    fn emptiness() {
        assert!(is_empty(&Value::null(Type::String)));
        assert!(is_empty(&Value::from(0)));
        assert!(is_empty(&Value::from("")));
        assert!(is_empty(&Value::empty_tuple()));
        assert!(is_empty(&Value::object(Vec::<(String, Value)>::new())));
        assert!(!is_empty(&Value::from(true)));
        assert!(!is_empty(&Value::tuple([Value::null(Type::Dynamic)])));
    }

    #[test]
    fn scalars() {
        assert_eq!(marshal_value(&'x').unwrap(), Value::from("x"));
        assert_eq!(marshal_value(&u64::MAX).unwrap(), Value::from(u64::MAX));
        assert_eq!(
            marshal_value(&0.1_f32).unwrap().as_number().unwrap().to_string(),
            "0.1"
        );
        assert_eq!(marshal_value(&"static").unwrap(), Value::from("static"));
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    pub struct Extremes {
        #[cty("tiny,omitempty")]
        pub tiny: f64,
        pub huge: f64,
        pub widest: u128,
    }

    #[test]
    fn numbers_keep_every_magnitude() {
        assert_eq!(marshal_value(&1e30_f64).unwrap().to_string(), "1e30");
        assert_eq!(
            marshal_value(&f64::MAX).unwrap().to_string(),
            "1.7976931348623157e308"
        );
        assert_eq!(marshal_value(&5e-324_f64).unwrap().to_string(), "5e-324");
        assert_eq!(
            marshal_value(&u128::MAX).unwrap().to_string(),
            u128::MAX.to_string()
        );

        let extremes = Extremes {
            tiny: 1e-30,
            huge: f64::MAX,
            widest: u128::MAX,
        };
        let value = marshal(&extremes).unwrap();
        assert!(value.get_attr("tiny").is_some());

        let decoded: Extremes = crate::convert::unmarshal_new(&value).unwrap();
        assert_eq!(decoded, extremes);
    }
}
