use crate::Reflect;
use crate::convert::Error;
use crate::hooks::{ReflectDeserialize, ReflectUnmarshalText, ReflectUnmarshalValue};
use crate::info::TypeInfo;
use crate::ops::ReflectMut;

/// Where a decoded value should go.
pub(crate) enum Indirect<'a> {
    /// The target decodes values itself.
    Value(&'a mut dyn Reflect, ReflectUnmarshalValue),
    /// The target decodes JSON itself.
    Json(&'a mut dyn Reflect, ReflectDeserialize),
    /// The target decodes strings itself.
    Text(&'a mut dyn Reflect, ReflectUnmarshalText),
    /// No hook; the engine fills the target by its kind.
    Concrete(&'a mut dyn Reflect),
}

/// Walks through pointers and interfaces until a hook or a non-indirect
/// target is found, allocating empty pointers on the way.
///
/// With `decoding_null` the walk stops at the first nullable pointer and
/// at any interface, which the caller then resets. Text hooks are skipped
/// in that case since text cannot express absence.
pub(crate) fn indirect(
    mut target: &mut dyn Reflect,
    decoding_null: bool,
) -> Result<Indirect<'_>, Error> {
    loop {
        let info = target.reflect_type_info();
        let hooks = info.hooks();

        if let Some(hook) = hooks.unmarshal_value() {
            return Ok(Indirect::Value(target, *hook));
        }
        if let Some(hook) = hooks.deserialize() {
            return Ok(Indirect::Json(target, *hook));
        }
        if !decoding_null
            && let Some(hook) = hooks.unmarshal_text()
        {
            return Ok(Indirect::Text(target, *hook));
        }

        target = match info {
            TypeInfo::Pointer(pointer_info) => {
                if decoding_null && pointer_info.is_nullable() {
                    return Ok(Indirect::Concrete(target));
                }
                let ReflectMut::Pointer(pointer) = target.reflect_mut() else {
                    return Err(inconsistent(info));
                };
                if pointer.get().is_none() {
                    let pointee = pointer_info.pointee_info();
                    let Some(default) = pointee.hooks().default_value() else {
                        return Err(Error::invalid_target(
                            info.type_path(),
                            "pointee has no default value to allocate",
                        ));
                    };
                    pointer
                        .set_pointee(default.default())
                        .map_err(|_| inconsistent(info))?;
                }
                match pointer.get_mut() {
                    Some(pointee) => pointee,
                    None => return Err(inconsistent(info)),
                }
            }
            TypeInfo::Interface(_) => {
                if decoding_null {
                    return Ok(Indirect::Concrete(target));
                }
                let ReflectMut::Interface(interface) = target.reflect_mut() else {
                    return Err(inconsistent(info));
                };
                interface.inner_mut()
            }
            _ => return Ok(Indirect::Concrete(target)),
        };
    }
}

fn inconsistent(info: &'static TypeInfo) -> Error {
    Error::invalid_target(info.type_path(), "reflection does not match its type info")
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::{Indirect, indirect};
    use crate::Reflect;

    #[test]
    fn allocates_empty_options() {
        let mut target: Option<Option<u8>> = None;
        let Indirect::Concrete(inner) = indirect(&mut target, false).unwrap() else {
            panic!("expected a concrete target");
        };
        *inner.downcast_mut::<u8>().unwrap() = 3;
        assert_eq!(target, Some(Some(3)));
    }

    #[test]
    fn null_stops_at_first_option() {
        let mut target: Option<Option<u8>> = Some(Some(1));
        let Indirect::Concrete(outer) = indirect(&mut target, true).unwrap() else {
            panic!("expected a concrete target");
        };
        assert!(outer.is::<Option<Option<u8>>>());
    }

    #[test]
    fn descends_into_boxes_and_interfaces() {
        let mut boxed: Box<u16> = Box::new(1);
        let Indirect::Concrete(inner) = indirect(&mut boxed, true).unwrap() else {
            panic!("expected a concrete target");
        };
        assert!(inner.is::<u16>());

        let mut erased: Box<dyn Reflect> = Box::new(String::from("x"));
        let Indirect::Concrete(inner) = indirect(&mut erased, false).unwrap() else {
            panic!("expected a concrete target");
        };
        assert!(inner.is::<String>());
    }
}
