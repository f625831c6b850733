use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::{PoisonError, RwLock};

use cty_utils::TypeIdMap;
use log::{debug, trace};

use crate::Reflect;
use crate::info::{NamedField, StructInfo};
use crate::ops::{ReflectMut, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// FieldDescriptor

/// A struct field as seen by the conversion engine.
///
/// Produced by [`resolve`]. Fields of embedded structs are flattened into
/// their parent, so `path` may be longer than one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: Box<str>,
    path: Box<[usize]>,
    omit_empty: bool,
}

impl FieldDescriptor {
    /// The attribute name used in the generic value.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field indices from the outer struct down to this field.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Whether an empty value is left out when marshaling.
    #[inline]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }
}

// -----------------------------------------------------------------------------
// Resolve

static CACHE: RwLock<TypeIdMap<Arc<[FieldDescriptor]>>> = RwLock::new(TypeIdMap::new());

/// Returns the convertible fields of a struct, in declaration order.
///
/// Naming rules, per field:
///
/// - The first part of the `cty` tag is the name. `"-"` skips the field.
/// - If that part is empty, the `hcl` tag is used the same way.
/// - If both are empty, the field name is converted to snake case.
/// - `omitempty` among the options of the `cty` tag (or of the `hcl` tag
///   when there is no `cty` tag) sets [`FieldDescriptor::omit_empty`].
/// - Embedded struct fields contribute their own fields instead.
/// - Non-public fields are skipped.
///
/// Results are computed once per type and shared by every caller.
///
/// # Examples
///
/// ```
/// use cty_reflect::convert::resolve;
/// use cty_reflect::derive::Reflect;
/// use cty_reflect::info::Typed;
///
/// #[derive(Reflect, Default)]
/// #[allow(non_snake_case)]
/// pub struct Listener {
///     #[cty("addr,omitempty")]
///     pub address: String,
///     #[hcl("-")]
///     pub cached: bool,
///     pub MaxConns: u32,
/// }
///
/// let info = Listener::type_info().as_struct().unwrap();
/// let fields = resolve(info);
///
/// let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["addr", "max_conns"]);
/// assert!(fields[0].omit_empty());
/// ```
pub fn resolve(info: &'static StructInfo) -> Arc<[FieldDescriptor]> {
    let type_id = info.type_id();

    if let Some(fields) = CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
    {
        return fields.clone();
    }

    let computed: Arc<[FieldDescriptor]> = compute(info).into();

    let mut cache = CACHE.write().unwrap_or_else(PoisonError::into_inner);
    let stored = cache.get_or_insert(type_id, || computed.clone()).clone();
    if Arc::ptr_eq(&stored, &computed) {
        debug!(
            "cached {} field descriptors of `{}`",
            stored.len(),
            info.type_path()
        );
    } else {
        trace!("discarded concurrently computed fields of `{}`", info.type_path());
    }
    stored
}

fn compute(info: &'static StructInfo) -> Vec<FieldDescriptor> {
    let mut fields = Vec::with_capacity(info.field_len());

    for (index, field) in info.iter().enumerate() {
        let Some(name) = attribute_name(field) else {
            continue;
        };

        if field.is_embedded() {
            if let Ok(embedded) = field.type_info().as_struct() {
                fields.extend(resolve(embedded).iter().map(|inner| {
                    let mut path = Vec::with_capacity(inner.path.len() + 1);
                    path.push(index);
                    path.extend_from_slice(&inner.path);
                    FieldDescriptor {
                        name: inner.name.clone(),
                        path: path.into(),
                        omit_empty: inner.omit_empty,
                    }
                }));
            }
            continue;
        }

        if !field.is_public() {
            continue;
        }

        fields.push(FieldDescriptor {
            name,
            path: Box::new([index]),
            omit_empty: omit_empty(field),
        });
    }

    fields
}

fn tagged(tag: Option<&'static str>) -> &'static str {
    tag.and_then(|tag| tag.split(',').next()).unwrap_or("")
}

/// `None` if the field is skipped with `"-"`.
fn attribute_name(field: &NamedField) -> Option<Box<str>> {
    let name = match tagged(field.cty_tag()) {
        "-" => return None,
        "" => match tagged(field.hcl_tag()) {
            "-" => return None,
            "" => return Some(snake_case(field.name()).into_boxed_str()),
            name => name,
        },
        name => name,
    };
    Some(name.into())
}

fn omit_empty(field: &NamedField) -> bool {
    let tag = match field.cty_tag() {
        Some(tag) if !tag.is_empty() => tag,
        _ => field.hcl_tag().unwrap_or(""),
    };
    tag.split(',').skip(1).any(|option| option.trim() == "omitempty")
}

fn snake_case(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let mut result = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            result.push('_');
        }
        result.push(ch.to_ascii_lowercase());
    }
    result
}

// -----------------------------------------------------------------------------
// Field access

pub(crate) fn field_ref<'a>(target: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (&last, parents) = path.split_last()?;
    let mut current = target;
    for &index in parents {
        current = match current.field_at(index)?.reflect_ref() {
            ReflectRef::Struct(inner) => inner,
            _ => return None,
        };
    }
    current.field_at(last)
}

pub(crate) fn field_mut<'a>(
    target: &'a mut dyn Struct,
    path: &[usize],
) -> Option<&'a mut dyn Reflect> {
    let (&last, parents) = path.split_last()?;
    let mut current = target;
    for &index in parents {
        current = match current.field_at_mut(index)?.reflect_mut() {
            ReflectMut::Struct(inner) => inner,
            _ => return None,
        };
    }
    current.field_at_mut(last)
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use super::{field_mut, field_ref, resolve, snake_case};
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::Struct;

    #[derive(Reflect, Default)]
    pub struct Meta {
        pub id: u64,
        #[cty("labels,omitempty")]
        pub tags: Vec<String>,
    }

    #[derive(Reflect, Default)]
    #[allow(non_snake_case)]
    pub struct Record {
        #[reflect(embed)]
        pub meta: Meta,
        #[cty("display_name")]
        #[hcl("name")]
        pub name: String,
        #[hcl("note,omitempty")]
        pub note: String,
        #[cty("-")]
        pub skipped: bool,
        pub HTTPPort: u16,
        hidden: u8,
    }

    fn names(fields: &[super::FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|field| field.name()).collect()
    }

    #[test]
    fn naming_and_flattening() {
        let fields = resolve(Record::type_info().as_struct().unwrap());
        assert_eq!(
            names(&fields),
            ["id", "labels", "display_name", "note", "h_t_t_p_port"]
        );
        assert_eq!(fields[0].path(), [0, 0]);
        assert_eq!(fields[1].path(), [0, 1]);
        assert!(fields[1].omit_empty());
        assert!(fields[3].omit_empty());
        assert!(!fields[2].omit_empty());
    }

    #[test]
    fn snake_case_conversion() {
        assert_eq!(snake_case("MaxConns"), "max_conns");
        assert_eq!(snake_case("port"), "port");
        assert_eq!(snake_case("r#type"), "type");
    }

    #[test]
    fn embedded_paths_reach_fields() {
        let mut record = Record {
            hidden: 1,
            ..Record::default()
        };
        record.meta.id = 7;
        let fields = resolve(Record::type_info().as_struct().unwrap());

        let id = field_ref(&record, fields[0].path()).unwrap();
        assert_eq!(id.downcast_ref::<u64>(), Some(&7));

        *field_mut(&mut record, fields[2].path())
            .unwrap()
            .downcast_mut::<String>()
            .unwrap() = "web".into();
        assert_eq!(record.name, "web");
        assert_eq!(record.field_len(), 6);
        assert_eq!(record.hidden, 1);
    }

    #[test]
    fn cache_is_shared_across_threads() {
        #[derive(Reflect, Default)]
        pub struct Shared {
            pub a: i32,
            pub b: String,
        }

        let info = Shared::type_info().as_struct().unwrap();
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| resolve(info))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = resolve(info);
        assert!(results.iter().all(|fields| Arc::ptr_eq(fields, &first)));
        assert_eq!(names(&first), ["a", "b"]);
    }
}
