use alloc::boxed::Box;

use crate::hooks::TypeHooks;
use crate::info::{NamedField, TypeIdent, impl_hooks_fn, impl_type_fn};
use crate::ops::Struct;

/// Information for a struct with named fields.
///
/// Fields keep their declaration order, which is also the order of the
/// attributes of a marshaled object.
///
/// # Examples
///
/// ```
/// use cty_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// pub struct Server {
///     #[cty("listen_addr")]
///     pub addr: String,
///     pub port: u16,
/// }
///
/// let info = Server::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("port"), Some(1));
/// assert_eq!(info.field_at(0).unwrap().cty_tag(), Some("listen_addr"));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: TypeIdent,
    fields: Box<[NamedField]>,
    hooks: TypeHooks,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_hooks_fn!(hooks);

    /// Creates a new [`StructInfo`] from the fields in declaration order.
    pub fn new<T: Struct>(fields: &[NamedField]) -> Self {
        Self {
            ty: TypeIdent::of::<T>(),
            fields: fields.into(),
            hooks: TypeHooks::EMPTY,
        }
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the field with the given declared name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the index of the field with the given declared name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }
}
