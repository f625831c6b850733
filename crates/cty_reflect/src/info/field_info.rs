use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// Besides its name and type, a field records what the conversion engine
/// needs to lay out a struct: the raw `cty` and `hcl` tags, whether the
/// field is `pub`, and whether it is an embedded struct whose fields are
/// flattened into the parent.
#[derive(Clone, Copy, Debug)]
pub struct NamedField {
    name: &'static str,
    ty_id: TypeId,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    cty_tag: Option<&'static str>,
    hcl_tag: Option<&'static str>,
    public: bool,
    embedded: bool,
}

impl NamedField {
    /// Creates a new public, untagged field named `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_info: T::type_info,
            cty_tag: None,
            hcl_tag: None,
            public: true,
            embedded: false,
        }
    }

    /// Sets the raw `cty` tag, e.g. `"name,omitempty"`.
    #[inline]
    pub const fn with_cty_tag(mut self, tag: &'static str) -> Self {
        self.cty_tag = Some(tag);
        self
    }

    /// Sets the raw `hcl` tag, e.g. `"name,attr"`.
    #[inline]
    pub const fn with_hcl_tag(mut self, tag: &'static str) -> Self {
        self.hcl_tag = Some(tag);
        self
    }

    /// Marks the field as visible outside its module.
    #[inline]
    pub const fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Marks the field as an embedded struct.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn cty_tag(&self) -> Option<&'static str> {
        self.cty_tag
    }

    #[inline]
    pub const fn hcl_tag(&self) -> Option<&'static str> {
        self.hcl_tag
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.public
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}
