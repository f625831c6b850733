//! Static type information.
//!
//! ## Menu
//!
//! - [`TypeIdent`]: a [`TypeId`](core::any::TypeId) plus the type path.
//! - [`TypeInfo`]: an enum over the kind-specific information:
//!     - [`StructInfo`]: named fields with their tags, see [`NamedField`].
//!     - [`ListInfo`]: resizable sequences (`Vec<T>`, `VecDeque<T>`).
//!     - [`ArrayInfo`]: fixed-size sequences (`[T; N]`).
//!     - [`MapInfo`]: keyed collections (`HashMap<K, V>`, `BTreeMap<K, V>`).
//!     - [`PointerInfo`]: `Option<T>` (nullable) and `Box<T>`.
//!     - [`InterfaceInfo`]: `Box<dyn Reflect>`.
//!     - [`ScalarInfo`]: bool, numbers, `char` and strings.
//!     - [`DynamicInfo`]: [`Native`](crate::Native).
//!     - [`OpaqueInfo`]: types only convertible through hooks.
//! - [`ReflectKind`]: the kind of a type, without the information.
//! - [`Typed`] / [`DynamicTyped`]: static and dynamic access to [`TypeInfo`].
//!
//! Every [`TypeInfo`] carries a [`TypeHooks`](crate::hooks::TypeHooks)
//! table describing which conversion hooks the type opted into.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_ident;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_ident::{impl_hooks_fn, impl_type_fn};

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::{DynamicInfo, OpaqueInfo};
pub use pointer_info::{InterfaceInfo, PointerInfo};
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_ident::TypeIdent;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use typed::{DynamicTyped, Typed};
