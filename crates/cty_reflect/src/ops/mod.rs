//! Kind-specific access to reflected values.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`](crate::Reflect). Each gives
//! the conversion engine the access it needs for one [`ReflectKind`]:
//!
//! - [`Struct`]: named fields, by declaration index.
//! - [`List`]: resizable sequences (e.g. `Vec<i32>`).
//! - [`Array`]: fixed-size sequences (e.g. `[i32; 4]`).
//! - [`Map`]: keyed collections (e.g. `HashMap<String, i32>`).
//! - [`Pointer`]: `Option<T>` and `Box<T>`.
//! - [`Interface`]: `Box<dyn Reflect>`.
//! - [`Scalar`]: bool, numbers, `char` and strings, read and written
//!   through [`ScalarRef`].
//!
//! [`Native`](crate::Native) is accessed directly, see [`ReflectRef::Dynamic`].
//!
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use array_ops::Array;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::List;
pub use map_ops::Map;
pub use pointer_ops::{Interface, Pointer};
pub use scalar_ops::{Scalar, ScalarError, ScalarRef};
pub use struct_ops::Struct;
