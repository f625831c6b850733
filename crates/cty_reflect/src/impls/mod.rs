//! Built-in reflection implementations, and the cells used to implement
//! [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement `Typed` for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement `Typed` for generic types.
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `bool`, `char`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `String`, `&'static str` (read-only)
//! - sequences: `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - maps: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`,
//!   `hashbrown::HashMap<K, V, S>`
//! - pointers: `Option<T>`, `Box<T>`
//! - interface: `Box<dyn Reflect>`
//! - dynamic: [`Native`](crate::Native)
//!
//! Every built-in type registers a default constructor in its
//! [`TypeHooks`](crate::hooks::TypeHooks).

// -----------------------------------------------------------------------------
// Modules

mod array;
mod cell;
mod list;
mod map;
mod pointer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
