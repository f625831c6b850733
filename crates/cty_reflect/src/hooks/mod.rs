//! Per-type conversion hooks.
//!
//! A type can take over its own conversion instead of being walked
//! structurally. The conversion engine looks for hooks in this order:
//!
//! 1. [`MarshalValue`] / [`UnmarshalValue`]: convert directly to and from a
//!    [`Value`](cty_value::Value).
//! 2. [`ReflectSerialize`] / [`ReflectDeserialize`]: go through JSON using
//!    the type's `serde` implementation.
//! 3. [`MarshalText`] / [`UnmarshalText`]: convert to and from a string.
//!
//! Hooks are registered on the type's [`TypeInfo`](crate::info::TypeInfo)
//! as a [`TypeHooks`] table, usually by `#[derive(Reflect)]`:
//!
//! ```
//! use cty_reflect::derive::Reflect;
//! use cty_reflect::hooks::{HookError, MarshalText, UnmarshalText};
//! use cty_reflect::info::Typed;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(opaque, default, marshal_text, unmarshal_text)]
//! pub struct Celsius(f64);
//!
//! impl MarshalText for Celsius {
//!     fn marshal_text(&self) -> Result<String, HookError> {
//!         Ok(format!("{}C", self.0))
//!     }
//! }
//!
//! impl UnmarshalText for Celsius {
//!     fn unmarshal_text(&mut self, text: &str) -> Result<(), HookError> {
//!         self.0 = text.trim_end_matches('C').parse()?;
//!         Ok(())
//!     }
//! }
//!
//! let hooks = Celsius::type_info().hooks();
//! assert!(hooks.marshal_text().is_some());
//! assert!(hooks.marshal_value().is_none());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod default;
mod from_type;
mod json;
mod text;
mod type_hooks;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use default::ReflectDefault;
pub use from_type::FromType;
pub use json::{ReflectDeserialize, ReflectSerialize};
pub use text::{MarshalText, ReflectMarshalText, ReflectUnmarshalText, UnmarshalText};
pub use type_hooks::TypeHooks;
pub use value::{MarshalValue, ReflectMarshalValue, ReflectUnmarshalValue, UnmarshalValue};

/// The error type returned by user hooks.
pub type HookError = Box<dyn core::error::Error + Send + Sync>;

// -----------------------------------------------------------------------------
// Internal API

use alloc::format;

use crate::Reflect;

/// The error of a hook called with a value of the wrong type.
pub(crate) fn mismatch<T>(value: &dyn Reflect) -> HookError {
    format!(
        "hook of `{}` called with `{}`",
        core::any::type_name::<T>(),
        value.reflect_type_info().type_path(),
    )
    .into()
}
