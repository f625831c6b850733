#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::cty_reflect::...` paths, which must also
// resolve inside this crate and its doc tests.
extern crate self as cty_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod native;
mod reflection;

pub mod convert;
pub mod hooks;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use native::Native;
pub use reflection::Reflect;

#[cfg(feature = "derive")]
pub use cty_reflect_derive as derive;
