#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod number;
mod ty;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use error::ValueError;
pub use number::Number;
pub use ty::Type;
pub use value::{Entries, Value, ValueKind};

pub use indexmap::IndexMap;
