//! Provide some tools for parsing attributes.
//!
//! This covers the `reflect` attribute at the type and field level, and
//! the `cty` / `hcl` field tags.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use flags::{HookFlags, TraitImplSwitches};

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;
