//! Conversion between native values and generic [`Value`](cty_value::Value)s.
//!
//! ## Menu
//!
//! - [`marshal`] / [`marshal_value`]: native value to generic value.
//! - [`unmarshal`] / [`unmarshal_into`] / [`unmarshal_new`]: generic value
//!   into a native value.
//! - [`convert_value`]: generic value to a [`Native`](crate::Native) tree.
//! - [`value_to_json`] / [`json_to_value`] and their string forms: the JSON
//!   bridge used by the serde hooks.
//! - [`dump_value`]: compact JSON for debug output.
//! - [`resolve`]: the cached field layout of a struct.
//!
//! Every failure is an [`Error`] that records the [`ConvertPath`] of the
//! value it is about.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use cty_reflect::convert::{marshal, unmarshal_new};
//! use cty_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! pub struct Route {
//!     pub path: String,
//!     #[cty("methods,omitempty")]
//!     pub methods: Vec<String>,
//! }
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! pub struct Site {
//!     #[hcl("host")]
//!     pub hostname: String,
//!     pub routes: BTreeMap<String, Route>,
//! }
//!
//! let mut site = Site { hostname: "example.org".into(), ..Default::default() };
//! site.routes.insert("home".into(), Route { path: "/".into(), methods: vec![] });
//!
//! let value = marshal(&site).unwrap();
//! assert_eq!(value.to_string(), r#"{"host" = "example.org", "routes" = {"home" = {"path" = "/"}}}"#);
//!
//! let decoded: Site = unmarshal_new(&value).unwrap();
//! assert_eq!(decoded, site);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod fields;
mod indirect;
mod json;
mod marshal;
mod native;
mod path;
mod unmarshal;

// -----------------------------------------------------------------------------
// Exports

pub use error::Error;
pub use fields::{FieldDescriptor, resolve};
pub use json::{from_json_str, json_to_value, to_json_string, value_to_json};
pub use marshal::{marshal, marshal_value};
pub use native::{convert_value, dump_value};
pub use path::{ConvertPath, Segment};
pub use unmarshal::{unmarshal, unmarshal_into, unmarshal_new};
