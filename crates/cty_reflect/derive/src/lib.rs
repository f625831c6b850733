//! See [`Reflect`](derive@Reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static CTY_ATTRIBUTE_NAME: &str = "cty";
static HCL_ATTRIBUTE_NAME: &str = "hcl";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Structs with named fields are reflected as `Struct`. Every other
/// shape (tuple structs, unit structs, enums) must be marked `opaque`,
/// unit structs are treated as opaque automatically.
///
/// ## Field Tags
///
/// A field may carry a `cty` tag and an `hcl` tag. Both are raw strings
/// of the form `"name,option,..."`, the conversion engine reads them when
/// it lays out the struct:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Server {
///     #[cty("listen_addr")]
///     pub addr: String,
///     #[hcl("port,omitempty")]
///     pub port: u16,
///     #[cty("-")]
///     pub scratch: Vec<u8>,
/// }
/// ```
///
/// Only `pub` fields take part in conversion; private fields are still
/// reflected and visible through `Struct`.
///
/// ## Embedded Structs
///
/// `#[reflect(embed)]` marks a field whose struct fields are flattened into
/// the parent:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Common { pub id: String }
///
/// #[derive(Reflect)]
/// pub struct Backend {
///     #[reflect(embed)]
///     pub common: Common,
///     pub port: u16,
/// }
/// ```
///
/// This attribute can only be applied to fields.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` hides the fields of a type. Opaque values can only
/// be converted through their hooks.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(opaque, marshal_text, unmarshal_text)]
/// pub struct Duration(u64);
/// ```
///
/// ## Hooks
///
/// The macro cannot detect which traits a type implements, so the
/// available ones are declared with flags. Each flag registers the
/// matching hook in the type's `TypeHooks`:
///
/// - `default`: `Default`, used to allocate list items, map values and
///   pointees, and to reset opaque values on null.
/// - `marshal_value` / `unmarshal_value`: `MarshalValue` / `UnmarshalValue`.
/// - `serialize` / `deserialize`: `serde::Serialize` / `serde::Deserialize`.
/// - `marshal_text` / `unmarshal_text`: `MarshalText` / `UnmarshalText`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Serialize, Deserialize)]
/// #[reflect(opaque, default, serialize, deserialize)]
/// pub struct Version { major: u32, minor: u32 }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Disabling Implementations
///
/// `typed = false` and `reflect = false` skip the matching trait, which
/// must then be implemented by hand:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(opaque, typed = false)]
/// pub struct Token(u64);
///
/// impl Typed for Token { /* ... */ }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, cty, hcl))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
