//! Items used by the code generated from `#[derive(Reflect)]`.
//!
//! Not public API.

#[doc(hidden)]
pub mod macro_utils {
    pub use ::core::any::TypeId;
    pub use ::core::option::Option;
    pub use ::core::result::Result;
    pub use ::alloc::boxed::Box;
}
