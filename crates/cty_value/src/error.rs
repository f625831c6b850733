use alloc::string::String;

use thiserror::Error;

use crate::Type;

/// Errors raised while constructing a [`Value`](crate::Value) or a [`Number`](crate::Number).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A `list` or `map` was given elements of different types.
    #[error("inconsistent element types: expected {expected}, found {found} at element {at}")]
    Inconsistent {
        expected: Type,
        found: Type,
        at: String,
    },
    /// A `list` or `map` was built from zero elements without an element type.
    #[error("cannot infer the element type of an empty {0}, use the typed empty constructor")]
    EmptyCollection(&'static str),
    /// The number is not finite.
    #[error("number is not finite: {0}")]
    NotFinite(String),
    /// Text could not be parsed as a number.
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),
}
