use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};

use cty_value::Type;
use thiserror::Error;

use crate::convert::{ConvertPath, Segment};
use crate::hooks::HookError;

/// An error raised while marshaling or unmarshaling.
///
/// Every variant records the [`ConvertPath`] of the value it is about.
#[derive(Error, Debug)]
pub enum Error {
    /// The native type has no marshaling rule and no hook.
    #[error("unsupported type `{type_path}` at {path}")]
    UnsupportedType {
        type_path: &'static str,
        path: ConvertPath,
    },
    /// The map key type has no string form and no text hook.
    #[error("unsupported map key type `{type_path}` at {path}")]
    UnsupportedKeyType {
        type_path: &'static str,
        path: ConvertPath,
    },
    /// The value does not fit the target type.
    #[error(
        "cannot unmarshal {found} into `{target}` at {path}{}",
        .detail.as_deref().map(|detail| format!(": {detail}")).unwrap_or_default()
    )]
    TypeMismatch {
        found: Type,
        target: &'static str,
        path: ConvertPath,
        detail: Option<Box<str>>,
    },
    /// The value, or one of its children, is not resolved yet.
    #[error("unknown value at {path}")]
    UnknownValue { path: ConvertPath },
    /// The target cannot receive a value.
    #[error("invalid target `{type_path}` at {path}: {reason}")]
    InvalidTarget {
        type_path: &'static str,
        reason: &'static str,
        path: ConvertPath,
    },
    /// The value has no representation in the requested form.
    #[error("{what} is not representable at {path}")]
    NotRepresentable { what: String, path: ConvertPath },
    /// JSON encoding or decoding failed.
    #[error("json conversion failed at {path}")]
    Json {
        path: ConvertPath,
        #[source]
        source: serde_json::Error,
    },
    /// A user hook returned an error.
    #[error("hook of `{type_path}` failed at {path}")]
    Hook {
        type_path: &'static str,
        path: ConvertPath,
        #[source]
        source: HookError,
    },
}

impl Error {
    /// Returns the location of the failing value.
    pub fn path(&self) -> &ConvertPath {
        match self {
            Error::UnsupportedType { path, .. }
            | Error::UnsupportedKeyType { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::UnknownValue { path }
            | Error::InvalidTarget { path, .. }
            | Error::NotRepresentable { path, .. }
            | Error::Json { path, .. }
            | Error::Hook { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut ConvertPath {
        match self {
            Error::UnsupportedType { path, .. }
            | Error::UnsupportedKeyType { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::UnknownValue { path }
            | Error::InvalidTarget { path, .. }
            | Error::NotRepresentable { path, .. }
            | Error::Json { path, .. }
            | Error::Hook { path, .. } => path,
        }
    }

    // -------------------------------------------------------------------------
    // Context

    pub(crate) fn at_field(mut self, name: &str) -> Self {
        self.path_mut().push_outer(Segment::Field(name.into()));
        self
    }

    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.path_mut().push_outer(Segment::Index(index));
        self
    }

    pub(crate) fn at_key(mut self, key: &str) -> Self {
        self.path_mut().push_outer(Segment::Key(key.into()));
        self
    }

    // -------------------------------------------------------------------------
    // Constructors

    pub(crate) fn unsupported_type(type_path: &'static str) -> Self {
        Error::UnsupportedType {
            type_path,
            path: ConvertPath::new(),
        }
    }

    pub(crate) fn unsupported_key_type(type_path: &'static str) -> Self {
        Error::UnsupportedKeyType {
            type_path,
            path: ConvertPath::new(),
        }
    }

    pub(crate) fn type_mismatch(found: Type, target: &'static str) -> Self {
        Error::TypeMismatch {
            found,
            target,
            path: ConvertPath::new(),
            detail: None,
        }
    }

    pub(crate) fn type_mismatch_with(
        found: Type,
        target: &'static str,
        detail: impl ToString,
    ) -> Self {
        Error::TypeMismatch {
            found,
            target,
            path: ConvertPath::new(),
            detail: Some(detail.to_string().into_boxed_str()),
        }
    }

    pub(crate) fn invalid_target(type_path: &'static str, reason: &'static str) -> Self {
        Error::InvalidTarget {
            type_path,
            reason,
            path: ConvertPath::new(),
        }
    }

    pub(crate) fn not_representable(what: impl ToString) -> Self {
        Error::NotRepresentable {
            what: what.to_string(),
            path: ConvertPath::new(),
        }
    }

    pub(crate) fn unknown() -> Self {
        Error::UnknownValue {
            path: ConvertPath::new(),
        }
    }

    pub(crate) fn json(source: serde_json::Error) -> Self {
        Error::Json {
            path: ConvertPath::new(),
            source,
        }
    }

    pub(crate) fn hook(type_path: &'static str, source: HookError) -> Self {
        Error::Hook {
            type_path,
            path: ConvertPath::new(),
            source,
        }
    }
}
