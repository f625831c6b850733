use proc_macro2::Span;

/// A struct used to control whether a trait needs to be implemented.
#[derive(Debug)]
pub(crate) struct TraitImplSwitches {
    /// Default is `true`, use `#[reflect(typed = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_typed: bool,
    /// Default is `true`, use `#[reflect(reflect = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_reflect: bool,
}

impl Default for TraitImplSwitches {
    #[inline]
    fn default() -> Self {
        Self {
            impl_typed: true,
            impl_reflect: true,
        }
    }
}

/// A struct used to record which hooks the type declared.
///
/// The span of the flag is kept so that a missing trait implementation
/// is reported on the attribute.
#[derive(Default, Debug)]
pub(crate) struct HookFlags {
    pub default: Option<Span>,
    pub marshal_value: Option<Span>,
    pub unmarshal_value: Option<Span>,
    pub serialize: Option<Span>,
    pub deserialize: Option<Span>,
    pub marshal_text: Option<Span>,
    pub unmarshal_text: Option<Span>,
}
