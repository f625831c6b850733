/// Builds a hook container for the concrete type `T`.
///
/// Hook containers store plain function pointers that downcast a
/// `&dyn Reflect` back to `T` before calling its trait implementation.
///
/// ```
/// use cty_reflect::hooks::{FromType, ReflectDefault};
///
/// let hook: ReflectDefault = FromType::<String>::from_type();
/// assert_eq!(hook.default().take::<String>().unwrap(), "");
/// ```
pub trait FromType<T> {
    fn from_type() -> Self;
}
