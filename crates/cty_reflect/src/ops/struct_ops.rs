use crate::Reflect;

/// A struct with named fields.
///
/// Fields are addressed by declaration index; names and tags live in the
/// type's [`StructInfo`](crate::info::StructInfo).
///
/// ```
/// use cty_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// pub struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let mut point = Point { x: 1, y: 2 };
/// assert_eq!(point.field_len(), 2);
///
/// *point.field_at_mut(1).unwrap().downcast_mut::<i32>().unwrap() = 5;
/// assert_eq!(point.y, 5);
/// ```
pub trait Struct: Reflect {
    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Struct;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    pub struct Pair<T> {
        pub left: T,
        pub right: Vec<T>,
        hidden: bool,
    }

    #[test]
    fn derived_fields_by_index() {
        let mut pair = Pair {
            left: String::from("a"),
            right: vec![String::from("b")],
            hidden: false,
        };
        assert_eq!(pair.field_len(), 3);
        assert!(pair.field_at(0).unwrap().is::<String>());
        assert!(pair.field_at(1).unwrap().is::<Vec<String>>());
        assert!(pair.field_at(3).is_none());

        *pair.field_at_mut(2).unwrap().downcast_mut::<bool>().unwrap() = true;
        assert!(pair.hidden);
        assert!(pair.field_at_mut(7).is_none());
    }
}
