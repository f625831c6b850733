use alloc::boxed::Box;

use crate::Reflect;

/// A resizable, ordered sequence.
///
/// ```
/// use cty_reflect::ops::List;
///
/// let mut list = vec![1_u8, 2];
/// let dyn_list: &mut dyn List = &mut list;
///
/// assert!(dyn_list.push(Box::new(3_u8)).is_ok());
/// assert!(dyn_list.push(Box::new("x")).is_err());
/// dyn_list.truncate(1);
///
/// assert_eq!(list, [1]);
/// ```
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an item.
    ///
    /// Returns the item unchanged if it is not of the list's item type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Shortens the list to `len` items, doing nothing if it is not longer.
    fn truncate(&mut self, len: usize);

    /// Returns `true` if the list has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
