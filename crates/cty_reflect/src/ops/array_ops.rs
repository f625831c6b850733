use crate::Reflect;

/// A fixed-size, ordered sequence.
pub trait Array: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}
