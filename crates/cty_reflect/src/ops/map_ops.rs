use alloc::boxed::Box;

use crate::Reflect;

/// A keyed collection.
///
/// Iteration order is the order of the underlying collection: sorted for
/// `BTreeMap`, unspecified for hash maps.
///
/// ```
/// use std::collections::BTreeMap;
/// use cty_reflect::ops::Map;
///
/// let mut map = BTreeMap::<String, u32>::new();
/// let dyn_map: &mut dyn Map = &mut map;
///
/// dyn_map.insert(Box::new(String::from("a")), Box::new(1_u32)).unwrap();
/// assert_eq!(dyn_map.len(), 1);
///
/// let (key, value) = dyn_map.iter().next().unwrap();
/// assert_eq!(key.downcast_ref::<String>().unwrap(), "a");
/// assert_eq!(value.downcast_ref::<u32>(), Some(&1));
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Iterates over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Inserts an entry, replacing the value of an existing key.
    ///
    /// Returns the pair unchanged if either side is not of the map's types.
    fn insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
