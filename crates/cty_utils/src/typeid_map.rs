use core::any::TypeId;
use core::fmt::Debug;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::hash::NoOpHashState;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// [`TypeId`] already is a well distributed hash, so the map uses
/// [`NoOpHashState`] and skips rehashing it.
///
/// # Examples
///
/// ```
/// use cty_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::<&str>::new();
/// assert!(map.try_insert_type::<u8>(|| "u8"));
/// assert!(!map.try_insert_type::<u8>(|| "other"));
/// assert_eq!(map.get_type::<u8>(), Some(&"u8"));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Inserts `f()` if the key is absent.
    ///
    /// Returns `true` if the value was inserted. The closure is only
    /// called when the key is not present.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Typed form of [`TypeIdMap::try_insert`].
    #[inline(always)]
    pub fn try_insert_type<T: ?Sized + 'static>(&mut self, f: impl FnOnce() -> V) -> bool {
        self.try_insert(TypeId::of::<T>(), f)
    }

    /// Returns the existing value, or inserts `f()` and returns it.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value stored for `type_id`.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value stored for `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns `true` if the map contains a value for `type_id`.
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for TypeIdMap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TypeIdMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn get_or_insert_keeps_first() {
        let mut map = TypeIdMap::<u32>::new();
        *map.get_or_insert(TypeId::of::<i8>(), || 1) += 1;
        assert_eq!(*map.get_or_insert(TypeId::of::<i8>(), || 10), 2);
        assert_eq!(map.len(), 1);
        assert!(map.contains(&TypeId::of::<i8>()));
        assert!(!map.contains(&TypeId::of::<u8>()));
    }
}
