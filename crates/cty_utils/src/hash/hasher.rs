use core::hash::{BuildHasher, Hasher};

/// A hasher that keeps the last `u64` written to it.
///
/// Meant for keys that are already uniformly distributed, such as
/// [`TypeId`](core::any::TypeId). Byte input is packed big-endian into
/// the state, so short keys still hash distinctly.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        self.hash = bytes
            .iter()
            .fold(self.hash, |hash, byte| hash.rotate_left(8) ^ u64::from(*byte));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Build state for [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use cty_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 3_u64.hash(&mut hasher);
/// assert_eq!(hasher.finish(), 3);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::{BuildHasher, Hasher};

    use super::NoOpHashState;

    #[test]
    fn type_ids_hash_apart() {
        let hash = |id: TypeId| NoOpHashState.hash_one(id);
        assert_ne!(hash(TypeId::of::<u8>()), hash(TypeId::of::<u16>()));
        assert_eq!(hash(TypeId::of::<u8>()), hash(TypeId::of::<u8>()));
    }

    #[test]
    fn bytes_fold_into_state() {
        let mut a = NoOpHashState.build_hasher();
        a.write(&[1, 2]);
        let mut b = NoOpHashState.build_hasher();
        b.write(&[2, 1]);
        assert_ne!(a.finish(), b.finish());
    }
}
