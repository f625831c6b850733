use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, TypeInfo, Typed};
use crate::ops::Array;
use crate::reflection::impl_reflect_cast_fn;

// `[T; N]` has no default constructor hook: `Default` is not implemented
// for every length.
impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|item| item as &mut dyn Reflect)
    }
}
