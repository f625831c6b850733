use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::hooks::TypeHooks;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_typed_for_list {
    ($ty:ident) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::List(
                        ListInfo::new::<Self, T>()
                            .with_hooks(TypeHooks::EMPTY.with_default::<Self>()),
                    )
                })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);
        }
    };
}

// -----------------------------------------------------------------------------
// Vec

impl_typed_for_list!(Vec);

// Slice methods are reached through `as_slice`; method syntax on `self`
// would resolve to `List` itself.
impl<T: Reflect + Typed> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <Vec<T>>::len(self)
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

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        <Vec<T>>::push(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        <Vec<T>>::truncate(self, len);
    }
}

// -----------------------------------------------------------------------------
// VecDeque

impl_typed_for_list!(VecDeque);

impl<T: Reflect + Typed> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        <VecDeque<T>>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <VecDeque<T>>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <VecDeque<T>>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        <VecDeque<T>>::push_back(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        <VecDeque<T>>::truncate(self, len);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, ScalarKind, Typed};
    use crate::ops::{List, ReflectMut};
    use alloc::string::String;

    #[test]
    fn vec_through_reflect_mut() {
        let mut list = vec![1_i64, 2, 3];
        let ReflectMut::List(dyn_list) = list.reflect_mut() else {
            panic!("expected a list");
        };
        dyn_list.truncate(1);
        dyn_list.push(Box::new(9_i64)).unwrap();
        assert_eq!(list, [1, 9]);
    }

    #[test]
    fn item_info_and_default() {
        let info = <VecDeque<String>>::type_info().as_list().unwrap();
        assert_eq!(info.item_info().as_scalar().unwrap().kind(), ScalarKind::String);

        let fresh = info.hooks().default_value().unwrap().default();
        assert_eq!((*fresh).reflect_kind(), ReflectKind::List);
        assert!(fresh.take::<VecDeque<String>>().unwrap().is_empty());

        let mut deque = VecDeque::from([String::from("a")]);
        assert_eq!(List::len(&deque), 1);
        assert!(List::push(&mut deque, Box::new(1_u8)).is_err());
        assert!(<Vec<u8>>::type_info().type_is::<Vec<u8>>());
    }
}
