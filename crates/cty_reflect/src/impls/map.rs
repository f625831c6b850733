use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::hooks::TypeHooks;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_for_map {
    ($ty:ty, <$($param:ident),*> where $($bounds:tt)*) => {
        impl<$($param),*> Typed for $ty where $($bounds)* {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Map(
                        MapInfo::new::<Self, K, V>()
                            .with_hooks(TypeHooks::EMPTY.with_default::<Self>()),
                    )
                })
            }
        }

        impl<$($param),*> Reflect for $ty where $($bounds)* {
            impl_reflect_cast_fn!(Map);
        }

        impl<$($param),*> Map for $ty where $($bounds)* {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    <$ty>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            fn insert(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)> {
                let key = match key.take::<K>() {
                    Ok(key) => key,
                    Err(key) => return Err((key, value)),
                };
                let value = match value.take::<V>() {
                    Ok(value) => value,
                    Err(value) => return Err((Box::new(key), value)),
                };
                <$ty>::insert(self, key, value);
                Ok(())
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }
        }
    };
}

impl_reflect_for_map!(
    BTreeMap<K, V>,
    <K, V> where
        K: Reflect + Typed + Ord,
        V: Reflect + Typed,
);

impl_reflect_for_map!(
    std::collections::HashMap<K, V, S>,
    <K, V, S> where
        K: Reflect + Typed + Eq + Hash,
        V: Reflect + Typed,
        S: BuildHasher + Default + Send + Sync + 'static,
);

impl_reflect_for_map!(
    cty_utils::hash::hashbrown::HashMap<K, V, S>,
    <K, V, S> where
        K: Reflect + Typed + Eq + Hash,
        V: Reflect + Typed,
        S: BuildHasher + Default + Send + Sync + 'static,
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use cty_utils::hash::hashbrown::HashMap;
    use std::hash::RandomState;

    use crate::info::{ScalarKind, Typed};
    use crate::ops::Map;

    #[test]
    fn insert_checks_types() {
        let mut map = HashMap::<String, u16, RandomState>::default();
        assert!(Map::insert(&mut map, Box::new(String::from("a")), Box::new(1_u16)).is_ok());

        let (key, value) = Map::insert(&mut map, Box::new(1_u8), Box::new(2_u16)).unwrap_err();
        assert!(key.is::<u8>());
        assert!(value.is::<u16>());

        assert_eq!(Map::len(&map), 1);
        Map::clear(&mut map);
        assert!(Map::is_empty(&map));
    }

    #[test]
    fn key_and_value_info() {
        let info = <std::collections::HashMap<String, f64>>::type_info()
            .as_map()
            .unwrap();
        assert_eq!(info.key_info().as_scalar().unwrap().kind(), ScalarKind::String);
        assert_eq!(info.value_info().as_scalar().unwrap().kind(), ScalarKind::Float);
        assert!(info.type_is::<std::collections::HashMap<String, f64>>());
    }
}
