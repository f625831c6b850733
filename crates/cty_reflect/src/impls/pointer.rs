use alloc::boxed::Box;

use crate::Reflect;
use crate::hooks::TypeHooks;
use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{InterfaceInfo, PointerInfo, TypeInfo, Typed};
use crate::ops::{Interface, Pointer};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Pointer(
                PointerInfo::new::<Self, T>(true)
                    .with_hooks(TypeHooks::EMPTY.with_default::<Self>()),
            )
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Pointer);
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    fn set_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn set_null(&mut self) -> bool {
        *self = None;
        true
    }
}

// -----------------------------------------------------------------------------
// Box

// `Box<T>` has no default constructor hook: it needs `T: Default`.
impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Pointer);
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    fn set_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.downcast::<T>()?;
        Ok(())
    }

    #[inline]
    fn set_null(&mut self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Interface(InterfaceInfo::new::<Self>()))
    }
}

impl Reflect for Box<dyn Reflect> {
    impl_reflect_cast_fn!(Interface);
}

impl Interface for Box<dyn Reflect> {
    #[inline]
    fn inner(&self) -> &dyn Reflect {
        &**self
    }

    #[inline]
    fn inner_mut(&mut self) -> &mut dyn Reflect {
        &mut **self
    }

    #[inline]
    fn replace(&mut self, value: Box<dyn Reflect>) {
        *self = value;
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{Interface, Pointer};

    #[test]
    fn option_is_nullable() {
        let info = <Option<String>>::type_info().as_pointer().unwrap();
        assert!(info.is_nullable());
        assert!(info.pointee_info().type_is::<String>());

        let mut slot = Some(String::from("x"));
        assert!(Pointer::set_null(&mut slot));
        assert_eq!(slot, None);
    }

    #[test]
    fn box_is_not_nullable() {
        assert!(!<Box<u8>>::type_info().as_pointer().unwrap().is_nullable());

        let mut boxed = Box::new(1_u8);
        assert!(!Pointer::set_null(&mut boxed));
        Pointer::set_pointee(&mut boxed, Box::new(2_u8)).unwrap();
        assert_eq!(*boxed, 2);
    }

    #[test]
    fn interface_holds_any_reflect() {
        let mut value: Box<dyn Reflect> = Box::new(3_i32);
        assert_eq!(value.reflect_kind(), ReflectKind::Interface);
        assert_eq!(Interface::inner(&value).reflect_kind(), ReflectKind::Scalar);

        Interface::replace(&mut value, Box::new(String::from("s")));
        assert!(Interface::inner(&value).is::<String>());
    }
}
