use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::traits::{Indirect, Reflect, ValueMut, ValueRef};

macro_rules! impl_reflect_indirect {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Reflect for $ty {
                fn reflect_ref(&self) -> ValueRef<'_> {
                    ValueRef::Indirect(self)
                }

                fn reflect_mut(&mut self) -> ValueMut<'_> {
                    ValueMut::Indirect(self)
                }
            }
        )*
    };
}

impl<T: Reflect + Clone + Default> Indirect for Option<T> {
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect)) {
        if let Some(value) = self {
            visitor(value);
        }
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect)) {
        visitor(self.get_or_insert_with(T::default));
    }
}

impl<T: Reflect + Clone> Indirect for Box<T> {
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect)) {
        visitor(&**self);
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect)) {
        visitor(&mut **self);
    }
}

impl<T: Reflect> Indirect for Rc<T> {
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect)) {
        visitor(&**self);
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect)) {
        match Rc::get_mut(self) {
            Some(value) => visitor(value),
            None => log::trace!(
                "skipping shared {}: destination is not writable",
                std::any::type_name::<Self>()
            ),
        }
    }
}

impl<T: Reflect> Indirect for Arc<T> {
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect)) {
        visitor(&**self);
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect)) {
        match Arc::get_mut(self) {
            Some(value) => visitor(value),
            None => log::trace!(
                "skipping shared {}: destination is not writable",
                std::any::type_name::<Self>()
            ),
        }
    }
}

impl<T: Reflect + Clone> Indirect for RefCell<T> {
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect)) {
        match self.try_borrow() {
            Ok(value) => visitor(&*value),
            Err(_) => log::trace!(
                "skipping {}: value is mutably borrowed",
                std::any::type_name::<Self>()
            ),
        }
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect)) {
        visitor(self.get_mut());
    }
}

impl_reflect_indirect!(
    [T: Reflect + Clone + Default] Option<T>,
    [T: Reflect + Clone] Box<T>,
    [T: Reflect] Rc<T>,
    [T: Reflect] Arc<T>,
    [T: Reflect + Clone] RefCell<T>,
);
