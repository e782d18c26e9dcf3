use crate::traits::{FloatSlot, IntSlot, Reflect, UintSlot, ValueMut, ValueRef};

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl IntSlot for $ty {
                fn set_int(&mut self, value: i64) {
                    *self = value as $ty;
                }
            }

            impl Reflect for $ty {
                fn reflect_ref(&self) -> ValueRef<'_> {
                    ValueRef::Int(*self as i64)
                }

                fn reflect_mut(&mut self) -> ValueMut<'_> {
                    ValueMut::Int(self)
                }
            }
        )*
    };
}

macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UintSlot for $ty {
                fn set_uint(&mut self, value: u64) {
                    *self = value as $ty;
                }
            }

            impl Reflect for $ty {
                fn reflect_ref(&self) -> ValueRef<'_> {
                    ValueRef::Uint(*self as u64)
                }

                fn reflect_mut(&mut self) -> ValueMut<'_> {
                    ValueMut::Uint(self)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl FloatSlot for $ty {
                fn set_float(&mut self, value: f64) {
                    *self = value as $ty;
                }
            }

            impl Reflect for $ty {
                fn reflect_ref(&self) -> ValueRef<'_> {
                    ValueRef::Float(*self as f64)
                }

                fn reflect_mut(&mut self) -> ValueMut<'_> {
                    ValueMut::Float(self)
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, isize);
impl_uint!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);

impl Reflect for bool {
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Bool(self)
    }
}

crate::opaque!(String, &'static str, char, ());
