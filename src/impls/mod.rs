//! `Reflect` implementations for standard, chrono and protobuf types.

mod containers;
mod pointers;
mod scalars;
mod time;

/// Implements [`Reflect`](crate::Reflect) for types that only take part in
/// identity copies and registered conversions.
///
/// ```rust
/// #[derive(Clone, Debug, Default, PartialEq)]
/// pub struct Money(i64);
///
/// fieldwise::opaque!(Money);
///
/// let mut target = Money(0);
/// fieldwise::copy(&Money(42), &mut target);
/// assert_eq!(target, Money(42));
/// ```
#[macro_export]
macro_rules! opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn reflect_ref(&self) -> $crate::ValueRef<'_> {
                    $crate::ValueRef::Opaque
                }

                fn reflect_mut(&mut self) -> $crate::ValueMut<'_> {
                    $crate::ValueMut::Opaque
                }
            }
        )+
    };
}
