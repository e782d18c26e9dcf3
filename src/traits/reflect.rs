use std::any::Any;

use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::traits::{indirect::Indirect, record::Record, sequence::Sequence};

/// Type-erased access shared by every reflectable value.
///
/// Implemented for every `T: Any + Clone`, so it never needs to be written by
/// hand. It provides the identity checks and whole-value assignment the copy
/// engine performs when the source and destination types match exactly, or
/// when a registered converter produced a boxed destination value.
pub trait Dynamic: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Fully qualified name of the concrete type, for diagnostics only.
    fn type_name(&self) -> &'static str;

    /// Clone-assigns `source` into `self` when both have the same concrete type.
    fn assign_from(&mut self, source: &dyn Any) -> bool;

    /// Moves a boxed value of the same concrete type into `self`.
    fn assign_boxed(&mut self, value: Box<dyn Any>) -> bool;
}

impl<T: Any + Clone> Dynamic for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn assign_from(&mut self, source: &dyn Any) -> bool {
        match source.downcast_ref::<T>() {
            Some(value) => {
                self.clone_from(value);
                true
            }
            None => false,
        }
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> bool {
        match value.downcast::<T>() {
            Ok(value) => {
                *self = *value;
                true
            }
            Err(_) => false,
        }
    }
}

/// Runtime view of a value's structure, the introspection facility the copy
/// engine dispatches on.
///
/// Scalars report themselves as widened numbers, structs derived with
/// `#[derive(Fieldwise)]` as records, `Vec` as a sequence, and pointer-like
/// wrappers (`Option`, `Box`, `Rc`, `Arc`, `RefCell`) as indirections. Types
/// that only take part in identity copies and registered conversions report
/// [`ValueRef::Opaque`]; see [`opaque!`](crate::opaque).
pub trait Reflect: Dynamic {
    fn reflect_ref(&self) -> ValueRef<'_>;

    fn reflect_mut(&mut self) -> ValueMut<'_>;

    fn kind(&self) -> Kind {
        self.reflect_ref().discriminant()
    }
}

/// Read-only structural view of a value.
#[derive(EnumDiscriminants)]
#[strum_discriminants(name(Kind), derive(Hash, strum::Display))]
pub enum ValueRef<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Record(&'a dyn Record),
    Sequence(&'a dyn Sequence),
    Indirect(&'a dyn Indirect),
    Opaque,
}

/// Writable structural view of a value.
pub enum ValueMut<'a> {
    Int(&'a mut dyn IntSlot),
    Uint(&'a mut dyn UintSlot),
    Float(&'a mut dyn FloatSlot),
    Bool(&'a mut bool),
    Record(&'a mut dyn Record),
    Sequence(&'a mut dyn Sequence),
    Indirect(&'a mut dyn Indirect),
    Opaque,
}

impl ValueMut<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            ValueMut::Int(_) => Kind::Int,
            ValueMut::Uint(_) => Kind::Uint,
            ValueMut::Float(_) => Kind::Float,
            ValueMut::Bool(_) => Kind::Bool,
            ValueMut::Record(_) => Kind::Record,
            ValueMut::Sequence(_) => Kind::Sequence,
            ValueMut::Indirect(_) => Kind::Indirect,
            ValueMut::Opaque => Kind::Opaque,
        }
    }
}

/// A signed integer destination. Narrower slots truncate like an `as` cast.
pub trait IntSlot {
    fn set_int(&mut self, value: i64);
}

/// An unsigned integer destination. Narrower slots truncate like an `as` cast.
pub trait UintSlot {
    fn set_uint(&mut self, value: u64);
}

pub trait FloatSlot {
    fn set_float(&mut self, value: f64);
}
