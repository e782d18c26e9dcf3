use crate::traits::reflect::Reflect;

/// One externally visible field of a record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// The name this field is matched by, after `rename` / `rename_all`.
    pub name: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// A struct with a fixed, named set of fields.
///
/// This trait is automatically implemented by `#[derive(Fieldwise)]`. The
/// descriptor table lists only exposed fields; `field` and `field_mut` return
/// `None` for any other name.
pub trait Record {
    fn fields(&self) -> &'static [FieldDescriptor];

    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}
