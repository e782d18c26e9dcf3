use crate::traits::reflect::Reflect;

/// An optional or owning reference to another reflectable value.
///
/// Access is callback based so that guarded pointees (`RefCell`) can be
/// lent out for exactly the duration of one visit.
pub trait Indirect {
    /// Calls `visitor` with the pointee. Does nothing when the reference is
    /// absent or cannot currently be read.
    fn visit(&self, visitor: &mut dyn FnMut(&dyn Reflect));

    /// Calls `visitor` with the writable pointee, first binding a zero value
    /// when the slot is empty. Does nothing when the pointee cannot be written,
    /// e.g. a shared `Rc`.
    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Reflect));
}
