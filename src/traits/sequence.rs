use crate::traits::reflect::Reflect;

/// An ordered, resizable container of homogeneous elements.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Drops the current contents and refills with exactly `len` zero values.
    fn reset(&mut self, len: usize);
}
