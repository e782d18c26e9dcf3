use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use crate::traits::{Reflect, Sequence, ValueMut, ValueRef};

impl<T: Reflect + Clone + Default> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|value| value as &dyn Reflect)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.get_mut(index).map(|value| value as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }
}

impl<T: Reflect + Clone + Default> Reflect for Vec<T> {
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Sequence(self)
    }
}

// Keyed collections are copied only as a whole.

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    S: Clone + 'static,
{
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Opaque
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Opaque
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Clone + Ord + 'static,
    V: Clone + 'static,
{
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Opaque
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Opaque
    }
}

impl<T, S> Reflect for HashSet<T, S>
where
    T: Clone + Eq + Hash + 'static,
    S: Clone + 'static,
{
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Opaque
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Opaque
    }
}
