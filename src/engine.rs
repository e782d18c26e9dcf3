//! The recursive, type-directed copy algorithm.
//!
//! Every node of the value graph goes through the same priority order:
//!
//! 1. strip indirection on both sides (an absent source is a no-op, an absent
//!    destination gets a zero value, an unwritable destination is skipped);
//! 2. exact type match: clone-assign;
//! 3. registered converter for the exact pair;
//! 4. scalar rules (integers, unsigned integers, floats, booleans);
//! 5. record to record, field by field, bounded by `max_depth`;
//! 6. sequence to sequence, element by element;
//! 7. anything else is skipped.
//!
//! Nothing here returns an error. Unsupported pairs leave the destination at
//! its previous value so that partially overlapping types copy as much as
//! they can.

use std::sync::Arc;

use crate::config::CopyConfig;
use crate::converter::ConverterRegistry;
use crate::resolver::{NameMap, NameResolver, Resolved};
use crate::traits::{Kind, Record, Reflect, Sequence, ValueMut, ValueRef};

/// Copies values using one converter registry and one configuration.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fieldwise::{Copier, ConverterRegistry, CopyConfig};
///
/// let copier = Copier::new(
///     Arc::new(ConverterRegistry::new()),
///     CopyConfig::builder().max_depth(3).build(),
/// );
///
/// let mut target = 0u16;
/// copier.copy(&-32i64, &mut target);
/// assert_eq!(target, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Copier {
    registry: Arc<ConverterRegistry>,
    config: CopyConfig,
}

impl Copier {
    pub fn new(registry: Arc<ConverterRegistry>, config: CopyConfig) -> Self {
        Self { registry, config }
    }

    /// A copier with its own registry of built-in rules and default config.
    pub fn standalone() -> Self {
        Self::new(Arc::new(ConverterRegistry::new()), CopyConfig::default())
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    /// Copies `source` into `destination`, matching record fields by exact
    /// and then case-insensitive name.
    pub fn copy<S: Reflect, D: Reflect>(&self, source: &S, destination: &mut D) {
        self.copy_dyn(source, destination, None);
    }

    /// Like [`copy`](Self::copy), consulting `overrides` (destination field →
    /// source field) first. An empty source name leaves that field alone.
    ///
    /// The same overrides apply at every nesting level of records, keyed by
    /// field name alone.
    pub fn copy_with_mapping<S: Reflect, D: Reflect>(
        &self,
        source: &S,
        destination: &mut D,
        overrides: &NameMap,
    ) {
        self.copy_dyn(source, destination, Some(overrides));
    }

    /// Object-safe entry point behind [`copy`](Self::copy) and
    /// [`copy_with_mapping`](Self::copy_with_mapping).
    pub fn copy_dyn(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Reflect,
        overrides: Option<&NameMap>,
    ) {
        self.apply(source, destination, 0, overrides);
    }

    fn apply(
        &self,
        source: &dyn Reflect,
        target: &mut dyn Reflect,
        depth: u8,
        names: Option<&NameMap>,
    ) {
        if let ValueRef::Indirect(pointer) = source.reflect_ref() {
            pointer.visit(&mut |inner: &dyn Reflect| {
                self.apply(inner, &mut *target, depth, names)
            });
            return;
        }
        if let ValueMut::Indirect(pointer) = target.reflect_mut() {
            pointer.visit_mut(&mut |inner: &mut dyn Reflect| {
                self.apply(source, inner, depth, names)
            });
            return;
        }

        let source_type = source.as_any().type_id();
        let target_type = target.as_any().type_id();

        if source_type == target_type {
            target.assign_from(source.as_any());
            return;
        }

        if let Some(converter) = self.registry.lookup(source_type, target_type) {
            let assigned = converter
                .convert(source.as_any())
                .is_some_and(|value| target.assign_boxed(value));
            if !assigned {
                log::trace!(
                    "converter {} -> {} produced no usable value",
                    source.type_name(),
                    target.type_name()
                );
            }
            return;
        }

        let source_name = source.type_name();
        let target_name = target.type_name();
        match (source.reflect_ref(), target.reflect_mut()) {
            (ValueRef::Int(value), ValueMut::Int(slot)) => slot.set_int(value),
            (ValueRef::Int(value), ValueMut::Uint(slot)) => slot.set_uint(value.max(0) as u64),
            (ValueRef::Uint(value), ValueMut::Int(slot)) => slot.set_int(value as i64),
            (ValueRef::Uint(value), ValueMut::Uint(slot)) => slot.set_uint(value),
            (ValueRef::Float(value), ValueMut::Float(slot)) => slot.set_float(value),
            (ValueRef::Bool(value), ValueMut::Int(slot)) => slot.set_int(i64::from(value)),
            (ValueRef::Bool(value), ValueMut::Uint(slot)) => slot.set_uint(u64::from(value)),
            (ValueRef::Int(value), ValueMut::Bool(slot)) => *slot = value != 0,
            (ValueRef::Uint(value), ValueMut::Bool(slot)) => *slot = value != 0,
            (ValueRef::Record(source), ValueMut::Record(target)) => {
                self.copy_record(source, target, depth, names)
            }
            (ValueRef::Sequence(source), ValueMut::Sequence(target)) => {
                self.copy_sequence(source, target, depth)
            }
            (source, target) => log::trace!(
                "skipping {source_name} ({}) -> {target_name} ({}): no rule",
                Kind::from(source),
                target.kind()
            ),
        }
    }

    fn copy_record(
        &self,
        source: &dyn Record,
        target: &mut dyn Record,
        depth: u8,
        names: Option<&NameMap>,
    ) {
        if depth >= self.config.max_depth {
            log::trace!("max depth {} reached, leaving record as is", self.config.max_depth);
            return;
        }

        let resolver = NameResolver::new(source.fields(), names);
        for field in target.fields() {
            let source_name = match resolver.resolve(field.name) {
                Resolved::Field(name) => name,
                Resolved::Suppressed => {
                    log::trace!("field {} suppressed by override", field.name);
                    continue;
                }
                Resolved::Unmatched => continue,
            };
            let Some(value) = source.field(source_name) else {
                log::trace!("no source field {source_name} for {}", field.name);
                continue;
            };
            if let Some(slot) = target.field_mut(field.name) {
                self.apply(value, slot, depth + 1, names);
            }
        }
    }

    fn copy_sequence(&self, source: &dyn Sequence, target: &mut dyn Sequence, depth: u8) {
        if source.is_empty() {
            return;
        }

        target.reset(source.len());
        for index in 0..source.len() {
            if let (Some(value), Some(slot)) = (source.element(index), target.element_mut(index)) {
                self.apply(value, slot, depth, None);
            }
        }
    }
}

impl Default for Copier {
    fn default() -> Self {
        Self::standalone()
    }
}
