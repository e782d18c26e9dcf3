//! Registry of explicit conversions between exact type pairs.
//!
//! Converters express conversions the structural rules cannot derive, such as
//! a timestamp to an integer or to formatted text. Rules are keyed by the
//! exact `(source, target)` [`TypeId`] pair; registering a pair again replaces
//! the earlier rule in place.

pub mod builtin;

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Type-erased conversion function. Returns `None` when handed a value of the
/// wrong concrete type.
pub type ConvertFn = dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync;

/// A registered conversion, detached from the registry lock.
#[derive(Clone)]
pub struct Converter {
    convert: Arc<ConvertFn>,
}

impl Converter {
    pub fn convert(&self, source: &dyn Any) -> Option<Box<dyn Any>> {
        (self.convert)(source)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

#[derive(Clone)]
struct TypeConverter {
    source: TypeId,
    target: TypeId,
    source_name: &'static str,
    target_name: &'static str,
    converter: Converter,
}

/// An ordered list of conversion rules, safe to share between threads.
///
/// [`ConverterRegistry::new`] starts with the built-in timestamp rules;
/// [`ConverterRegistry::empty`] starts with none.
///
/// # Examples
///
/// ```
/// use fieldwise::ConverterRegistry;
///
/// let registry = ConverterRegistry::empty();
/// registry.register(|value: &String| value.len() as u64);
/// assert!(registry.contains::<String, u64>());
/// ```
pub struct ConverterRegistry {
    rules: RwLock<Vec<TypeConverter>>,
}

impl ConverterRegistry {
    /// A registry holding the built-in rules.
    pub fn new() -> Self {
        let registry = Self::empty();
        builtin::register_builtins(&registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            rules: RwLock::new(Vec::new()),
        }
    }

    /// Inserts or replaces the rule converting `S` into `D`.
    pub fn register<S, D, F>(&self, convert: F)
    where
        S: Any,
        D: Any,
        F: Fn(&S) -> D + Send + Sync + 'static,
    {
        let erased = move |source: &dyn Any| {
            source
                .downcast_ref::<S>()
                .map(|source| Box::new(convert(source)) as Box<dyn Any>)
        };
        self.register_erased(
            TypeId::of::<S>(),
            TypeId::of::<D>(),
            (std::any::type_name::<S>(), std::any::type_name::<D>()),
            Arc::new(erased),
        );
    }

    /// Inserts or replaces a rule for a pair only known at runtime. The
    /// function must return a boxed value of exactly the `target` type.
    pub fn register_erased(
        &self,
        source: TypeId,
        target: TypeId,
        (source_name, target_name): (&'static str, &'static str),
        convert: Arc<ConvertFn>,
    ) {
        let rule = TypeConverter {
            source,
            target,
            source_name,
            target_name,
            converter: Converter { convert },
        };

        let mut rules = self.rules.write();
        match rules
            .iter_mut()
            .find(|existing| existing.source == source && existing.target == target)
        {
            Some(existing) => {
                log::debug!("replacing converter {source_name} -> {target_name}");
                *existing = rule;
            }
            None => {
                log::debug!("registering converter {source_name} -> {target_name}");
                rules.push(rule);
            }
        }
    }

    /// The rule for the exact pair, if any.
    pub fn lookup(&self, source: TypeId, target: TypeId) -> Option<Converter> {
        self.rules
            .read()
            .iter()
            .find(|rule| rule.source == source && rule.target == target)
            .map(|rule| rule.converter.clone())
    }

    pub fn contains<S: Any, D: Any>(&self) -> bool {
        self.lookup(TypeId::of::<S>(), TypeId::of::<D>()).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = self.rules.read();
        f.debug_list()
            .entries(
                rules
                    .iter()
                    .map(|rule| format!("{} -> {}", rule.source_name, rule.target_name)),
            )
            .finish()
    }
}
