//! Matching destination fields to source fields by name.

use std::collections::HashMap;

use crate::traits::FieldDescriptor;

/// Destination field name → source field name overrides. An empty source
/// name suppresses the destination field entirely.
pub type NameMap = HashMap<String, String>;

/// Outcome of resolving one destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Copy from the named source field.
    Field(&'a str),
    /// An override explicitly asked for this field to be left alone.
    Suppressed,
    /// No source field corresponds.
    Unmatched,
}

/// Answers "which source field supplies this destination field" for one
/// source record type.
///
/// Resolution order: explicit override, exact name, then a case-insensitive
/// match. When several source fields fold to the same lowercase name the
/// first declared one wins.
#[derive(Debug)]
pub struct NameResolver<'a> {
    fields: &'a [FieldDescriptor],
    folded: HashMap<String, &'a str>,
    overrides: Option<&'a NameMap>,
}

impl<'a> NameResolver<'a> {
    pub fn new(fields: &'a [FieldDescriptor], overrides: Option<&'a NameMap>) -> Self {
        let mut folded = HashMap::with_capacity(fields.len());
        for field in fields {
            folded.entry(field.name.to_lowercase()).or_insert(field.name);
        }

        Self {
            fields,
            folded,
            overrides,
        }
    }

    pub fn resolve(&self, name: &str) -> Resolved<'a> {
        if let Some(source) = self.overrides.and_then(|overrides| overrides.get(name)) {
            return if source.is_empty() {
                Resolved::Suppressed
            } else {
                Resolved::Field(source.as_str())
            };
        }

        if let Some(field) = self.fields.iter().find(|field| field.name == name) {
            return Resolved::Field(field.name);
        }

        match self.folded.get(&name.to_lowercase()) {
            Some(&source) => Resolved::Field(source),
            None => Resolved::Unmatched,
        }
    }
}
