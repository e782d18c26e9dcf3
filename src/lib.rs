//! # Fieldwise
//!
//! Copies data between two independently defined but structurally related
//! types, field by field, converting representations along the way. Typical
//! use is keeping a persistence model and a transport model in sync without
//! hand-written mapping code.
//!
//! ## Features
//!
//! - **Name resolution**: fields match by exact name, then case-insensitively,
//!   with optional per-call overrides
//! - **Scalar coercion**: integers, unsigned integers, floats and booleans
//!   convert into each other with clamping where signs differ
//! - **Converters**: exact type-pair conversion functions, with built-ins for
//!   chrono and protobuf timestamps
//! - **Indirection**: `Option`, `Box`, `Rc`, `Arc` and `RefCell` are followed
//!   on both sides; empty destination slots are filled with zero values
//! - **Best effort**: copies never fail; anything without a rule is skipped
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use fieldwise::{Fieldwise, NameMap};
//!
//! #[derive(Fieldwise, Clone, Default)]
//! pub struct UserRow {
//!     pub id: i64,
//!     pub name: String,
//!     pub created_at: DateTime<Utc>,
//!     pub internal_note: String,
//! }
//!
//! #[derive(Fieldwise, Clone, Default)]
//! pub struct UserMessage {
//!     pub user_id: u64,
//!     pub name: String,
//!     pub created_at: u64,
//! }
//!
//! let row = UserRow {
//!     id: 7,
//!     name: "Alice".into(),
//!     created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
//!     internal_note: String::new(),
//! };
//!
//! let mut message = UserMessage::default();
//! let overrides = NameMap::from([("user_id".to_string(), "id".to_string())]);
//! fieldwise::copy_with_mapping(&row, &mut message, &overrides);
//!
//! assert_eq!(message.user_id, 7);
//! assert_eq!(message.name, "Alice");
//! assert_eq!(message.created_at, 1_700_000_000);
//! ```

extern crate self as fieldwise;

pub mod config;
pub mod converter;
pub mod engine;
pub mod errors;
mod impls;
pub mod prelude;
pub mod resolver;
pub mod traits;
pub mod utils;

use std::any::Any;
use std::sync::{Arc, LazyLock};

pub use config::{CopyConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV, max_depth, set_max_depth};
pub use converter::{Converter, ConverterRegistry};
pub use engine::Copier;
pub use errors::{FieldwiseError, FieldwiseResult};
pub use fieldwise_macros::Fieldwise;
pub use resolver::{NameMap, NameResolver, Resolved};
pub use traits::{
    Dynamic, FieldDescriptor, FloatSlot, Indirect, IntSlot, Kind, Record, Reflect, Sequence,
    UintSlot, ValueMut, ValueRef,
};

static GLOBAL_REGISTRY: LazyLock<Arc<ConverterRegistry>> =
    LazyLock::new(|| Arc::new(ConverterRegistry::new()));

/// The process-wide registry used by [`copy`] and [`copy_with_mapping`].
pub fn global_registry() -> &'static Arc<ConverterRegistry> {
    &GLOBAL_REGISTRY
}

/// A copier over the process-wide registry and depth limit.
pub fn global_copier() -> Copier {
    Copier::new(Arc::clone(&GLOBAL_REGISTRY), CopyConfig::global())
}

/// Copies `source` into `destination` using the process-wide registry.
pub fn copy<S: Reflect, D: Reflect>(source: &S, destination: &mut D) {
    global_copier().copy(source, destination);
}

/// Copies with `overrides` (destination field → source field); an empty
/// source name leaves that destination field untouched.
pub fn copy_with_mapping<S: Reflect, D: Reflect>(
    source: &S,
    destination: &mut D,
    overrides: &NameMap,
) {
    global_copier().copy_with_mapping(source, destination, overrides);
}

/// Installs or replaces the process-wide conversion from `S` to `D`,
/// effective for every subsequent copy.
pub fn register_converter<S, D, F>(convert: F)
where
    S: Any,
    D: Any,
    F: Fn(&S) -> D + Send + Sync + 'static,
{
    GLOBAL_REGISTRY.register(convert);
}
