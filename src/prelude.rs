//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits,
//! allowing users to get started with a single import.
//!
//! # Usage
//!
//! ```rust
//! use fieldwise::prelude::*;
//!
//! #[derive(Fieldwise, Clone, Default)]
//! pub struct Row {
//!     pub id: i64,
//!     pub active: u8,
//! }
//!
//! #[derive(Fieldwise, Clone, Default)]
//! pub struct Message {
//!     pub id: u32,
//!     pub active: bool,
//! }
//!
//! let mut message = Message::default();
//! copy(&Row { id: 4, active: 1 }, &mut message);
//! assert_eq!(message.id, 4);
//! assert!(message.active);
//! ```
//!
//! # What's Included
//!
//! - [`copy`] / [`copy_with_mapping`]: the process-wide entry points
//! - [`register_converter`]: extend the process-wide registry
//! - [`Copier`], [`ConverterRegistry`], [`CopyConfig`]: explicitly owned instances
//! - [`NameMap`]: field-name overrides
//! - [`Reflect`], [`Record`]: the introspection traits
//! - [`Fieldwise`]: the derive macro
//!
//! # Not Included
//!
//! The value views (`ValueRef`, `ValueMut`), slot traits and `Indirect` /
//! `Sequence` are only needed when implementing `Reflect` by hand; import
//! them from the crate root.

pub use crate::config::CopyConfig;
pub use crate::converter::ConverterRegistry;
pub use crate::engine::Copier;
pub use crate::resolver::NameMap;
pub use crate::traits::{Record, Reflect};
pub use crate::{copy, copy_with_mapping, register_converter};

pub use fieldwise_macros::Fieldwise;
