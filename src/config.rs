//! Copy configuration.
//!
//! The only tunable is the record recursion ceiling. It lives both on
//! [`CopyConfig`] for explicitly constructed [`Copier`](crate::Copier)s and in
//! a process-wide atomic read by the free-standing [`copy`](crate::copy)
//! functions.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::errors::{FieldwiseError, FieldwiseResult};

/// Record recursion ceiling used unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u8 = 5;

/// Environment variable read by [`CopyConfig::from_env`].
pub const MAX_DEPTH_ENV: &str = "FIELDWISE_MAX_DEPTH";

static MAX_DEPTH: AtomicU8 = AtomicU8::new(DEFAULT_MAX_DEPTH);

/// Configuration for a [`Copier`](crate::Copier).
///
/// # Examples
///
/// ```
/// use fieldwise::CopyConfig;
///
/// // Create with defaults
/// let config = CopyConfig::default();
/// assert_eq!(config.max_depth, 5);
///
/// // Customize options
/// let config = CopyConfig::builder().max_depth(2).build();
/// assert_eq!(config.max_depth, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[builder(doc)]
pub struct CopyConfig {
    /// Number of nested record levels copied before deeper records are left
    /// untouched. Bounds recursion through cyclic object graphs.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,
}

fn default_max_depth() -> u8 {
    DEFAULT_MAX_DEPTH
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CopyConfig {
    /// Snapshot of the process-wide settings.
    pub fn global() -> Self {
        Self {
            max_depth: max_depth(),
        }
    }

    /// Defaults, overridden by `FIELDWISE_MAX_DEPTH` when set.
    pub fn from_env() -> FieldwiseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> FieldwiseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            config.max_depth =
                value
                    .trim()
                    .parse()
                    .map_err(|source| FieldwiseError::InvalidMaxDepth {
                        key: MAX_DEPTH_ENV,
                        value: value.clone(),
                        source,
                    })?;
        }
        Ok(config)
    }
}

/// Current process-wide record recursion ceiling.
pub fn max_depth() -> u8 {
    MAX_DEPTH.load(Ordering::Relaxed)
}

/// Changes the process-wide record recursion ceiling for subsequent copies.
pub fn set_max_depth(depth: u8) {
    log::debug!("setting max copy depth to {depth}");
    MAX_DEPTH.store(depth, Ordering::Relaxed);
}
