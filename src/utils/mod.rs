//! Utility modules for fieldwise
//!
//! This module contains helpers shared by the built-in converters.

pub mod datetime;

// Re-export commonly used items
pub use datetime::{DISPLAY_FORMAT, chrono};
