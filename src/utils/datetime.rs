//! Epoch-second and display helpers for the built-in timestamp converters.
//!
//! The "zero" timestamp is `DateTime::<Utc>::default()`, the Unix epoch, so
//! that a zero integer and a zero timestamp map onto each other in both
//! directions.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Layout used when rendering a timestamp as text, always in local time.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whole seconds since the epoch, with anything at or before the epoch
/// collapsed to zero.
pub fn epoch_seconds<Tz: TimeZone>(value: &DateTime<Tz>) -> u64 {
    u64::try_from(value.timestamp()).unwrap_or(0)
}

/// Signed variant of [`epoch_seconds`]; negative instants still map to zero.
pub fn epoch_seconds_signed<Tz: TimeZone>(value: &DateTime<Tz>) -> i64 {
    value.timestamp().max(0)
}

/// The timestamp `seconds` after the epoch. Zero, and values chrono cannot
/// represent, yield the zero timestamp.
pub fn from_epoch_seconds(seconds: u64) -> DateTime<Utc> {
    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .unwrap_or_default()
}

/// Renders `value` in local time using [`DISPLAY_FORMAT`].
pub fn format_local<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

// Re-export chrono for convenience
pub use chrono;
