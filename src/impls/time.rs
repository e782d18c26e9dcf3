use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

// Timestamps have no structural rules of their own; they move through
// identity copies and the converters in `converter::builtin`.
crate::opaque!(DateTime<Utc>, DateTime<Local>, NaiveDateTime, NaiveDate);

#[cfg(feature = "prost")]
crate::opaque!(prost_types::Timestamp);
