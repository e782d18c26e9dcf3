//! Rules every [`ConverterRegistry::new`] starts with.
//!
//! Epoch-second integers convert to and from timestamps, and timestamps
//! render as text in local time. A zero integer maps to the zero timestamp
//! and any timestamp at or before the epoch maps to zero.

use chrono::{DateTime, Local, Utc};

use super::ConverterRegistry;
use crate::utils::datetime::{
    epoch_seconds, epoch_seconds_signed, format_local, from_epoch_seconds,
};

pub fn register_builtins(registry: &ConverterRegistry) {
    registry.register(|value: &DateTime<Utc>| epoch_seconds(value));
    registry.register(|value: &u64| from_epoch_seconds(*value));
    registry.register(|value: &DateTime<Utc>| epoch_seconds_signed(value));
    registry.register(|value: &i64| from_epoch_seconds(u64::try_from(*value).unwrap_or(0)));

    registry.register(|value: &DateTime<Local>| epoch_seconds(value));
    registry.register(|value: &u64| from_epoch_seconds(*value).with_timezone(&Local));

    registry.register(|value: &DateTime<Utc>| value.with_timezone(&Local));
    registry.register(|value: &DateTime<Local>| value.with_timezone(&Utc));

    registry.register(|value: &DateTime<Utc>| format_local(value));
    registry.register(|value: &DateTime<Local>| format_local(value));

    #[cfg(feature = "prost")]
    protobuf::register(registry);
}

#[cfg(feature = "prost")]
mod protobuf {
    use chrono::{DateTime, Local, Utc};
    use prost_types::Timestamp;

    use super::ConverterRegistry;
    use crate::utils::datetime::format_local;

    fn to_datetime(value: &Timestamp) -> DateTime<Utc> {
        u32::try_from(value.nanos)
            .ok()
            .and_then(|nanos| DateTime::from_timestamp(value.seconds, nanos))
            .unwrap_or_default()
    }

    fn from_datetime(value: &DateTime<Utc>) -> Timestamp {
        Timestamp {
            seconds: value.timestamp(),
            nanos: value.timestamp_subsec_nanos() as i32,
        }
    }

    pub(super) fn register(registry: &ConverterRegistry) {
        registry.register(|value: &Timestamp| u64::try_from(value.seconds).unwrap_or(0));
        registry.register(|value: &u64| Timestamp {
            seconds: i64::try_from(*value).unwrap_or(0),
            nanos: 0,
        });

        registry.register(|value: &DateTime<Utc>| from_datetime(value));
        registry.register(to_datetime);
        registry.register(|value: &Timestamp| to_datetime(value).with_timezone(&Local));

        registry.register(|value: &Timestamp| format_local(&to_datetime(value)));
    }
}
