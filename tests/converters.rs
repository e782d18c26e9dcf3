//! Registered conversions, built-in timestamp rules and rule replacement.

mod common;

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use common::{at, init_logging, isolated_copier};
use fieldwise::utils::datetime::format_local;
use fieldwise::{ConverterRegistry, Copier, CopyConfig, Fieldwise};

#[derive(Fieldwise, Debug, Clone, Default)]
pub struct Event {
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub local: DateTime<Local>,
    pub label: DateTime<Utc>,
}

#[derive(Fieldwise, Debug, Clone, Default)]
pub struct EventRow {
    pub created: u64,
    pub updated: i64,
    pub local: DateTime<Utc>,
    pub label: String,
}

#[test]
fn test_timestamps_to_columns() {
    let copier = isolated_copier();
    let src = Event {
        created: at(1_000),
        updated: at(2_000),
        local: at(3_000).with_timezone(&Local),
        label: at(4_000),
    };

    let mut dist = EventRow::default();
    copier.copy(&src, &mut dist);

    assert_eq!(dist.created, 1_000);
    assert_eq!(dist.updated, 2_000);
    assert_eq!(dist.local, at(3_000));
    assert_eq!(dist.label, format_local(&at(4_000)));
}

#[test]
fn test_columns_to_timestamps() {
    let copier = isolated_copier();
    let src = EventRow {
        created: 1_000,
        updated: 2_000,
        local: at(3_000),
        label: "not parsed".into(),
    };

    let mut dist = Event::default();
    copier.copy(&src, &mut dist);

    assert_eq!(dist.created, at(1_000));
    assert_eq!(dist.updated, at(2_000));
    assert_eq!(dist.local.timestamp(), 3_000);
    // There is no String -> DateTime rule.
    assert_eq!(dist.label, DateTime::<Utc>::default());
}

#[test]
fn test_zero_timestamp_round_trip() {
    let copier = isolated_copier();

    let mut seconds = 99u64;
    copier.copy(&DateTime::<Utc>::default(), &mut seconds);
    assert_eq!(seconds, 0);

    let mut stamp = at(5);
    copier.copy(&0u64, &mut stamp);
    assert_eq!(stamp, DateTime::<Utc>::default());
}

#[cfg(feature = "prost")]
#[test]
fn test_protobuf_timestamps() {
    use prost_types::Timestamp;

    #[derive(Fieldwise, Debug, Clone, Default)]
    pub struct EventMessage {
        pub created: Timestamp,
        pub updated: Option<Timestamp>,
        pub label: Timestamp,
    }

    let copier = isolated_copier();
    let src = Event {
        created: at(1_000),
        updated: at(2_000),
        ..Default::default()
    };

    let mut message = EventMessage::default();
    copier.copy(&src, &mut message);
    assert_eq!(message.created.seconds, 1_000);
    assert_eq!(message.updated.as_ref().map(|stamp| stamp.seconds), Some(2_000));

    let mut row = EventRow::default();
    copier.copy(&message, &mut row);
    assert_eq!(row.created, 1_000);
    assert_eq!(row.label, format_local(&DateTime::<Utc>::default()));
}

#[test]
fn test_custom_rule_replaces_builtin() {
    init_logging();
    let registry = Arc::new(ConverterRegistry::new());
    registry.register(|value: &DateTime<Utc>| value.to_rfc3339());
    let copier = Copier::new(registry.clone(), CopyConfig::default());

    let mut text = String::new();
    copier.copy(&at(0), &mut text);
    assert_eq!(text, "1970-01-01T00:00:00+00:00");

    // Still exactly one rule for the pair.
    let before = registry.len();
    registry.register(|value: &DateTime<Utc>| value.timestamp().to_string());
    assert_eq!(registry.len(), before);

    copier.copy(&at(42), &mut text);
    assert_eq!(text, "42");
}

#[test]
fn test_rule_for_record_pair() {
    #[derive(Fieldwise, Debug, Clone, Default)]
    pub struct Money {
        pub cents: i64,
    }

    #[derive(Fieldwise, Debug, Clone, Default)]
    pub struct Price {
        pub cents: i64,
        pub display: String,
    }

    let copier = isolated_copier();
    copier.registry().register(|value: &Money| Price {
        cents: value.cents,
        display: format!("{}.{:02}", value.cents / 100, value.cents % 100),
    });

    let mut price = Price::default();
    copier.copy(&Money { cents: 1_250 }, &mut price);
    assert_eq!(price.display, "12.50");
}

#[test]
fn test_opaque_types_need_a_rule() {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Celsius(f64);
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Fahrenheit(f64);
    fieldwise::opaque!(Celsius, Fahrenheit);

    let copier = Copier::new(Arc::new(ConverterRegistry::empty()), CopyConfig::default());
    let mut target = Fahrenheit(1.0);
    copier.copy(&Celsius(100.0), &mut target);
    assert_eq!(target, Fahrenheit(1.0));

    copier
        .registry()
        .register(|value: &Celsius| Fahrenheit(value.0 * 9.0 / 5.0 + 32.0));
    copier.copy(&Celsius(100.0), &mut target);
    assert_eq!(target, Fahrenheit(212.0));

    let mut same = Celsius::default();
    copier.copy(&Celsius(3.0), &mut same);
    assert_eq!(same, Celsius(3.0));
}

#[test]
fn test_registration_during_concurrent_copies() {
    init_logging();
    let registry = Arc::new(ConverterRegistry::empty());
    registry.register(|_: &u32| 0i8);
    let copier = Copier::new(registry.clone(), CopyConfig::default());

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..2_000u32 {
                let value = (round % 2) as i8;
                registry.register(move |_: &u32| value);
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..2_000 {
                    let mut target = -1i8;
                    copier.copy(&123u32, &mut target);
                    assert!(target == 0 || target == 1, "unexpected {target}");
                }
            });
        }
    });

    assert_eq!(registry.len(), 1);
    assert!(registry.contains::<u32, i8>());
}
