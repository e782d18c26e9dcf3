//! Numeric and boolean coercion rules.

mod common;

use common::isolated_copier;
use fieldwise::{Copier, Fieldwise};
use quickcheck::{QuickCheck, TestResult};

#[derive(Fieldwise, Debug, Clone, Default)]
struct Reading {
    pub value: i64,
    pub count: u32,
    pub ratio: f64,
    pub enabled: bool,
    pub level: i32,
}

#[derive(Fieldwise, Debug, Clone, Default)]
struct Unsigned {
    pub value: u16,
    pub count: i8,
    pub ratio: f32,
    pub enabled: u8,
    pub level: bool,
}

fn copied<S: fieldwise::Reflect, D: fieldwise::Reflect + Default>(
    copier: &Copier,
    source: S,
) -> D {
    let mut target = D::default();
    copier.copy(&source, &mut target);
    target
}

#[test]
fn test_negative_into_unsigned_clamps() {
    let copier = isolated_copier();
    assert_eq!(copied::<_, u16>(&copier, -32i64), 0);
    assert_eq!(copied::<_, u64>(&copier, -32i8), 0);
    assert_eq!(copied::<_, i16>(&copier, -32i64), -32);
    assert_eq!(copied::<_, i64>(&copier, -32i16), -32);
}

#[test]
fn test_narrowing_truncates() {
    let copier = isolated_copier();
    assert_eq!(copied::<_, u8>(&copier, 300u32), 44);
    assert_eq!(copied::<_, i8>(&copier, 200i64), -56);
    assert_eq!(copied::<_, i64>(&copier, u64::MAX), -1);
}

#[test]
fn test_floats() {
    let copier = isolated_copier();
    assert_eq!(copied::<_, f32>(&copier, 123.56f64), 123.56f32);
    assert_eq!(copied::<_, f64>(&copier, 0.5f32), 0.5);
    // Integers and floats do not mix.
    assert_eq!(copied::<_, f64>(&copier, 3i32), 0.0);
    assert_eq!(copied::<_, u32>(&copier, 3.7f64), 0);
}

#[test]
fn test_boolean_coercion() {
    let copier = isolated_copier();
    assert!(copied::<_, bool>(&copier, 6i32));
    assert!(!copied::<_, bool>(&copier, 0i32));
    assert!(copied::<_, bool>(&copier, 1u8));
    assert_eq!(copied::<_, i32>(&copier, true), 1);
    assert_eq!(copied::<_, u64>(&copier, true), 1);
    assert_eq!(copied::<_, i8>(&copier, false), 0);
}

#[test]
fn test_record_fields_coerce() {
    let copier = isolated_copier();
    let src = Reading {
        value: -32,
        count: 200,
        ratio: 0.25,
        enabled: true,
        level: 6,
    };

    let dist: Unsigned = copied(&copier, src);
    assert_eq!(dist.value, 0);
    assert_eq!(dist.count, -56);
    assert_eq!(dist.ratio, 0.25);
    assert_eq!(dist.enabled, 1);
    assert!(dist.level);
}

#[test]
fn test_signed_into_unsigned_property() {
    fn prop(value: i64) -> bool {
        let copier = isolated_copier();
        copied::<_, u64>(&copier, value) == value.max(0) as u64
    }
    QuickCheck::new().quickcheck(prop as fn(i64) -> bool);
}

#[test]
fn test_widening_preserves_value_property() {
    fn prop(signed: i32, unsigned: u32) -> bool {
        let copier = isolated_copier();
        copied::<_, i64>(&copier, signed) == i64::from(signed)
            && copied::<_, u64>(&copier, unsigned) == u64::from(unsigned)
            && copied::<_, i64>(&copier, unsigned) == i64::from(unsigned)
    }
    QuickCheck::new().quickcheck(prop as fn(i32, u32) -> bool);
}

#[test]
fn test_integer_into_bool_property() {
    fn prop(value: i64) -> TestResult {
        let copier = isolated_copier();
        TestResult::from_bool(copied::<_, bool>(&copier, value) == (value != 0))
    }
    QuickCheck::new().quickcheck(prop as fn(i64) -> TestResult);
}
