//! Field tables produced by `#[derive(Fieldwise)]`.

mod common;

use common::isolated_copier;
use fieldwise::{Fieldwise, Kind, Record, Reflect};

#[derive(Fieldwise, Debug, Clone, Default)]
pub struct Plain {
    pub id: i64,
    pub display_name: String,
    hidden: u8,
    #[fieldwise(include)]
    internal_score: u32,
    #[fieldwise(skip)]
    pub cache: Vec<u8>,
}

impl Plain {
    fn with_private(hidden: u8, internal_score: u32) -> Self {
        Self {
            hidden,
            internal_score,
            ..Default::default()
        }
    }
}

#[derive(Fieldwise, Debug, Clone, Default)]
#[fieldwise(rename_all = "camelCase")]
pub struct Renamed {
    pub display_name: String,
    #[fieldwise(rename = "ID")]
    pub id: i64,
    pub r#type: String,
}

#[derive(Fieldwise, Debug, Clone, Default)]
pub struct Wrapper<T> {
    pub inner: T,
    pub tag: String,
}

fn names(record: &dyn Record) -> Vec<&'static str> {
    record.fields().iter().map(|field| field.name).collect()
}

#[test]
fn test_exposed_fields_in_declaration_order() {
    let plain = Plain::default();
    assert_eq!(names(&plain), vec!["id", "display_name", "internal_score"]);
    assert!(plain.field("internal_score").is_some());
    assert!(plain.field("hidden").is_none());
    assert!(plain.field("cache").is_none());
}

#[test]
fn test_rename_rules() {
    let renamed = Renamed::default();
    assert_eq!(names(&renamed), vec!["displayName", "ID", "type"]);
    assert!(renamed.field("display_name").is_none());
    assert_eq!(renamed.field("ID").map(|value| value.kind()), Some(Kind::Int));
}

#[test]
fn test_field_access() {
    let mut plain = Plain {
        id: 3,
        ..Plain::with_private(1, 2)
    };
    assert_eq!(plain.kind(), Kind::Record);
    assert_eq!(plain.field("id").map(|value| value.kind()), Some(Kind::Int));
    assert_eq!(
        plain.field("internal_score").map(|value| value.kind()),
        Some(Kind::Uint)
    );

    let slot = plain.field_mut("display_name").unwrap();
    assert!(slot.assign_from(&String::from("written")));
    assert_eq!(plain.display_name, "written");
}

#[test]
fn test_renamed_fields_match_case_insensitively() {
    let copier = isolated_copier();
    let src = Renamed {
        display_name: "x".into(),
        id: 5,
        r#type: "kind".into(),
    };

    let mut dist = Plain::with_private(7, 0);
    copier.copy(&src, &mut dist);
    // "id" folds onto "ID"; "display_name" has no counterpart in "displayName".
    assert_eq!(dist.id, 5);
    assert_eq!(dist.display_name, "");
    assert_eq!(dist.hidden, 7);
}

#[test]
fn test_private_fields_are_left_alone() {
    let copier = isolated_copier();
    let src = Plain {
        cache: vec![1, 2],
        ..Plain::with_private(9, 11)
    };

    let mut dist = Plain::default();
    copier.copy(&src, &mut dist);
    // Same type: the whole value is cloned, private fields included.
    assert_eq!(dist.hidden, 9);
    assert_eq!(dist.cache, vec![1, 2]);

    let mut wrapped = Wrapper::<Plain>::default();
    copier.copy(
        &Wrapper {
            inner: src,
            tag: "t".into(),
        },
        &mut wrapped,
    );
    assert_eq!(wrapped.inner.internal_score, 11);
}

#[test]
fn test_generic_records() {
    let copier = isolated_copier();
    let src = Wrapper {
        inner: -4i32,
        tag: "generic".into(),
    };

    let mut dist = Wrapper::<u64>::default();
    copier.copy(&src, &mut dist);
    assert_eq!(dist.inner, 0);
    assert_eq!(dist.tag, "generic");
    assert_eq!(names(&dist), vec!["inner", "tag"]);
}
