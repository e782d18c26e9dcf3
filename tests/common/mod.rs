// Common test utilities and models

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fieldwise::{ConverterRegistry, Copier, CopyConfig, Fieldwise};

/// Route `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A copier with its own built-in registry, isolated from the process-wide one.
pub fn isolated_copier() -> Copier {
    init_logging();
    Copier::new(Arc::new(ConverterRegistry::new()), CopyConfig::default())
}

pub fn copier_with_depth(max_depth: u8) -> Copier {
    init_logging();
    Copier::new(
        Arc::new(ConverterRegistry::new()),
        CopyConfig::builder().max_depth(max_depth).build(),
    )
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("timestamp in range")
}

#[derive(Fieldwise, Debug, Clone, Default, PartialEq)]
#[fieldwise(rename_all = "PascalCase")]
pub struct Attach {
    pub url: String,
    pub r#type: bool,
}

/// Persistence-side model.
#[derive(Fieldwise, Debug, Clone, Default)]
#[fieldwise(rename_all = "PascalCase")]
pub struct Soft {
    pub name: String,
    pub price: f64,
    pub subp: Option<Box<Soft>>,
    pub att: Attach,
    #[fieldwise(rename = "CreateAT")]
    pub create_at: DateTime<Utc>,
    pub tags: Vec<i32>,
    pub version: u32,
    pub time: DateTime<Utc>,
    pub attaches: Vec<Box<Attach>>,
    pub soft_id: i64,
}

/// Transport-side model.
#[derive(Fieldwise, Debug, Clone, Default)]
#[fieldwise(rename_all = "PascalCase")]
pub struct Project {
    pub name: String,
    pub price: f32,
    pub create_at: u64,
    pub att: Attach,
    pub tags: Vec<i64>,
    pub subp: Option<Box<Project>>,
    pub version: u8,
    pub time: DateTime<Utc>,
    pub attaches: Vec<Option<Box<Attach>>>,
    pub project_id: i64,
}
