use std::num::ParseIntError;

use thiserror::Error;

pub type FieldwiseResult<T> = Result<T, FieldwiseError>;

/// Errors from the few fallible APIs. Copies themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldwiseError {
    #[error("Invalid value {value:?} for {key}: {source}")]
    InvalidMaxDepth {
        key: &'static str,
        value: String,
        source: ParseIntError,
    },
}
