use proc_macro2::Span;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldwiseDeriveError {
    #[error("Fieldwise can only be derived for structs with named fields, found {0}")]
    IncorrectRecordType(&'static str),
    #[error("Unknown rename rule {0:?}, expected one of {rules}", rules = crate::util::naming::RenameRule::EXPECTED)]
    UnknownRenameRule(String),
    #[error("Unknown fieldwise attribute `{0}`")]
    UnknownAttribute(String),
    #[error("`{0}` is not allowed here")]
    MisplacedAttribute(String),
    #[error("Duplicate exposed field name {0:?}")]
    DuplicateName(String),
}

impl FieldwiseDeriveError {
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }
}
