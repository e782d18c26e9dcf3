use syn::{Attribute, DeriveInput, FieldsNamed, LitStr, Visibility};

use crate::errors::FieldwiseDeriveError;
use crate::item_info::record::FieldOptions;
use crate::util::naming::RenameRule;

pub mod naming;

pub const ATTRIBUTE: &str = "fieldwise";

pub fn extract_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let found = match &input.data {
        syn::Data::Struct(data_struct) => match &data_struct.fields {
            syn::Fields::Named(fields) => return Ok(fields),
            syn::Fields::Unnamed(_) => "a tuple struct",
            syn::Fields::Unit => "a unit struct",
        },
        syn::Data::Enum(_) => "an enum",
        syn::Data::Union(_) => "a union",
    };
    Err(FieldwiseDeriveError::IncorrectRecordType(found).at(input.ident.span()))
}

/// Any visibility wider than the struct's own module. `pub(self)` is private.
pub fn is_exposed(visibility: &Visibility) -> bool {
    match visibility {
        Visibility::Inherited => false,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Public(_) => true,
    }
}

fn fieldwise_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|att| att.path().is_ident(ATTRIBUTE))
}

/// Parses `#[fieldwise(rename_all = "...")]` on the struct itself.
pub fn container_rename_rule(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rule = None;
    for attribute in fieldwise_attributes(attrs) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: LitStr = meta.value()?.parse()?;
                let parsed = value.value().parse::<RenameRule>().map_err(|_| {
                    FieldwiseDeriveError::UnknownRenameRule(value.value()).at(value.span())
                })?;
                rule = Some(parsed);
                Ok(())
            } else if meta.path.is_ident("skip")
                || meta.path.is_ident("include")
                || meta.path.is_ident("rename")
            {
                Err(meta.error(FieldwiseDeriveError::MisplacedAttribute(
                    path_text(&meta.path),
                )))
            } else {
                Err(meta.error(FieldwiseDeriveError::UnknownAttribute(path_text(&meta.path))))
            }
        })?;
    }
    Ok(rule)
}

/// Parses `#[fieldwise(skip)]`, `#[fieldwise(include)]` and
/// `#[fieldwise(rename = "...")]` on one field.
pub fn field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attribute in fieldwise_attributes(attrs) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("include") {
                options.include = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("rename_all") {
                Err(meta.error(FieldwiseDeriveError::MisplacedAttribute("rename_all".into())))
            } else {
                Err(meta.error(FieldwiseDeriveError::UnknownAttribute(path_text(&meta.path))))
            }
        })?;
    }
    Ok(options)
}

fn path_text(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
